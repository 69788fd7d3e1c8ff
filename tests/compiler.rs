use binc::compiler::{
    self,
    phases::{
        encode, scan,
        types::{Loc, Located},
    },
    Error,
};
use binc::spec::types::DataType;

#[test]
fn literal_example() {
    assert_eq!(
        compiler::compile("i32 le 10 20 i8 30"),
        Ok(vec![0x0A, 0x00, 0x00, 0x00, 0x14, 0x00, 0x00, 0x00, 0x1E])
    );
}

#[test]
fn empty_and_directive_only_inputs() {
    assert_eq!(compiler::compile(""), Ok(vec![]));
    assert_eq!(compiler::compile("i32 le be native u8\n\n"), Ok(vec![]));
    assert_eq!(compiler::compile("# nothing but a comment\n"), Ok(vec![]));
}

#[test]
fn emission_order_ignores_line_boundaries() {
    assert_eq!(
        compiler::compile("u8 1 2\n3 u16 le 4"),
        Ok(vec![1, 2, 3, 4, 0])
    );
}

#[test]
fn byte_order_persists_across_types_and_lines() {
    assert_eq!(
        compiler::compile("be\ni16 1\n\n# still big-endian\ni32 2"),
        Ok(vec![0x00, 0x01, 0x00, 0x00, 0x00, 0x02])
    );
}

#[test]
fn type_persists_across_blank_and_comment_lines() {
    assert_eq!(
        compiler::compile("i32 le\n\n# interlude\n\n7"),
        Ok(vec![0x07, 0x00, 0x00, 0x00])
    );
}

#[test]
fn le_and_be_are_byte_reversed() {
    let le = compiler::compile("i32 le 0x12345678").unwrap();
    let be = compiler::compile("i32 be 0x12345678").unwrap();
    let reversed: Vec<u8> = be.iter().rev().cloned().collect();
    assert_eq!(le, reversed);
    assert_eq!(le, vec![0x78, 0x56, 0x34, 0x12]);

    // Single-byte types cannot tell the orders apart.
    assert_eq!(
        compiler::compile("u8 le 0xAB").unwrap(),
        compiler::compile("u8 be 0xAB").unwrap()
    );
}

#[test]
fn native_is_the_host_order() {
    assert_eq!(
        compiler::compile("u32 native 1"),
        Ok(1u32.to_ne_bytes().to_vec())
    );

    // Native is also the initial order, before any directive.
    assert_eq!(
        compiler::compile("u32 1"),
        Ok(1u32.to_ne_bytes().to_vec())
    );
}

#[test]
fn round_trips() {
    let bin = compiler::compile("i64 le -123456789").unwrap();
    assert_eq!(
        i64::from_le_bytes([bin[0], bin[1], bin[2], bin[3], bin[4], bin[5], bin[6], bin[7]]),
        -123456789
    );

    let bin = compiler::compile("u16 be 0xBEEF").unwrap();
    assert_eq!(u16::from_be_bytes([bin[0], bin[1]]), 0xBEEF);

    let bin = compiler::compile("f32 le 3.25e-2").unwrap();
    assert_eq!(
        f32::from_le_bytes([bin[0], bin[1], bin[2], bin[3]]),
        3.25e-2
    );
}

#[test]
fn comment_consumes_rest_of_line() {
    // The `5 10` after the marker must never become literals.
    assert_eq!(compiler::compile("i32 #5 10\nle 7"), Ok(vec![7, 0, 0, 0]));
    assert_eq!(
        compiler::compile("i32 le 1 # trailing note"),
        Ok(vec![1, 0, 0, 0])
    );
}

#[test]
fn literal_before_any_type_directive() {
    assert_eq!(
        compiler::compile("le 10"),
        Err(Error::Scan(Located::with_loc(
            Loc::new(1, 4),
            scan::Error::MissingTypeContext(String::from("10"))
        )))
    );
}

#[test]
fn out_of_range_literal() {
    assert_eq!(compiler::compile("u8 255"), Ok(vec![0xFF]));
    assert_eq!(
        compiler::compile("u8 255 256"),
        Err(Error::Encode(Located::with_loc(
            Loc::new(1, 8),
            encode::Error::ValueOutOfRange(String::from("256"), DataType::U8)
        )))
    );
}

#[test]
fn malformed_literal() {
    assert_eq!(
        compiler::compile("i32 12ab"),
        Err(Error::Encode(Located::with_loc(
            Loc::new(1, 5),
            encode::Error::MalformedLiteral(String::from("12ab"), DataType::I32)
        )))
    );

    // Unknown identifiers are not directives, so they fall through to the
    // literal rule and fail there.
    assert_eq!(
        compiler::compile("i16 f64 1"),
        Err(Error::Encode(Located::with_loc(
            Loc::new(1, 5),
            encode::Error::MalformedLiteral(String::from("f64"), DataType::I16)
        )))
    );
}

#[test]
fn error_reports_the_right_line() {
    assert_eq!(
        compiler::compile("u16 le\n1 2\n3 0x\n4"),
        Err(Error::Encode(Located::with_loc(
            Loc::new(3, 3),
            encode::Error::MalformedLiteral(String::from("0x"), DataType::U16)
        )))
    );
}
