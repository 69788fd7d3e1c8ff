use super::types::{Located, Value};
use crate::common;
use crate::spec::types::{ByteOrder, DataType};
use std::convert::TryFrom;
use std::fmt::Display;
use std::num::IntErrorKind;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    MalformedLiteral(String, DataType),
    ValueOutOfRange(String, DataType),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedLiteral(raw, ty) => {
                write!(f, "Malformed {} literal '{}'", ty, raw)
            }
            Error::ValueOutOfRange(raw, ty) => {
                write!(f, "Literal '{}' out of range for {}", raw, ty)
            }
        }
    }
}

trait Pack {
    fn pack(self, order: ByteOrder) -> Vec<u8>;
}

macro_rules! impl_pack {
    ($($ty:ty),*) => {
        $(impl Pack for $ty {
            fn pack(self, order: ByteOrder) -> Vec<u8> {
                match order {
                    ByteOrder::Native => self.to_ne_bytes().to_vec(),
                    ByteOrder::LittleEndian => self.to_le_bytes().to_vec(),
                    ByteOrder::BigEndian => self.to_be_bytes().to_vec(),
                }
            }
        })*
    };
}

impl_pack!(i8, u8, i16, u16, i32, u32, i64, u64, f32);

/// Packs one captured literal into exactly `data_type.width()` bytes under the
/// captured byte order. Pure; every value encodes independently of the rest.
pub fn encode(value: &Value) -> Result<Vec<u8>, Error> {
    let ty = value.data_type;
    let order = value.byte_order;

    match ty {
        DataType::I8 => Ok(parse_int::<i8>(&value.raw, ty)?.pack(order)),
        DataType::U8 => Ok(parse_int::<u8>(&value.raw, ty)?.pack(order)),
        DataType::I16 => Ok(parse_int::<i16>(&value.raw, ty)?.pack(order)),
        DataType::U16 => Ok(parse_int::<u16>(&value.raw, ty)?.pack(order)),
        DataType::I32 => Ok(parse_int::<i32>(&value.raw, ty)?.pack(order)),
        DataType::U32 => Ok(parse_int::<u32>(&value.raw, ty)?.pack(order)),
        DataType::I64 => Ok(parse_int::<i64>(&value.raw, ty)?.pack(order)),
        DataType::U64 => Ok(parse_int::<u64>(&value.raw, ty)?.pack(order)),
        DataType::F32 => Ok(parse_float(&value.raw, ty)?.pack(order)),
    }
}

/// Concatenates each value's bytes in emission order. The first failure aborts
/// the run with the offending value's location attached.
pub fn encode_all(values: Vec<Located<Value>>) -> Result<Vec<u8>, Located<Error>> {
    common::accumulate_vecs(
        values
            .into_iter()
            .map(|value| value.map_result_value(|value| encode(&value))),
    )
}

// The i128 intermediate covers i64::MIN through u64::MAX; narrowing via
// TryFrom then decides in-range-ness for every integer target.
fn parse_int<T: TryFrom<i128>>(raw: &str, ty: DataType) -> Result<T, Error> {
    let (negative, magnitude) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let (radix, digits) = sniff_radix(magnitude);

    // A second sign after the first (or after a radix prefix) is not a literal.
    if digits.starts_with('+') || digits.starts_with('-') {
        return Err(Error::MalformedLiteral(raw.to_owned(), ty));
    }

    let wide = i128::from_str_radix(digits, radix).map_err(|err| match err.kind() {
        // Too big for the i128 intermediate is too big for every target type.
        IntErrorKind::PosOverflow => Error::ValueOutOfRange(raw.to_owned(), ty),
        _ => Error::MalformedLiteral(raw.to_owned(), ty),
    })?;
    let wide = if negative { -wide } else { wide };

    T::try_from(wide).map_err(|_| Error::ValueOutOfRange(raw.to_owned(), ty))
}

// The prefix sits after the sign, so -0x10 reads as -16.
fn sniff_radix(magnitude: &str) -> (u32, &str) {
    if let Some(digits) = strip_radix_prefix(magnitude, "0x", "0X") {
        (16, digits)
    } else if let Some(digits) = strip_radix_prefix(magnitude, "0o", "0O") {
        (8, digits)
    } else if let Some(digits) = strip_radix_prefix(magnitude, "0b", "0B") {
        (2, digits)
    } else {
        (10, magnitude)
    }
}

fn strip_radix_prefix<'a>(s: &'a str, lower: &str, upper: &str) -> Option<&'a str> {
    s.strip_prefix(lower).or_else(|| s.strip_prefix(upper))
}

fn parse_float(raw: &str, ty: DataType) -> Result<f32, Error> {
    raw.parse::<f32>()
        .map_err(|_| Error::MalformedLiteral(raw.to_owned(), ty))
}
