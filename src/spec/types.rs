use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// The byte orders a value can be packed under. The variant spellings below are
/// exactly the directive tokens recognized in source text.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, EnumIter, EnumString)]
pub enum ByteOrder {
    #[strum(serialize = "native")]
    Native,
    #[strum(serialize = "le")]
    LittleEndian,
    #[strum(serialize = "be")]
    BigEndian,
}

impl Default for ByteOrder {
    fn default() -> ByteOrder {
        ByteOrder::Native
    }
}

impl ByteOrder {
    pub fn lookup(ident: &str) -> Option<ByteOrder> {
        ByteOrder::from_str(ident).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Signed,
    Unsigned,
    Float,
}

/// The closed set of value types, spelled in source text exactly as their
/// lowercase names. Each variant fixes a storage width and a literal parse rule.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, EnumIter, EnumString)]
pub enum DataType {
    #[strum(serialize = "i8")]
    I8,
    #[strum(serialize = "u8")]
    U8,
    #[strum(serialize = "i16")]
    I16,
    #[strum(serialize = "u16")]
    U16,
    #[strum(serialize = "i32")]
    I32,
    #[strum(serialize = "u32")]
    U32,
    #[strum(serialize = "i64")]
    I64,
    #[strum(serialize = "u64")]
    U64,
    #[strum(serialize = "f32")]
    F32,
}

impl DataType {
    pub fn lookup(ident: &str) -> Option<DataType> {
        DataType::from_str(ident).ok()
    }

    pub const fn width(self) -> usize {
        match self {
            DataType::I8 | DataType::U8 => 1,
            DataType::I16 | DataType::U16 => 2,
            DataType::I32 | DataType::U32 | DataType::F32 => 4,
            DataType::I64 | DataType::U64 => 8,
        }
    }

    pub const fn kind(self) -> NumericKind {
        match self {
            DataType::I8 | DataType::I16 | DataType::I32 | DataType::I64 => NumericKind::Signed,
            DataType::U8 | DataType::U16 | DataType::U32 | DataType::U64 => NumericKind::Unsigned,
            DataType::F32 => NumericKind::Float,
        }
    }
}
