use super::{encode, scan};
use crate::spec::types::{ByteOrder, DataType};
use derive_more::Constructor;
use std::fmt::Display;

/// A literal captured during scanning, frozen with the directive state in
/// effect at the moment it appeared. Later directives never touch it.
#[derive(Debug, PartialEq, Clone, Constructor)]
pub struct Value {
    pub byte_order: ByteOrder,
    pub data_type: DataType,
    pub raw: String,
}

#[derive(Debug, PartialEq, Clone, Eq, Constructor)]
pub struct Loc {
    line: usize,
    col: usize,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Located<T: Sized> {
    loc: Option<Loc>,
    val: T,
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(line: {}, col: {})", self.line, self.col)
    }
}

impl<T: Display> Display for Located<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.loc {
            None => write!(f, "@<unknown location>: {}", self.val),
            Some(loc) => write!(f, "@{}: {}", loc, self.val),
        }
    }
}

impl<T> Located<T> {
    fn new(loc: Option<Loc>, val: T) -> Self {
        Located { loc, val }
    }

    pub fn with_loc(loc: Loc, val: T) -> Self {
        Located::new(Some(loc), val)
    }

    pub fn value(self) -> T {
        self.val
    }

    pub fn map<S, F>(self, f: F) -> Located<S>
    where
        F: FnOnce(T) -> S,
    {
        Located::new(self.loc, f(self.val))
    }

    pub fn map_result_value<S, E, F>(self, f: F) -> Result<S, Located<E>>
    where
        F: FnOnce(T) -> Result<S, E>,
    {
        match f(self.val) {
            Ok(s) => Ok(s),
            Err(err) => Err(Located::new(self.loc, err)),
        }
    }
}

impl<T> From<T> for Located<T> {
    fn from(val: T) -> Self {
        Located { loc: None, val }
    }
}

#[derive(Debug, PartialEq)]
pub enum Error {
    Scan(Located<scan::Error>),
    Encode(Located<encode::Error>),
}

impl From<Located<scan::Error>> for Error {
    fn from(err: Located<scan::Error>) -> Self {
        Error::Scan(err)
    }
}

impl From<Located<encode::Error>> for Error {
    fn from(err: Located<encode::Error>) -> Self {
        Error::Encode(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Compile Error (in ")?;
        match self {
            Error::Scan(_) => write!(f, "Scanner"),
            Error::Encode(_) => write!(f, "Encoder"),
        }?;
        write!(f, "): ")?;
        match self {
            Error::Scan(err) => write!(f, "{}", err),
            Error::Encode(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}
