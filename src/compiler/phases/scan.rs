use super::types::{Loc, Located, Value};
use crate::spec::types::{ByteOrder, DataType};
use std::fmt::Display;

pub const COMMENT_CHAR: char = '#';

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingTypeContext(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingTypeContext(raw) => write!(
                f,
                "Literal '{}' encountered before any type directive",
                raw
            ),
        }
    }
}

/// Directive state for one compilation run. It spans the whole file; only an
/// overriding directive token ever changes it, never a line boundary.
#[derive(Debug, Default)]
struct Context {
    current_type: Option<DataType>,
    current_order: ByteOrder,
}

impl Context {
    // Precedence: type directive, then byte-order directive, then literal.
    // The two directive namespaces never share an identifier.
    fn interpret(&mut self, raw: &str) -> Result<Option<Value>, Error> {
        if let Some(ty) = DataType::lookup(raw) {
            self.current_type = Some(ty);
            return Ok(None);
        }

        if let Some(order) = ByteOrder::lookup(raw) {
            self.current_order = order;
            return Ok(None);
        }

        match self.current_type {
            None => Err(Error::MissingTypeContext(raw.to_owned())),
            Some(ty) => Ok(Some(Value::new(self.current_order, ty, raw.to_owned()))),
        }
    }
}

/// Runs the directive interpreter over the whole source, yielding every
/// literal (with the state captured at its position) in order of appearance.
pub fn scan(source: &str) -> Result<Vec<Located<Value>>, Located<Error>> {
    let mut ctx = Context::default();
    let mut values = Vec::new();

    for (row, line) in source.lines().enumerate() {
        for (col, raw) in split_tokens(strip_comment(line)) {
            let loc = Loc::new(row + 1, col);
            match ctx.interpret(raw) {
                Ok(Some(value)) => values.push(Located::with_loc(loc, value)),
                Ok(None) => (),
                Err(err) => return Err(Located::with_loc(loc, err)),
            }
        }
    }

    Ok(values)
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_CHAR) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

// Like `split_whitespace`, but keeps the 1-based column of each token.
fn split_tokens(line: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for (col, (idx, c)) in line.char_indices().enumerate() {
        if c.is_whitespace() {
            if let Some((begin, begin_col)) = start.take() {
                tokens.push((begin_col + 1, &line[begin..idx]));
            }
        } else if start.is_none() {
            start = Some((idx, col));
        }
    }

    if let Some((begin, begin_col)) = start {
        tokens.push((begin_col + 1, &line[begin..]));
    }

    tokens
}
