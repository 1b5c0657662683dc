//! Error type for table lookups and parsing.

use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Truth table id outside `[0, 15]`.
    InvalidTableId(i64),
    /// String is not exactly four `0`/`1` characters.
    InvalidBitString(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTableId(id) => write!(f, "invalid truth table id {} (expected 0..=15)", id),
            Error::InvalidBitString(s) => write!(f, "invalid truth table bit string {:?}", s),
        }
    }
}

impl std::error::Error for Error {}
