//! This module contains some error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An enumeration of the errors that may occur when parsing a [Board](crate::Board)
/// from its textual representation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PuzzleParseError {

    /// Indicates that the input does not contain exactly 9 rows which carry
    /// digits. Lines without any digit are skipped during parsing and do not
    /// count towards this limit.
    WrongNumberOfRows,

    /// Indicates that a row carries digits, but not exactly 9 of them.
    WrongRowLength
}

impl Display for PuzzleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleParseError::WrongNumberOfRows =>
                write!(f, "expected exactly 9 rows of digits"),
            PuzzleParseError::WrongRowLength =>
                write!(f, "expected exactly 9 digits per row")
        }
    }
}

impl Error for PuzzleParseError { }

/// Syntactic sugar for `Result<V, PuzzleParseError>`.
pub type PuzzleParseResult<V> = Result<V, PuzzleParseError>;

/// The error raised when a string does not name a
/// [PuzzleMode](crate::constraint::PuzzleMode). It stores the offending
/// string for display in diagnostics.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModeParseError {
    mode: String
}

impl ModeParseError {
    pub(crate) fn new(mode: &str) -> ModeParseError {
        ModeParseError {
            mode: mode.to_owned()
        }
    }
}

impl Display for ModeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f,
            "invalid puzzle mode {:?}, expected \"c\", \"classic\", \"d\", or \
            \"diagonal\"", self.mode)
    }
}

impl Error for ModeParseError { }
