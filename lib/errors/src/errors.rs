use std::{
    fmt::{Display, Formatter},
    ops::{Deref, DerefMut},
};

use cursor::Line;
use itertools::Itertools;

/// Where on its line a compile-time error was detected.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Location {
    /// Errors not tied to a token, e.g. from the scanner.
    #[default]
    None,
    /// The end-of-input token.
    End,
    /// Any other token, identified by its lexeme.
    Lexeme(String),
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::None => Ok(()),
            Location::End => write!(f, " at end"),
            Location::Lexeme(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("[line {line}] Error{location}: {message}")]
pub struct LoxError {
    pub line: Line,
    pub location: Location,
    pub message: String,
}

impl LoxError {
    pub fn new(line: Line, location: Location, message: impl ToString) -> Self {
        Self { line, location, message: message.to_string() }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Default)]
pub struct LoxErrors(pub Vec<LoxError>);

impl From<LoxError> for LoxErrors {
    fn from(e: LoxError) -> Self {
        Self(vec![e])
    }
}

impl Deref for LoxErrors {
    type Target = Vec<LoxError>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LoxErrors {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Display for LoxErrors {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("\n"))
    }
}

pub type Result<T> = std::result::Result<T, LoxError>;
