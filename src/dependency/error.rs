//! Error types for dependency parsing

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors that can occur when parsing the `A,B->C` notation
///
/// Returned by [`FunctionalDependency::parse`](super::FunctionalDependency::parse)
/// and [`DependencySet::parse`](super::DependencySet::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDependencyError {
    /// The input is not a well-formed dependency list
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The original input string that failed to parse
        input: Arc<str>,
        /// Byte offset in the input where the error occurred, if known
        position: Option<usize>,
    },
    /// A `;`-separated statement names attributes but has no `->`
    ///
    /// Reported instead of a bare syntax error because `A B C` reads like a
    /// plain attribute list and the lalrpop message would only point at the end.
    MissingArrow {
        /// The original input string that failed to parse
        input: Arc<str>,
        /// Byte offset of the first attribute of the offending statement
        position: usize,
    },
}

impl ParseDependencyError {
    /// The input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            ParseDependencyError::InvalidSyntax { input, .. }
            | ParseDependencyError::MissingArrow { input, .. } => input,
        }
    }

    /// Byte offset of the error in [`input`](Self::input), if known
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseDependencyError::InvalidSyntax { position, .. } => *position,
            ParseDependencyError::MissingArrow { position, .. } => Some(*position),
        }
    }
}

impl fmt::Display for ParseDependencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDependencyError::InvalidSyntax {
                message,
                input,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "Failed to parse dependency at position {}: {}. Input: {:?}",
                        pos, message, input
                    )
                } else {
                    write!(
                        f,
                        "Failed to parse dependency: {}. Input: {:?}",
                        message, input
                    )
                }
            }
            ParseDependencyError::MissingArrow { input, position } => write!(
                f,
                "Dependency at position {} has no '->' between its sides. Input: {:?}",
                position, input
            ),
        }
    }
}

impl std::error::Error for ParseDependencyError {}

impl From<ParseDependencyError> for io::Error {
    fn from(err: ParseDependencyError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
