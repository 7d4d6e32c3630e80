//! Error types for `.fd` file parsing

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::dependency::ParseDependencyError;

/// Errors related to `.fd` file contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FdFileError {
    /// A line does not hold valid dependency notation
    Syntax {
        /// 1-based line number
        line: usize,
        /// The underlying parse error
        error: ParseDependencyError,
    },
    /// A line starts with `.` but is not a known directive
    UnknownDirective {
        /// 1-based line number
        line: usize,
        /// The directive as written
        directive: Arc<str>,
    },
}

impl fmt::Display for FdFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FdFileError::Syntax { line, error } => write!(f, "line {}: {}", line, error),
            FdFileError::UnknownDirective { line, directive } => {
                write!(f, "line {}: unknown directive '{}'", line, directive)
            }
        }
    }
}

impl std::error::Error for FdFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FdFileError::Syntax { error, .. } => Some(error),
            FdFileError::UnknownDirective { .. } => None,
        }
    }
}

impl From<FdFileError> for io::Error {
    fn from(err: FdFileError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when reading `.fd` data
///
/// This error type is returned by the `FdReader::from_fd_*` methods.
#[derive(Debug)]
pub enum FdReadError {
    /// File format error
    Format(FdFileError),
    /// IO error during reading
    Io(io::Error),
}

impl fmt::Display for FdReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FdReadError::Format(e) => write!(f, "FD format error: {}", e),
            FdReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for FdReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FdReadError::Format(e) => Some(e),
            FdReadError::Io(e) => Some(e),
        }
    }
}

impl From<FdFileError> for FdReadError {
    fn from(err: FdFileError) -> Self {
        FdReadError::Format(err)
    }
}

impl From<io::Error> for FdReadError {
    fn from(err: io::Error) -> Self {
        FdReadError::Io(err)
    }
}

impl From<FdReadError> for io::Error {
    fn from(err: FdReadError) -> Self {
        match err {
            FdReadError::Io(e) => e,
            FdReadError::Format(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}

/// Errors that can occur when writing `.fd` data
///
/// This error type is returned by the `FdWriter` methods and [`write_covers`](super::write_covers).
#[derive(Debug)]
pub enum FdWriteError {
    /// IO error during writing
    Io(io::Error),
}

impl fmt::Display for FdWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FdWriteError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for FdWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FdWriteError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for FdWriteError {
    fn from(err: io::Error) -> Self {
        FdWriteError::Io(err)
    }
}

impl From<FdWriteError> for io::Error {
    fn from(err: FdWriteError) -> Self {
        match err {
            FdWriteError::Io(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax_error() -> FdFileError {
        FdFileError::Syntax {
            line: 4,
            error: ParseDependencyError::InvalidSyntax {
                message: Arc::from("unexpected end of input"),
                input: Arc::from("A,B"),
                position: Some(3),
            },
        }
    }

    #[test]
    fn test_syntax_error_mentions_line() {
        let msg = syntax_error().to_string();
        assert!(msg.starts_with("line 4:"));
    }

    #[test]
    fn test_unknown_directive() {
        let err = FdFileError::UnknownDirective {
            line: 2,
            directive: Arc::from(".i"),
        };
        assert_eq!(err.to_string(), "line 2: unknown directive '.i'");
    }

    #[test]
    fn test_read_error_conversions() {
        let read_err: FdReadError = syntax_error().into();
        assert!(matches!(read_err, FdReadError::Format(_)));
        let io_err: io::Error = read_err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);

        let read_err: FdReadError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        let io_err: io::Error = read_err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        assert_eq!(io_err.to_string(), "missing");
    }

    #[test]
    fn test_write_error_to_io_error() {
        let write_err = FdWriteError::Io(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "permission denied",
        ));
        let io_err: io::Error = write_err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }
}
