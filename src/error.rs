//! Error types for the fd-cover library
//!
//! Every error type of the crate is re-exported here, so callers can match on
//! them without knowing which module produces them:
//!
//! - [`ParseDependencyError`]: malformed `A,B->C` notation
//! - [`FdFileError`], [`FdReadError`], [`FdWriteError`]: `.fd` file I/O
//! - [`CoverError`]: configured limits and failed verification
//! - [`CoverViolation`]: the property a candidate cover fails
//!
//! All of them convert into [`std::io::Error`], so applications that already
//! propagate `io::Result` can use `?` directly.

pub use crate::cover::{CoverError, CoverViolation};
pub use crate::dependency::ParseDependencyError;
pub use crate::fdfile::{FdFileError, FdReadError, FdWriteError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DependencySet, FdReader, FunctionalDependency};
    use std::io;

    fn load(text: &str) -> io::Result<DependencySet> {
        Ok(DependencySet::from_fd_string(text)?)
    }

    fn parse(text: &str) -> io::Result<DependencySet> {
        Ok(DependencySet::parse(text)?)
    }

    #[test]
    fn test_question_mark_into_io_error() {
        assert!(load("A->B\n").is_ok());
        assert_eq!(
            load("A B C\n").unwrap_err().kind(),
            io::ErrorKind::InvalidData
        );
        assert_eq!(parse("->->").unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_violation_inside_cover_error() {
        let violation = CoverViolation::NotImplied {
            dependency: FunctionalDependency::new(["B"], ["C"]),
        };
        let err: CoverError = violation.into();
        assert!(err.to_string().contains("B->C"));
    }
}
