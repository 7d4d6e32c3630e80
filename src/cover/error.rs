//! Error types for cover operations

use std::fmt;
use std::io;

use super::verify::CoverViolation;

/// Errors reported by configured minimization
///
/// The algorithms themselves cannot fail; these errors come from the limits in
/// [`CoverConfig`](crate::CoverConfig) and from optional result verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverError {
    /// The input mentions more attributes than allowed
    AttributeLimitExceeded {
        /// Number of distinct attributes in the input
        count: usize,
        /// The configured limit
        limit: usize,
    },
    /// More dependencies would enter the search than allowed
    DependencyLimitExceeded {
        /// Number of dependencies entering the search
        count: usize,
        /// The configured limit
        limit: usize,
    },
    /// The all-covers search would visit more combinations than allowed
    CombinationLimitExceeded {
        /// Number of combinations, or `None` if it does not fit in `usize`
        count: Option<usize>,
        /// The configured limit
        limit: usize,
    },
    /// A computed cover failed verification
    Verification(CoverViolation),
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverError::AttributeLimitExceeded { count, limit } => write!(
                f,
                "Input has {} attributes, more than the limit of {}",
                count, limit
            ),
            CoverError::DependencyLimitExceeded { count, limit } => write!(
                f,
                "Search would start from {} dependencies, more than the limit of {}",
                count, limit
            ),
            CoverError::CombinationLimitExceeded {
                count: Some(count),
                limit,
            } => write!(
                f,
                "Search would visit {} combinations, more than the limit of {}",
                count, limit
            ),
            CoverError::CombinationLimitExceeded { count: None, limit } => write!(
                f,
                "Search would visit more combinations than fit in memory (limit {})",
                limit
            ),
            CoverError::Verification(violation) => {
                write!(f, "Cover verification failed: {}", violation)
            }
        }
    }
}

impl std::error::Error for CoverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoverError::Verification(violation) => Some(violation),
            _ => None,
        }
    }
}

impl From<CoverViolation> for CoverError {
    fn from(violation: CoverViolation) -> Self {
        CoverError::Verification(violation)
    }
}

impl From<CoverError> for io::Error {
    fn from(err: CoverError) -> Self {
        let kind = match err {
            CoverError::Verification(_) => io::ErrorKind::Other,
            _ => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}
