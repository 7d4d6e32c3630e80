//! Minimal cover verification
//!
//! [`check_minimal_cover`] confirms that a dependency set is a minimal cover of
//! another one: singleton right-hand sides, irreducible left-hand sides, no
//! redundant dependency, and the same closures as the original.

use std::fmt;

use crate::closure::ClosureCache;
use crate::dependency::{normalize, AttributeSet, DependencySet, FunctionalDependency};

use super::redundancy::is_entailed_by_rest;

/// The first minimal-cover property a candidate cover fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverViolation {
    /// A dependency has zero or several right-hand side attributes
    NonSingletonRhs {
        /// The offending dependency
        dependency: FunctionalDependency,
    },
    /// A proper subset of a left-hand side already determines the right-hand side
    ReducibleLhs {
        /// The offending dependency
        dependency: FunctionalDependency,
        /// A smaller left-hand side that would do
        reduced: AttributeSet,
    },
    /// A dependency follows from the rest of the cover
    Redundant {
        /// The offending dependency
        dependency: FunctionalDependency,
    },
    /// A dependency of the original set does not follow from the cover
    NotPreserved {
        /// The original dependency that was lost
        dependency: FunctionalDependency,
    },
    /// A dependency of the cover does not follow from the original set
    NotImplied {
        /// The cover dependency that was introduced
        dependency: FunctionalDependency,
    },
}

impl fmt::Display for CoverViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverViolation::NonSingletonRhs { dependency } => {
                write!(f, "{} does not have a single right-hand side attribute", dependency)
            }
            CoverViolation::ReducibleLhs {
                dependency,
                reduced,
            } => write!(
                f,
                "{} has a reducible left-hand side ({} suffices)",
                dependency, reduced
            ),
            CoverViolation::Redundant { dependency } => {
                write!(f, "{} follows from the rest of the cover", dependency)
            }
            CoverViolation::NotPreserved { dependency } => {
                write!(f, "{} is not implied by the cover", dependency)
            }
            CoverViolation::NotImplied { dependency } => {
                write!(f, "{} is not implied by the original dependencies", dependency)
            }
        }
    }
}

impl std::error::Error for CoverViolation {}

/// Check that `cover` is a minimal cover of `original`
///
/// Properties are checked in order (singleton right-hand sides, irreducible
/// left-hand sides, non-redundancy, equivalence) and the first violation found
/// is returned. Vacuous dependencies of `original` are ignored.
///
/// # Examples
///
/// ```
/// use fd_cover::{check_minimal_cover, CoverViolation, DependencySet};
///
/// let original = DependencySet::parse("A->B,C; B->C").unwrap();
/// let cover = DependencySet::parse("A->B; B->C").unwrap();
/// assert!(check_minimal_cover(original.as_slice(), cover.as_slice()).is_ok());
///
/// let redundant = DependencySet::parse("A->B; B->C; A->C").unwrap();
/// assert!(matches!(
///     check_minimal_cover(original.as_slice(), redundant.as_slice()),
///     Err(CoverViolation::Redundant { .. })
/// ));
/// ```
pub fn check_minimal_cover(
    original: &[FunctionalDependency],
    cover: &[FunctionalDependency],
) -> Result<(), CoverViolation> {
    if let Some(fd) = cover.iter().find(|fd| !fd.is_singleton()) {
        return Err(CoverViolation::NonSingletonRhs {
            dependency: fd.clone(),
        });
    }

    let mut cache = ClosureCache::new(cover.iter().cloned());
    for fd in cover {
        for subset in fd.lhs().proper_subsets() {
            if fd.rhs().is_subset(cache.closure(&subset)) {
                return Err(CoverViolation::ReducibleLhs {
                    dependency: fd.clone(),
                    reduced: subset,
                });
            }
        }
    }

    let kept = vec![true; cover.len()];
    if let Some(index) = (0..cover.len()).find(|&i| is_entailed_by_rest(cover, &kept, i)) {
        return Err(CoverViolation::Redundant {
            dependency: cover[index].clone(),
        });
    }

    let original = normalize(original);
    let cover = DependencySet::from(cover.to_vec());
    if let Some(fd) = original.iter().find(|fd| !cover.implies(fd)) {
        return Err(CoverViolation::NotPreserved {
            dependency: fd.clone(),
        });
    }
    if let Some(fd) = cover.iter().find(|fd| !original.implies(fd)) {
        return Err(CoverViolation::NotImplied {
            dependency: fd.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> DependencySet {
        DependencySet::parse(input).unwrap()
    }

    fn check(original: &str, cover: &str) -> Result<(), CoverViolation> {
        check_minimal_cover(parse(original).as_slice(), parse(cover).as_slice())
    }

    #[test]
    fn test_valid_cover() {
        assert_eq!(check("A->B,C; A,B->C", "A->B; A->C"), Ok(()));
    }

    #[test]
    fn test_non_singleton() {
        assert!(matches!(
            check("A->B,C", "A->B,C"),
            Err(CoverViolation::NonSingletonRhs { .. })
        ));
    }

    #[test]
    fn test_reducible_lhs() {
        let err = check("A->B; A,C->B", "A->B; A,C->B").unwrap_err();
        match err {
            CoverViolation::ReducibleLhs {
                dependency,
                reduced,
            } => {
                assert_eq!(dependency.to_string(), "A,C->B");
                assert_eq!(reduced.to_string(), "A");
            }
            other => panic!("unexpected violation: {}", other),
        }
    }

    #[test]
    fn test_redundant() {
        assert_eq!(
            check("A->B; B->C", "A->B; B->C; A->C"),
            Err(CoverViolation::Redundant {
                dependency: FunctionalDependency::new(["A"], ["C"]),
            })
        );
    }

    #[test]
    fn test_not_preserved() {
        assert_eq!(
            check("A->B; B->C", "A->B"),
            Err(CoverViolation::NotPreserved {
                dependency: FunctionalDependency::new(["B"], ["C"]),
            })
        );
    }

    #[test]
    fn test_not_implied() {
        assert_eq!(
            check("A->B", "A->B; B->C"),
            Err(CoverViolation::NotImplied {
                dependency: FunctionalDependency::new(["B"], ["C"]),
            })
        );
    }

    #[test]
    fn test_empty_cover_of_trivial_set() {
        assert_eq!(check("A,B->A; ->C", ""), Ok(()));
    }

    #[test]
    fn test_violation_display() {
        let violation = CoverViolation::Redundant {
            dependency: FunctionalDependency::new(["A"], ["C"]),
        };
        assert!(violation.to_string().contains("A->C"));
    }
}
