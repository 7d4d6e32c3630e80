//! Dependency normalization
//!
//! Every minimization pipeline starts here: dependencies with an empty side say
//! nothing and are dropped, and the rest are split so that each right-hand side
//! is a single attribute.

use super::{DependencySet, FunctionalDependency};
use log::trace;

/// Drop vacuous dependencies and split right-hand sides into singletons
///
/// Split dependencies are emitted in canonical right-hand side order and share
/// the original left-hand side. The relative order of input dependencies is
/// preserved.
///
/// # Examples
///
/// ```
/// use fd_cover::{normalize, FunctionalDependency};
///
/// let deps = vec![
///     FunctionalDependency::new(["A"], ["C", "B"]),
///     FunctionalDependency::new(Vec::<&str>::new(), ["D"]),
/// ];
/// let normalized = normalize(&deps);
/// assert_eq!(normalized.to_string(), "A->B; A->C");
/// ```
pub fn normalize<'a, I>(dependencies: I) -> DependencySet
where
    I: IntoIterator<Item = &'a FunctionalDependency>,
{
    let mut normalized = DependencySet::new();
    for fd in dependencies {
        if fd.is_vacuous() {
            trace!("dropping vacuous dependency {}", fd);
            continue;
        }
        for split in fd.split() {
            normalized.push(split);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_splits_rhs() {
        let deps = vec![FunctionalDependency::new(["B"], ["D", "E", "B"])];
        let normalized = normalize(&deps);
        assert_eq!(normalized.len(), 3);
        assert!(normalized.iter().all(|fd| fd.is_singleton()));
        assert_eq!(normalized.to_string(), "B->B; B->D; B->E");
    }

    #[test]
    fn test_normalize_drops_vacuous() {
        let deps = vec![
            FunctionalDependency::new(Vec::<&str>::new(), ["A"]),
            FunctionalDependency::new(["A"], Vec::<&str>::new()),
            FunctionalDependency::new(["A"], ["B"]),
        ];
        let normalized = normalize(&deps);
        assert_eq!(normalized.to_string(), "A->B");
    }

    #[test]
    fn test_normalize_keeps_input_order() {
        let deps = vec![
            FunctionalDependency::new(["C"], ["A"]),
            FunctionalDependency::new(["A"], ["B"]),
        ];
        assert_eq!(normalize(&deps).to_string(), "C->A; A->B");
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize(&Vec::<FunctionalDependency>::new()).is_empty());
    }
}
