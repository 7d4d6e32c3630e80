//! Combination enumeration for the all-covers search
//!
//! Once every dependency has its list of admissible replacements, each way of
//! picking one alternative per position is a candidate set that goes through the
//! exhaustive redundancy search. The number of combinations is the product of
//! the list lengths, which is exponential in the number of reducible
//! dependencies; callers that need bounded latency should check
//! [`combination_count`] first.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use crate::closure::ClosureCache;
use crate::dependency::{DependencySet, FunctionalDependency};

use super::reduce::ReplacementCache;

/// Expand every dependency into all the singleton dependencies its left-hand side reaches
///
/// `L -> R` becomes `L -> a` for every `a` in the closure of `L` (taken from
/// `cache`) that is not already in `L`. Vacuous inputs are skipped and exact
/// duplicates keep their first occurrence.
pub fn reachable_dependencies(
    dependencies: &[FunctionalDependency],
    cache: &mut ClosureCache,
) -> DependencySet {
    let mut seen = HashSet::new();
    let mut reachable = DependencySet::new();
    for fd in dependencies.iter().filter(|fd| !fd.is_vacuous()) {
        let closure = cache.closure(fd.lhs());
        for attribute in closure.difference(fd.lhs()) {
            let derived =
                FunctionalDependency::singleton(fd.lhs().clone(), Arc::clone(attribute));
            if seen.insert(derived.clone()) {
                reachable.push(derived);
            }
        }
    }
    reachable
}

/// Number of combinations [`for_each_combination`] would visit
///
/// Returns `None` if the count overflows `usize`.
pub fn combination_count(
    dependencies: &[FunctionalDependency],
    replacements: &ReplacementCache,
) -> Option<usize> {
    dependencies.iter().try_fold(1usize, |count, fd| {
        count.checked_mul(replacements.alternatives(fd).len())
    })
}

/// Visit every choice of one alternative per position, depth first
///
/// Positions are filled left to right and alternatives are tried in the order
/// the [`ReplacementCache`] recorded them.
pub fn for_each_combination<F>(
    dependencies: &[FunctionalDependency],
    replacements: &ReplacementCache,
    mut visit: F,
) where
    F: FnMut(&[FunctionalDependency]),
{
    let mut current = Vec::with_capacity(dependencies.len());
    extend(dependencies, replacements, &mut current, &mut visit);
}

fn extend<F>(
    dependencies: &[FunctionalDependency],
    replacements: &ReplacementCache,
    current: &mut Vec<FunctionalDependency>,
    visit: &mut F,
) where
    F: FnMut(&[FunctionalDependency]),
{
    let Some(fd) = dependencies.get(current.len()) else {
        visit(current);
        return;
    };
    for alternative in replacements.alternatives(fd) {
        current.push(alternative.clone());
        extend(dependencies, replacements, current, visit);
        current.pop();
    }
}

/// Canonicalize covers and drop duplicates, returning them in sorted order
pub fn deduplicate_covers<I>(covers: I) -> Vec<DependencySet>
where
    I: IntoIterator<Item = DependencySet>,
{
    let unique: BTreeSet<DependencySet> = covers.into_iter().map(|c| c.canonical()).collect();
    unique.into_iter().collect()
}
