//! Whole-set redundancy elimination
//!
//! A dependency is redundant in a set when its right-hand side already follows
//! from its left-hand side under the *other* dependencies of the set. Both
//! variants below track membership with a mask over the input positions instead
//! of removing elements from the list being scanned.

use log::trace;

use crate::closure::closure;
use crate::dependency::{DependencySet, FunctionalDependency};

/// Check whether `dependencies[index]` follows from the other kept dependencies
pub(crate) fn is_entailed_by_rest(
    dependencies: &[FunctionalDependency],
    kept: &[bool],
    index: usize,
) -> bool {
    let fd = &dependencies[index];
    if fd.is_trivial() {
        return true;
    }
    let rest = dependencies
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index && kept[i])
        .map(|(_, other)| other);
    fd.rhs().is_subset(&closure(fd.lhs(), rest))
}

fn collect_kept(dependencies: &[FunctionalDependency], kept: &[bool]) -> DependencySet {
    dependencies
        .iter()
        .zip(kept)
        .filter(|&(_, &keep)| keep)
        .map(|(fd, _)| fd.clone())
        .collect()
}

/// Drop redundant dependencies in a single in-order pass
///
/// Each dependency is tested once, in input order, against the dependencies
/// that are still kept at that point; trivial dependencies are always dropped.
/// Earlier decisions are not revisited.
///
/// # Examples
///
/// ```
/// use fd_cover::{remove_redundant, DependencySet};
///
/// let deps = DependencySet::parse("A->B; B->C; A->C").unwrap();
/// assert_eq!(remove_redundant(&deps).to_string(), "A->B; B->C");
/// ```
pub fn remove_redundant(dependencies: &DependencySet) -> DependencySet {
    let dependencies = dependencies.as_slice();
    let mut kept = vec![true; dependencies.len()];
    for index in 0..dependencies.len() {
        if is_entailed_by_rest(dependencies, &kept, index) {
            trace!("dropping redundant dependency {}", dependencies[index]);
            kept[index] = false;
        }
    }
    collect_kept(dependencies, &kept)
}

/// Check that no dependency in the set follows from the others
pub fn is_non_redundant(dependencies: &DependencySet) -> bool {
    let dependencies = dependencies.as_slice();
    let kept = vec![true; dependencies.len()];
    (0..dependencies.len()).all(|index| !is_entailed_by_rest(dependencies, &kept, index))
}

/// Every non-redundant subset reachable by remove/keep branching
///
/// Walking the dependencies in order, each one that follows from the rest of the
/// current set is both removed (explored first) and kept; the others are kept.
/// A finished branch is accepted only if the dependencies it kept are internally
/// non-redundant. Every removal preserves equivalence, so every accepted subset
/// is equivalent to the input.
///
/// The search is exponential in the number of removable dependencies.
pub fn all_minimal_subsets(dependencies: &DependencySet) -> Vec<DependencySet> {
    let dependencies = dependencies.as_slice();
    let mut kept = vec![true; dependencies.len()];
    let mut results = Vec::new();
    search(dependencies, &mut kept, 0, &mut results);
    results
}

fn search(
    dependencies: &[FunctionalDependency],
    kept: &mut [bool],
    index: usize,
    results: &mut Vec<DependencySet>,
) {
    if index == dependencies.len() {
        let snapshot: &[bool] = kept;
        let accepted = (0..dependencies.len())
            .all(|i| !snapshot[i] || !is_entailed_by_rest(dependencies, snapshot, i));
        if accepted {
            results.push(collect_kept(dependencies, kept));
        }
        return;
    }

    if is_entailed_by_rest(dependencies, kept, index) {
        kept[index] = false;
        search(dependencies, kept, index + 1, results);
        kept[index] = true;
    }
    search(dependencies, kept, index + 1, results);
}
