//! Minimal cover computation
//!
//! A minimal cover of a dependency set `F` is an equivalent set in which every
//! dependency has a single right-hand side attribute, an irreducible left-hand
//! side, and which contains no redundant dependency. Two entry points are
//! provided:
//!
//! - [`find_one_minimal_cover`]: normalize, reduce every left-hand side to its
//!   first valid candidate, then drop redundant dependencies in one pass. Input
//!   order breaks ties.
//! - [`find_all_minimal_covers`]: expand the input into every dependency its
//!   left-hand sides reach, enumerate every combination of left-hand side
//!   reductions and run an exhaustive redundancy search on each. Exponential;
//!   see [`CoverConfig`](crate::CoverConfig) for limits.
//!
//! The [`Minimizable`] trait exposes both through `DependencySet`, with optional
//! limits and verification of the result by [`check_minimal_cover`].

// Module declarations
mod combinations;
mod error;
mod minimizable;
mod minimize;
mod reduce;
mod redundancy;
mod verify;

// Public re-exports
pub use combinations::{
    combination_count, deduplicate_covers, for_each_combination, reachable_dependencies,
};
pub use error::CoverError;
pub use minimizable::Minimizable;
pub use reduce::{lhs_reductions, reduce_lhs, ReplacementCache};
pub use redundancy::{all_minimal_subsets, is_non_redundant, remove_redundant};
pub use verify::{check_minimal_cover, CoverViolation};

use crate::dependency::{DependencySet, FunctionalDependency};
use minimize::{one_minimal_cover, AllCoversSearch};

/// Compute one minimal cover of `dependencies`
///
/// Vacuous dependencies (empty left- or right-hand side) are ignored. The result
/// is deterministic for a given input order.
///
/// # Examples
///
/// ```
/// use fd_cover::{find_one_minimal_cover, DependencySet};
///
/// let deps = DependencySet::parse("A,B,C->B,D,E,A,C,G,H; B->D,E,B; G->B,D,E").unwrap();
/// let cover = find_one_minimal_cover(deps.as_slice());
/// assert_eq!(cover.to_string(), "A,B,C->G; A,B,C->H; B->D; B->E; G->B");
/// ```
pub fn find_one_minimal_cover(dependencies: &[FunctionalDependency]) -> DependencySet {
    one_minimal_cover(dependencies)
}

/// Compute every distinct minimal cover found by the exhaustive search
///
/// Covers are returned in canonical form (sorted, duplicate-free) and in sorted
/// order. The running time is exponential in the number of reducible
/// dependencies and in the number of redundant ones.
///
/// # Examples
///
/// ```
/// use fd_cover::{find_all_minimal_covers, DependencySet};
///
/// let deps = DependencySet::parse("A->B; B->A; A->C; B->C").unwrap();
/// let covers = find_all_minimal_covers(deps.as_slice());
/// assert_eq!(covers.len(), 2);
/// assert!(covers.contains(&DependencySet::parse("A->B; A->C; B->A").unwrap()));
/// assert!(covers.contains(&DependencySet::parse("A->B; B->A; B->C").unwrap()));
/// ```
pub fn find_all_minimal_covers(dependencies: &[FunctionalDependency]) -> Vec<DependencySet> {
    AllCoversSearch::new(dependencies).run()
}
