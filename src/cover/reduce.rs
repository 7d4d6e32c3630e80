//! Left-hand side reduction
//!
//! A dependency `L -> r` can have its left-hand side replaced by a proper subset
//! `S ⊂ L` whenever `r` is in the closure of `S`. Such an `S` is a *candidate*.
//! A candidate is only accepted when it is itself irreducible, i.e. none of its
//! own proper subsets is a candidate.
//!
//! All closures come from a [`ClosureCache`] over a fixed reference set, so the
//! same subsets reused across dependencies are only closed once.

use std::collections::HashMap;
use std::sync::Arc;

use log::trace;

use crate::closure::ClosureCache;
use crate::dependency::{AttributeSet, FunctionalDependency};

/// Check that no proper subset of the candidate `subset` still entails `attribute`
fn is_irreducible(cache: &mut ClosureCache, subset: &AttributeSet, attribute: &str) -> bool {
    subset.len() == 1
        || subset
            .proper_subsets()
            .all(|inner| !cache.entails(&inner, attribute))
}

/// Valid left-hand side replacements for `fd`, smallest first
///
/// Returns every irreducible candidate subset in [`proper_subsets`] order, or
/// only the first one when `first_only` is set. Dependencies without a singleton
/// right-hand side have no replacements.
///
/// [`proper_subsets`]: crate::closure::proper_subsets
fn valid_reductions(
    fd: &FunctionalDependency,
    cache: &mut ClosureCache,
    first_only: bool,
) -> Vec<FunctionalDependency> {
    let Some(attribute) = fd.rhs_attribute() else {
        return Vec::new();
    };

    let mut reductions = Vec::new();
    for subset in fd.lhs().proper_subsets() {
        if !cache.entails(&subset, attribute) {
            continue;
        }
        if !is_irreducible(cache, &subset, attribute) {
            trace!("{}: candidate {{{}}} is not minimal", fd, subset);
            continue;
        }
        reductions.push(FunctionalDependency::singleton(subset, Arc::clone(attribute)));
        if first_only {
            break;
        }
    }
    reductions
}

/// Reduce the left-hand side of `fd` to the first valid candidate
///
/// If no proper subset qualifies the left-hand side is already irreducible and
/// `fd` is returned unchanged.
pub fn reduce_lhs(fd: &FunctionalDependency, cache: &mut ClosureCache) -> FunctionalDependency {
    match valid_reductions(fd, cache, true).pop() {
        Some(reduced) => {
            trace!("reduced {} to {}", fd, reduced);
            reduced
        }
        None => fd.clone(),
    }
}

/// Every valid left-hand side replacement for `fd`
///
/// An empty result means the left-hand side cannot be reduced.
pub fn lhs_reductions(
    fd: &FunctionalDependency,
    cache: &mut ClosureCache,
) -> Vec<FunctionalDependency> {
    valid_reductions(fd, cache, false)
}

/// Admissible replacements per dependency, for all-covers enumeration
///
/// Dependencies without a recorded entry stand for themselves.
#[derive(Debug, Clone, Default)]
pub struct ReplacementCache {
    replacements: HashMap<FunctionalDependency, Vec<FunctionalDependency>>,
}

impl ReplacementCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute and record the replacements of `fd`, if it has not been seen yet
    pub fn record(&mut self, fd: &FunctionalDependency, cache: &mut ClosureCache) {
        if self.replacements.contains_key(fd) {
            return;
        }
        let reductions = lhs_reductions(fd, cache);
        if !reductions.is_empty() {
            trace!("{} has {} replacement(s)", fd, reductions.len());
            self.replacements.insert(fd.clone(), reductions);
        }
    }

    /// The forms `fd` may take in a cover: its replacements, or `fd` itself
    pub fn alternatives<'a>(
        &'a self,
        fd: &'a FunctionalDependency,
    ) -> &'a [FunctionalDependency] {
        self.replacements
            .get(fd)
            .map_or(std::slice::from_ref(fd), Vec::as_slice)
    }

    /// Number of dependencies with at least one replacement
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// Check if no dependency is reducible
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}
