//! Attribute closure engine
//!
//! The closure of an attribute set `S` under a dependency set `D` is the smallest
//! superset of `S` that contains the right-hand side of every dependency whose
//! left-hand side it contains. [`closure`] computes it by fixed-point iteration;
//! [`ClosureCache`] memoizes closures against one fixed reference set, which is
//! what keeps left-hand side reduction tractable.

mod subsets;

pub use subsets::{proper_subsets, ProperSubsets};

use std::collections::HashMap;
use std::sync::Arc;

use crate::dependency::{Attribute, AttributeSet, FunctionalDependency};

/// Compute the closure of `attributes` under `dependencies`
///
/// Every dependency is exploded into `(lhs, attribute)` pairs. Each pass over
/// the pending pairs fires those whose left-hand side is already contained in
/// the result, adds their attribute and retires them, so a pair fires at most
/// once. Iteration stops when a pass makes no progress or nothing is pending.
///
/// Empty `attributes` or empty `dependencies` yield `attributes` unchanged
/// (modulo dependencies with an empty left-hand side, which always fire).
///
/// # Examples
///
/// ```
/// use fd_cover::{closure, AttributeSet, FunctionalDependency};
///
/// let deps = vec![
///     FunctionalDependency::new(["A"], ["B"]),
///     FunctionalDependency::new(["B", "C"], ["D"]),
/// ];
/// let result = closure(&AttributeSet::from_iter(["A", "C"]), &deps);
/// assert_eq!(result.to_string(), "A,B,C,D");
/// ```
pub fn closure<'a, I>(attributes: &AttributeSet, dependencies: I) -> AttributeSet
where
    I: IntoIterator<Item = &'a FunctionalDependency>,
{
    let mut result = attributes.clone();
    let mut pending: Vec<(&AttributeSet, &Attribute)> = dependencies
        .into_iter()
        .flat_map(|fd| fd.rhs().iter().map(move |attribute| (fd.lhs(), attribute)))
        .collect();

    while !pending.is_empty() {
        let mut progress = false;
        pending.retain(|&(lhs, attribute)| {
            if lhs.is_subset(&result) {
                result.insert(Arc::clone(attribute));
                progress = true;
                false
            } else {
                true
            }
        });
        if !progress {
            break;
        }
    }

    result
}

/// Memoized closures against a fixed reference dependency set
///
/// A cache belongs to one minimization run. Its keys are canonical attribute
/// sets, and every entry is only meaningful for the reference set the cache was
/// built with.
#[derive(Debug, Clone)]
pub struct ClosureCache {
    reference: Vec<FunctionalDependency>,
    memo: HashMap<AttributeSet, AttributeSet>,
    hits: usize,
    misses: usize,
}

impl ClosureCache {
    /// Create an empty cache over `reference`
    pub fn new<I>(reference: I) -> Self
    where
        I: IntoIterator<Item = FunctionalDependency>,
    {
        ClosureCache {
            reference: reference.into_iter().collect(),
            memo: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// The dependency set closures are computed against
    pub fn reference(&self) -> &[FunctionalDependency] {
        &self.reference
    }

    /// Closure of `attributes` under the reference set, computed at most once
    pub fn closure(&mut self, attributes: &AttributeSet) -> &AttributeSet {
        let Self {
            reference,
            memo,
            hits,
            misses,
        } = self;
        if memo.contains_key(attributes) {
            *hits += 1;
        } else {
            *misses += 1;
            memo.insert(attributes.clone(), closure(attributes, reference.iter()));
        }
        &memo[attributes]
    }

    /// Check whether `attribute` is in the closure of `attributes`
    pub fn entails(&mut self, attributes: &AttributeSet, attribute: &str) -> bool {
        self.closure(attributes).contains(attribute)
    }

    /// Number of distinct attribute sets cached so far
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    /// Check if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    /// Lookups answered from the cache
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that had to compute a closure
    pub fn misses(&self) -> usize {
        self.misses
    }
}
