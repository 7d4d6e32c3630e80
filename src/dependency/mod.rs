//! Functional dependency data model
//!
//! This module provides the value types every other part of the crate works with:
//!
//! - [`Attribute`]: an attribute label (`Arc<str>`, cheap to clone)
//! - [`AttributeSet`]: a canonical, sorted set of attributes
//! - [`FunctionalDependency`]: a pair `LHS -> RHS` of attribute sets
//! - [`DependencySet`]: an ordered sequence of dependencies
//!
//! All of them are ordered and hashable, so they double as structural cache keys
//! and as the canonical representation used when de-duplicating covers.
//!
//! # Examples
//!
//! ```
//! use fd_cover::{AttributeSet, DependencySet};
//!
//! let deps = DependencySet::parse("A->B; B->C").unwrap();
//! let closure = deps.closure(&AttributeSet::from_iter(["A"]));
//! assert_eq!(closure.to_string(), "A,B,C");
//! ```

mod display;
mod error;
mod normalize;
mod parser;

#[cfg(test)]
mod tests;

pub use error::ParseDependencyError;
pub use normalize::normalize;

use std::collections::btree_set;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use crate::closure::{self, ProperSubsets};

/// An attribute label
///
/// Attributes are compared and ordered as strings; that order is the canonical
/// order used by [`AttributeSet`].
pub type Attribute = Arc<str>;

/// A finite set of attributes in canonical (sorted) order
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeSet {
    attributes: BTreeSet<Attribute>,
}

impl AttributeSet {
    /// Create an empty attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding exactly one attribute
    pub fn singleton(attribute: Attribute) -> Self {
        let mut set = Self::new();
        set.insert(attribute);
        set
    }

    /// Number of attributes in the set
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Check whether `attribute` is a member
    pub fn contains(&self, attribute: &str) -> bool {
        self.attributes.contains(attribute)
    }

    /// Add an attribute, returning `true` if it was not already present
    pub fn insert(&mut self, attribute: Attribute) -> bool {
        self.attributes.insert(attribute)
    }

    /// Check whether every attribute of `self` is also in `other`
    pub fn is_subset(&self, other: &AttributeSet) -> bool {
        self.attributes.is_subset(&other.attributes)
    }

    /// Iterate in canonical order
    pub fn iter(&self) -> btree_set::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    /// Attributes of `self` that are not in `other`, in canonical order
    pub fn difference<'a>(
        &'a self,
        other: &'a AttributeSet,
    ) -> impl Iterator<Item = &'a Attribute> + 'a {
        self.attributes.difference(&other.attributes)
    }

    /// Union of two sets
    pub fn union(&self, other: &AttributeSet) -> AttributeSet {
        self.attributes.union(&other.attributes).cloned().collect()
    }

    /// All non-empty proper subsets, smallest first
    ///
    /// See [`closure::proper_subsets`] for the exact ordering.
    pub fn proper_subsets(&self) -> ProperSubsets<'_> {
        closure::proper_subsets(self)
    }
}

impl<S: AsRef<str>> FromIterator<S> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        AttributeSet {
            attributes: iter.into_iter().map(|s| Arc::from(s.as_ref())).collect(),
        }
    }
}

impl Extend<Attribute> for AttributeSet {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        self.attributes.extend(iter);
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = btree_set::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl IntoIterator for AttributeSet {
    type Item = Attribute;
    type IntoIter = btree_set::IntoIter<Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

/// A functional dependency `lhs -> rhs`
///
/// Dependencies order first by left-hand side, then by right-hand side, which is
/// the order used for canonical dependency sets.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionalDependency {
    lhs: AttributeSet,
    rhs: AttributeSet,
}

impl FunctionalDependency {
    /// Create a dependency from two attribute collections
    ///
    /// # Examples
    ///
    /// ```
    /// use fd_cover::FunctionalDependency;
    ///
    /// let fd = FunctionalDependency::new(["B", "A"], ["C"]);
    /// assert_eq!(fd.to_string(), "A,B->C");
    /// ```
    pub fn new<L, R, A, B>(lhs: L, rhs: R) -> Self
    where
        L: IntoIterator<Item = A>,
        R: IntoIterator<Item = B>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        FunctionalDependency {
            lhs: lhs.into_iter().collect(),
            rhs: rhs.into_iter().collect(),
        }
    }

    /// Create a dependency from prepared attribute sets
    pub fn from_sets(lhs: AttributeSet, rhs: AttributeSet) -> Self {
        FunctionalDependency { lhs, rhs }
    }

    /// Create a dependency with a single right-hand side attribute
    pub fn singleton(lhs: AttributeSet, rhs: Attribute) -> Self {
        FunctionalDependency {
            lhs,
            rhs: AttributeSet::singleton(rhs),
        }
    }

    /// Get the left-hand side
    pub fn lhs(&self) -> &AttributeSet {
        &self.lhs
    }

    /// Get the right-hand side
    pub fn rhs(&self) -> &AttributeSet {
        &self.rhs
    }

    /// The right-hand side attribute, if the right-hand side is a singleton
    pub fn rhs_attribute(&self) -> Option<&Attribute> {
        if self.rhs.len() == 1 {
            self.rhs.iter().next()
        } else {
            None
        }
    }

    /// Check if the right-hand side holds exactly one attribute
    pub fn is_singleton(&self) -> bool {
        self.rhs.len() == 1
    }

    /// Check if the dependency holds in every relation (`rhs ⊆ lhs`)
    pub fn is_trivial(&self) -> bool {
        self.rhs.is_subset(&self.lhs)
    }

    /// Check if either side is empty
    pub fn is_vacuous(&self) -> bool {
        self.lhs.is_empty() || self.rhs.is_empty()
    }

    /// Split into one singleton dependency per right-hand side attribute
    pub fn split(&self) -> impl Iterator<Item = FunctionalDependency> + '_ {
        self.rhs.iter().map(move |attribute| {
            FunctionalDependency::singleton(self.lhs.clone(), Arc::clone(attribute))
        })
    }

    /// Parse a single dependency such as `A,B->C`
    pub fn parse(input: &str) -> Result<Self, ParseDependencyError> {
        parser::parse_dependency(input)
    }
}

/// Summary counts for a dependency set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DependencyStats {
    /// Number of dependencies
    pub dependencies: usize,
    /// Number of distinct attributes mentioned on either side
    pub attributes: usize,
    /// Dependencies with a single right-hand side attribute
    pub singleton: usize,
    /// Dependencies whose right-hand side is contained in the left-hand side
    pub trivial: usize,
    /// Dependencies with an empty side
    pub vacuous: usize,
}

/// An ordered sequence of functional dependencies
///
/// Order is preserved; it decides tie-breaking in single-cover minimization.
/// Use [`DependencySet::canonical`] to compare sets regardless of order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencySet {
    dependencies: Vec<FunctionalDependency>,
}

impl DependencySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing list of dependencies
    pub fn from_dependencies(dependencies: Vec<FunctionalDependency>) -> Self {
        DependencySet { dependencies }
    }

    /// Parse one or more `;`-separated dependencies, e.g. `A,B->C; C->D`
    pub fn parse(input: &str) -> Result<Self, ParseDependencyError> {
        parser::parse_dependencies(input).map(DependencySet::from_dependencies)
    }

    /// Append a dependency
    pub fn push(&mut self, dependency: FunctionalDependency) {
        self.dependencies.push(dependency);
    }

    /// Number of dependencies
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Iterate over the dependencies in order
    pub fn iter(&self) -> std::slice::Iter<'_, FunctionalDependency> {
        self.dependencies.iter()
    }

    /// Borrow the dependencies as a slice
    pub fn as_slice(&self) -> &[FunctionalDependency] {
        &self.dependencies
    }

    /// Consume the set, returning the underlying list
    pub fn into_vec(self) -> Vec<FunctionalDependency> {
        self.dependencies
    }

    /// All attributes mentioned on either side of any dependency
    pub fn attributes(&self) -> AttributeSet {
        let mut universe = AttributeSet::new();
        for fd in &self.dependencies {
            universe.extend(fd.lhs().iter().cloned());
            universe.extend(fd.rhs().iter().cloned());
        }
        universe
    }

    /// Drop vacuous dependencies and split right-hand sides into singletons
    pub fn normalize(&self) -> DependencySet {
        normalize(&self.dependencies)
    }

    /// Sorted, duplicate-free copy of this set
    pub fn canonical(&self) -> DependencySet {
        let sorted: BTreeSet<&FunctionalDependency> = self.dependencies.iter().collect();
        sorted.into_iter().cloned().collect()
    }

    /// Copy with exact duplicates removed, keeping the first occurrence
    pub fn deduplicated(&self) -> DependencySet {
        let mut seen = HashSet::new();
        self.dependencies
            .iter()
            .filter(|fd| seen.insert(*fd))
            .cloned()
            .collect()
    }

    /// Closure of `attributes` under this set
    pub fn closure(&self, attributes: &AttributeSet) -> AttributeSet {
        closure::closure(attributes, &self.dependencies)
    }

    /// Check whether `dependency` follows from this set
    pub fn implies(&self, dependency: &FunctionalDependency) -> bool {
        dependency.rhs().is_subset(&self.closure(dependency.lhs()))
    }

    /// Check whether both sets imply each other
    ///
    /// Two sets are equivalent exactly when every attribute set has the same
    /// closure under both.
    pub fn is_equivalent(&self, other: &DependencySet) -> bool {
        other.iter().all(|fd| self.implies(fd)) && self.iter().all(|fd| other.implies(fd))
    }

    /// Summary statistics
    pub fn stats(&self) -> DependencyStats {
        DependencyStats {
            dependencies: self.dependencies.len(),
            attributes: self.attributes().len(),
            singleton: self.dependencies.iter().filter(|fd| fd.is_singleton()).count(),
            trivial: self
                .dependencies
                .iter()
                .filter(|fd| !fd.is_vacuous() && fd.is_trivial())
                .count(),
            vacuous: self.dependencies.iter().filter(|fd| fd.is_vacuous()).count(),
        }
    }
}

impl FromIterator<FunctionalDependency> for DependencySet {
    fn from_iter<I: IntoIterator<Item = FunctionalDependency>>(iter: I) -> Self {
        DependencySet {
            dependencies: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<FunctionalDependency>> for DependencySet {
    fn from(dependencies: Vec<FunctionalDependency>) -> Self {
        DependencySet { dependencies }
    }
}

impl<'a> IntoIterator for &'a DependencySet {
    type Item = &'a FunctionalDependency;
    type IntoIter = std::slice::Iter<'a, FunctionalDependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.dependencies.iter()
    }
}

impl IntoIterator for DependencySet {
    type Item = FunctionalDependency;
    type IntoIter = std::vec::IntoIter<FunctionalDependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.dependencies.into_iter()
    }
}
