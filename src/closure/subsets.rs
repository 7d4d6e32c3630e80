//! Proper subset enumeration

use crate::dependency::{Attribute, AttributeSet};
use std::sync::Arc;

/// Enumerate the non-empty proper subsets of `set`
///
/// Subsets come out by increasing size, and within one size in lexicographic
/// order of their canonical element positions, so `{A,B,C}` yields
/// `A, B, C, AB, AC, BC`. Sets with fewer than two attributes have no non-empty
/// proper subsets.
///
/// The iterator is lazy: first-match searches stop without enumerating the rest.
pub fn proper_subsets(set: &AttributeSet) -> ProperSubsets<'_> {
    let elements: Vec<&Attribute> = set.iter().collect();
    let done = elements.len() < 2;
    ProperSubsets {
        elements,
        indices: vec![0],
        done,
    }
}

/// Iterator returned by [`proper_subsets`]
#[derive(Debug, Clone)]
pub struct ProperSubsets<'a> {
    elements: Vec<&'a Attribute>,
    // Positions of the current combination, strictly increasing
    indices: Vec<usize>,
    done: bool,
}

impl ProperSubsets<'_> {
    /// Step to the next combination of the same size, or the first one of the next size
    fn advance(&mut self) {
        let n = self.elements.len();
        let k = self.indices.len();

        for i in (0..k).rev() {
            if self.indices[i] < n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return;
            }
        }

        if k + 1 >= n {
            self.done = true;
        } else {
            self.indices = (0..=k).collect();
        }
    }
}

impl Iterator for ProperSubsets<'_> {
    type Item = AttributeSet;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut subset = AttributeSet::new();
        subset.extend(self.indices.iter().map(|&i| Arc::clone(self.elements[i])));
        self.advance();
        Some(subset)
    }
}
