//! # fd-cover
//!
//! Minimal covers of sets of functional dependencies.
//!
//! ## Overview
//!
//! A functional dependency `X -> Y` over a relation schema states that any two
//! tuples agreeing on the attributes `X` also agree on `Y`. A *minimal cover* of
//! a dependency set `F` is an equivalent set in which:
//!
//! - every right-hand side is a single attribute
//! - no left-hand side attribute can be dropped
//! - no dependency follows from the others
//!
//! Minimal covers are the input to 3NF synthesis and a compact way to compare
//! or store constraint sets.
//!
//! ## Quick Start
//!
//! ```
//! use fd_cover::{find_one_minimal_cover, DependencySet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let deps = DependencySet::parse("A->B,C; B->C; A,B->C")?;
//! let cover = find_one_minimal_cover(deps.as_slice());
//! assert_eq!(cover.to_string(), "A->B; B->C");
//! # Ok(())
//! # }
//! ```
//!
//! Dependencies can also be written with the [`fd!`] and [`fds!`] macros:
//!
//! ```
//! use fd_cover::{fd, fds, find_all_minimal_covers};
//!
//! let single = fd!(emp -> dept);
//! assert_eq!(single.to_string(), "emp->dept");
//!
//! let deps = fds![A -> B; B -> A; A -> C; B -> C];
//! let covers = find_all_minimal_covers(deps.as_slice());
//! assert_eq!(covers.len(), 2);
//! ```
//!
//! ## One Cover or All of Them
//!
//! [`find_one_minimal_cover`] is deterministic and driven by input order: each
//! left-hand side is reduced to its first valid candidate and redundant
//! dependencies are dropped in a single pass. [`find_all_minimal_covers`]
//! explores every combination of left-hand side reductions and every removal
//! order, which is exponential. Use [`Minimizable`] with a [`CoverConfig`] to
//! bound the search:
//!
//! ```
//! use fd_cover::{CoverConfig, DependencySet, Minimizable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let deps = DependencySet::parse("A,B->C; A->B; B->A")?;
//! let config = CoverConfig {
//!     max_combinations: Some(1_000),
//!     verify: true,
//!     ..CoverConfig::default()
//! };
//! let covers = deps.all_minimal_covers_with_config(&config)?;
//! assert_eq!(covers.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Files
//!
//! `.fd` files hold one or more dependencies per line:
//!
//! ```
//! use fd_cover::{DependencySet, FdReader, FdWriter, Minimizable};
//! # use std::io::Write;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let mut temp = tempfile::NamedTempFile::new()?;
//! # temp.write_all(b"# schema\nA->B,C\nB->C\n.e\n")?;
//! # temp.flush()?;
//! # let input_path = temp.path();
//! let deps = DependencySet::from_fd_file(input_path)?;
//! let cover = deps.minimal_cover()?;
//!
//! # let output_file = tempfile::NamedTempFile::new()?;
//! # let output_path = output_file.path();
//! cover.to_fd_file(output_path)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Pipeline stages log through the [`log`] facade (`debug` for stage summaries,
//! `trace` for individual reduction decisions). The library never installs a
//! logger; the `fdcover` binary uses `env_logger` and honours `RUST_LOG`.

// Lets the proc macros refer to `::fd_cover` from inside this crate
extern crate self as fd_cover;

// Public modules
pub mod closure;
pub mod cover;
pub mod dependency;
pub mod error;
pub mod fdfile;

// Re-export high-level public API
pub use closure::{closure, proper_subsets, ClosureCache, ProperSubsets};
pub use cover::{
    check_minimal_cover, find_all_minimal_covers, find_one_minimal_cover, remove_redundant,
    CoverError, CoverViolation, Minimizable,
};
pub use dependency::{
    normalize, Attribute, AttributeSet, DependencySet, DependencyStats, FunctionalDependency,
    ParseDependencyError,
};
pub use fdfile::{write_covers, FdReader, FdWriter};

/// Procedural macros for writing dependencies in Rust source
pub use fd_cover_macros::{fd, fds};

/// Configuration for minimal cover computation
///
/// The default imposes no limits and skips verification, which makes the
/// [`Minimizable`] methods behave exactly like [`find_one_minimal_cover`] and
/// [`find_all_minimal_covers`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoverConfig {
    /// Reject inputs that mention more distinct attributes
    pub max_attributes: Option<usize>,
    /// Reject searches that start from more dependencies
    ///
    /// Counts normalized dependencies for a single cover and reachable
    /// dependencies for the all-covers search.
    pub max_dependencies: Option<usize>,
    /// Reject all-covers searches with more left-hand side combinations
    pub max_combinations: Option<usize>,
    /// Check every result with [`check_minimal_cover`]
    pub verify: bool,
}

impl CoverConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}
