//! Minimizable trait for dependency sets
//!
//! This module provides the public [`Minimizable`] trait, a uniform interface for
//! computing minimal covers with or without a [`CoverConfig`].

use super::error::CoverError;
use crate::dependency::DependencySet;
use crate::CoverConfig;

/// Public trait for types that can be reduced to minimal covers
///
/// All methods take `&self` and return new values; the input is never modified.
///
/// ```
/// use fd_cover::{DependencySet, Minimizable};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let deps = DependencySet::parse("A->B,C; B->C; A,B->C")?;
///
/// let cover = deps.minimal_cover()?;
/// assert_eq!(cover.to_string(), "A->B; B->C");
///
/// let covers = deps.all_minimal_covers()?;
/// assert_eq!(covers, vec![cover]);
/// # Ok(())
/// # }
/// ```
///
/// # Configuration
///
/// The default configuration imposes no limits, so the plain methods never fail.
/// Limits turn an unexpectedly expensive search into an early error:
///
/// ```
/// use fd_cover::{CoverConfig, CoverError, DependencySet, Minimizable};
///
/// let deps = DependencySet::parse("A->B; B->C; C->D").unwrap();
/// let config = CoverConfig {
///     max_attributes: Some(3),
///     ..CoverConfig::default()
/// };
/// assert!(matches!(
///     deps.minimal_cover_with_config(&config),
///     Err(CoverError::AttributeLimitExceeded { count: 4, limit: 3 })
/// ));
/// ```
pub trait Minimizable {
    /// Compute one minimal cover
    ///
    /// Default implementation calls `minimal_cover_with_config` with default config.
    fn minimal_cover(&self) -> Result<DependencySet, CoverError> {
        let config = CoverConfig::default();
        self.minimal_cover_with_config(&config)
    }

    /// Compute one minimal cover under `config`
    fn minimal_cover_with_config(&self, config: &CoverConfig)
        -> Result<DependencySet, CoverError>;

    /// Compute every distinct minimal cover reachable by the exhaustive search
    ///
    /// Default implementation calls `all_minimal_covers_with_config` with default config.
    fn all_minimal_covers(&self) -> Result<Vec<DependencySet>, CoverError> {
        let config = CoverConfig::default();
        self.all_minimal_covers_with_config(&config)
    }

    /// Compute every distinct minimal cover under `config`
    fn all_minimal_covers_with_config(
        &self,
        config: &CoverConfig,
    ) -> Result<Vec<DependencySet>, CoverError>;
}
