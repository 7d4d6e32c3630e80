//! Minimal cover pipelines and the [`Minimizable`] implementation for [`DependencySet`]

use std::collections::BTreeSet;

use log::debug;

use super::combinations::{
    combination_count, deduplicate_covers, for_each_combination, reachable_dependencies,
};
use super::error::CoverError;
use super::minimizable::Minimizable;
use super::reduce::{reduce_lhs, ReplacementCache};
use super::redundancy::{all_minimal_subsets, remove_redundant};
use super::verify::check_minimal_cover;
use crate::closure::ClosureCache;
use crate::dependency::{normalize, DependencySet, FunctionalDependency};
use crate::CoverConfig;

/// Normalize, reduce every left-hand side, then drop redundant dependencies
pub(crate) fn one_minimal_cover(dependencies: &[FunctionalDependency]) -> DependencySet {
    let normalized = normalize(dependencies);
    debug!(
        "normalized {} dependencies into {}",
        dependencies.len(),
        normalized.len()
    );

    let mut cache = ClosureCache::new(normalized.iter().cloned());
    let reduced: DependencySet = normalized
        .iter()
        .map(|fd| reduce_lhs(fd, &mut cache))
        .collect();
    debug!(
        "closure cache: {} entries, {} hits, {} misses",
        cache.len(),
        cache.hits(),
        cache.misses()
    );

    let cover = remove_redundant(&reduced);
    debug!("minimal cover has {} dependencies", cover.len());
    cover
}

/// State of one all-covers search
///
/// Building the search expands the input into every singleton dependency its
/// left-hand sides reach and records the admissible replacements of each one.
/// [`AllCoversSearch::combination_count`] is available before [`AllCoversSearch::run`]
/// so callers can refuse an oversized search.
pub(crate) struct AllCoversSearch {
    expanded: DependencySet,
    replacements: ReplacementCache,
}

impl AllCoversSearch {
    pub(crate) fn new(dependencies: &[FunctionalDependency]) -> Self {
        let mut cache = ClosureCache::new(
            dependencies
                .iter()
                .filter(|fd| !fd.is_vacuous())
                .cloned(),
        );
        let expanded = reachable_dependencies(dependencies, &mut cache).normalize();
        debug!(
            "expanded {} dependencies into {} reachable ones",
            dependencies.len(),
            expanded.len()
        );

        let mut replacements = ReplacementCache::new();
        for fd in &expanded {
            replacements.record(fd, &mut cache);
        }
        debug!(
            "{} reducible dependencies, closure cache: {} entries, {} hits, {} misses",
            replacements.len(),
            cache.len(),
            cache.hits(),
            cache.misses()
        );

        AllCoversSearch {
            expanded,
            replacements,
        }
    }

    /// Number of dependencies entering the search
    pub(crate) fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Number of combinations the search visits, `None` on overflow
    pub(crate) fn combination_count(&self) -> Option<usize> {
        combination_count(self.expanded.as_slice(), &self.replacements)
    }

    /// Run the exhaustive search, returning canonical covers in sorted order
    pub(crate) fn run(&self) -> Vec<DependencySet> {
        let mut found = BTreeSet::new();
        let mut visited = 0usize;
        for_each_combination(self.expanded.as_slice(), &self.replacements, |combination| {
            visited += 1;
            let candidate = DependencySet::from(combination.to_vec()).deduplicated();
            found.extend(all_minimal_subsets(&candidate));
        });
        let covers = deduplicate_covers(found);
        debug!(
            "visited {} combinations, found {} distinct covers",
            visited,
            covers.len()
        );
        covers
    }
}

fn check_attribute_limit(
    dependencies: &DependencySet,
    config: &CoverConfig,
) -> Result<(), CoverError> {
    if let Some(limit) = config.max_attributes {
        let count = dependencies.attributes().len();
        if count > limit {
            return Err(CoverError::AttributeLimitExceeded { count, limit });
        }
    }
    Ok(())
}

fn check_dependency_limit(count: usize, config: &CoverConfig) -> Result<(), CoverError> {
    match config.max_dependencies {
        Some(limit) if count > limit => Err(CoverError::DependencyLimitExceeded { count, limit }),
        _ => Ok(()),
    }
}

impl Minimizable for DependencySet {
    fn minimal_cover_with_config(
        &self,
        config: &CoverConfig,
    ) -> Result<DependencySet, CoverError> {
        check_attribute_limit(self, config)?;
        if config.max_dependencies.is_some() {
            check_dependency_limit(self.normalize().len(), config)?;
        }

        let cover = one_minimal_cover(self.as_slice());
        if config.verify {
            check_minimal_cover(self.as_slice(), cover.as_slice())?;
        }
        Ok(cover)
    }

    fn all_minimal_covers_with_config(
        &self,
        config: &CoverConfig,
    ) -> Result<Vec<DependencySet>, CoverError> {
        check_attribute_limit(self, config)?;

        let search = AllCoversSearch::new(self.as_slice());
        check_dependency_limit(search.len(), config)?;
        if let Some(limit) = config.max_combinations {
            let count = search.combination_count();
            if count.map_or(true, |count| count > limit) {
                return Err(CoverError::CombinationLimitExceeded { count, limit });
            }
        }

        let covers = search.run();
        if config.verify {
            for cover in &covers {
                check_minimal_cover(self.as_slice(), cover.as_slice())?;
            }
        }
        Ok(covers)
    }
}
