//! The fixed pool of creator ids handed out by `GET /creator-ids`.

use std::collections::HashSet;
use std::path::Path;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

use crate::schema::CreatorId;
use crate::ConfigError;

pub const DEFAULT_SAMPLE_SIZE: usize = 50;
pub const MIN_SAMPLE_SIZE: usize = 1;
pub const MAX_SAMPLE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error(
        "sample size {requested} outside {min}..={max}",
        min = MIN_SAMPLE_SIZE,
        max = MAX_SAMPLE_SIZE
    )]
    OutOfRange { requested: i64 },

    #[error("sample size {requested} exceeds pool of {available} creator ids")]
    PoolTooSmall { requested: usize, available: usize },
}

#[derive(Debug, Deserialize)]
pub struct CreatorIdsFile {
    pub creator_ids: Vec<String>,
}

/// Immutable set of candidate creator ids, in file order.
#[derive(Debug, Clone)]
pub struct CreatorPool {
    ids: Vec<String>,
}

impl CreatorPool {
    /// Build a pool from an id list.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for an empty pool, a blank id or a
    /// duplicate id.
    pub fn new(ids: Vec<String>) -> Result<Self, ConfigError> {
        validate_ids(&ids)?;
        Ok(Self { ids })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|candidate| candidate == id)
    }

    /// Draw `requested` distinct ids without replacement.
    ///
    /// Bounds are checked before the pool is touched.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::OutOfRange`] when `requested` is outside
    /// `MIN_SAMPLE_SIZE..=MAX_SAMPLE_SIZE`, and [`SampleError::PoolTooSmall`]
    /// when the pool holds fewer ids than requested.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        requested: i64,
        rng: &mut R,
    ) -> Result<Vec<CreatorId>, SampleError> {
        let count = usize::try_from(requested)
            .ok()
            .filter(|n| (MIN_SAMPLE_SIZE..=MAX_SAMPLE_SIZE).contains(n))
            .ok_or(SampleError::OutOfRange { requested })?;

        if count > self.ids.len() {
            return Err(SampleError::PoolTooSmall {
                requested: count,
                available: self.ids.len(),
            });
        }

        Ok(self
            .ids
            .choose_multiple(rng, count)
            .map(|id| CreatorId::new(id.clone()))
            .collect())
    }
}

/// Load and validate the creator id pool from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_creator_pool(path: &Path) -> Result<CreatorPool, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CreatorIdsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CreatorIdsFile = serde_yaml::from_str(&content)?;
    CreatorPool::new(file.creator_ids)
}

fn validate_ids(ids: &[String]) -> Result<(), ConfigError> {
    if ids.is_empty() {
        return Err(ConfigError::Validation(
            "creator_ids must contain at least one id".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "creator id must be non-empty".to_string(),
            ));
        }
        if !seen.insert(id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate creator id: '{id}'"
            )));
        }
    }

    Ok(())
}
