//! Generation parameters and configuration.
//!
//! This module provides parameter structures for configuring a generation
//! run: mutation and artifact models plus the dataset size targets.

use crate::evolution::{ArtifactError, ArtifactModel, MutationError, StepMutation};
use serde::{Deserialize, Serialize};

/// Default database size (founders + children + filler).
pub const DEFAULT_DATABASE_SIZE: usize = 5000;
/// Default total number of query profiles.
pub const DEFAULT_QUERY_COUNT: usize = 40;
/// Default number of queries with a true match in the database.
pub const DEFAULT_TRUE_PAIRS: usize = 35;
/// Default probability of a complete locus dropout.
pub const DEFAULT_DROPOUT_RATE: f64 = 0.05;
/// Default probability that only one allele is observed.
pub const DEFAULT_SINGLE_ALLELE_RATE: f64 = 0.08;
/// Default per-locus per-generation mutation rate.
pub const DEFAULT_MUTATION_RATE: f64 = 0.002;

/// Parameters for transmission mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationConfig {
    /// Step-mutation model applied to transmitted alleles
    pub model: StepMutation,
}

impl MutationConfig {
    /// Create new mutation configuration.
    pub fn new(model: StepMutation) -> Self {
        Self { model }
    }

    /// Create with a given per-locus mutation rate.
    pub fn with_rate(rate: f64) -> Result<Self, MutationError> {
        Ok(Self {
            model: StepMutation::new(rate)?,
        })
    }
}

/// Parameters for genotyping artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Dropout / single-allele observation model
    pub model: ArtifactModel,
}

impl ArtifactConfig {
    /// Create new artifact configuration.
    pub fn new(model: ArtifactModel) -> Self {
        Self { model }
    }

    /// Create with the given dropout and single-allele rates.
    pub fn standard(dropout_rate: f64, single_allele_rate: f64) -> Result<Self, ArtifactError> {
        Ok(Self {
            model: ArtifactModel::new(dropout_rate, single_allele_rate)?,
        })
    }

    /// Artifact-free configuration (used by lineage tests).
    pub fn none() -> Self {
        Self {
            model: ArtifactModel::none(),
        }
    }
}

/// High-level dataset size targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Total profiles in the database (founders + children + filler)
    pub database_size: usize,
    /// Total profiles in the query set
    pub query_count: usize,
    /// Number of queries with a true parent in the database
    pub true_pairs: usize,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

impl DatasetConfig {
    /// Create new dataset configuration.
    pub fn new(
        database_size: usize,
        query_count: usize,
        true_pairs: usize,
        seed: Option<u64>,
    ) -> Self {
        Self {
            database_size,
            query_count,
            true_pairs,
            seed,
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            database_size: DEFAULT_DATABASE_SIZE,
            query_count: DEFAULT_QUERY_COUNT,
            true_pairs: DEFAULT_TRUE_PAIRS,
            seed: None,
        }
    }
}
