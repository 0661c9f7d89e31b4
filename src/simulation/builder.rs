//! Builder pattern for creating generators.
//!
//! Provides a fluent API for configuring a generation run with the
//! challenge defaults and build-time validation.

use crate::evolution::FrequencyTable;
use crate::simulation::{
    ArtifactConfig, DatasetConfig, Generator, MutationConfig, DEFAULT_DATABASE_SIZE,
    DEFAULT_DROPOUT_RATE, DEFAULT_MUTATION_RATE, DEFAULT_QUERY_COUNT, DEFAULT_SINGLE_ALLELE_RATE,
    DEFAULT_TRUE_PAIRS,
};
use std::error;
use std::fmt;

/// Builder for constructing `Generator` instances with a fluent API.
///
/// # Examples
///
/// ```
/// use strsynth::simulation::GeneratorBuilder;
///
/// // Challenge defaults with a fixed seed
/// let generator = GeneratorBuilder::new().seed(42).build().unwrap();
///
/// // A small run with custom rates
/// let generator = GeneratorBuilder::new()
///     .database_size(100)
///     .query_count(10)
///     .true_pairs(5)
///     .dropout_rate(0.02)
///     .mutation_rate(0.01)
///     .seed(42)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct GeneratorBuilder {
    database_size: usize,
    query_count: usize,
    true_pairs: usize,
    dropout_rate: f64,
    single_allele_rate: f64,
    mutation_rate: f64,
    seed: Option<u64>,
    table: Option<FrequencyTable>,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorBuilder {
    /// Create a new builder with the challenge defaults.
    pub fn new() -> Self {
        Self {
            database_size: DEFAULT_DATABASE_SIZE,
            query_count: DEFAULT_QUERY_COUNT,
            true_pairs: DEFAULT_TRUE_PAIRS,
            dropout_rate: DEFAULT_DROPOUT_RATE,
            single_allele_rate: DEFAULT_SINGLE_ALLELE_RATE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            seed: None,
            table: None,
        }
    }

    /// Set the total database size (default: 5000).
    pub fn database_size(mut self, size: usize) -> Self {
        self.database_size = size;
        self
    }

    /// Set the total query count (default: 40).
    pub fn query_count(mut self, count: usize) -> Self {
        self.query_count = count;
        self
    }

    /// Set the number of true relative pairs (default: 35).
    pub fn true_pairs(mut self, count: usize) -> Self {
        self.true_pairs = count;
        self
    }

    /// Set the locus dropout rate (default: 0.05).
    pub fn dropout_rate(mut self, rate: f64) -> Self {
        self.dropout_rate = rate;
        self
    }

    /// Set the single-allele observation rate (default: 0.08).
    pub fn single_allele_rate(mut self, rate: f64) -> Self {
        self.single_allele_rate = rate;
        self
    }

    /// Set the transmission mutation rate (default: 0.002).
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Set the random seed for reproducibility (default: None = random).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom frequency table (default: the built-in forensic table).
    pub fn frequency_table(mut self, table: FrequencyTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Build and validate the generator.
    pub fn build(self) -> Result<Generator, BuilderError> {
        let table = self.table.unwrap_or_else(FrequencyTable::forensic);

        let mutation = MutationConfig::with_rate(self.mutation_rate)
            .map_err(|e| BuilderError::InvalidParameter(format!("mutation_rate: {e}")))?;
        let artifacts = ArtifactConfig::standard(self.dropout_rate, self.single_allele_rate)
            .map_err(|e| BuilderError::InvalidParameter(e.to_string()))?;
        let config = DatasetConfig::new(
            self.database_size,
            self.query_count,
            self.true_pairs,
            self.seed,
        );

        Generator::new(table, mutation, artifacts, config)
            .map_err(|e| BuilderError::InvalidParameter(e.to_string()))
    }
}

/// Errors that can occur during generator building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// An invalid parameter value was provided
    InvalidParameter(String),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
        }
    }
}

impl error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let generator = GeneratorBuilder::new().seed(42).build().unwrap();
        let config = generator.config();
        assert_eq!(config.database_size, 5000);
        assert_eq!(config.query_count, 40);
        assert_eq!(config.true_pairs, 35);
    }

    #[test]
    fn test_builder_custom_sizes() {
        let generator = GeneratorBuilder::new()
            .database_size(100)
            .query_count(10)
            .true_pairs(5)
            .seed(42)
            .build()
            .unwrap();
        assert_eq!(generator.config().database_size, 100);
        assert_eq!(generator.config().true_pairs, 5);
    }

    #[test]
    fn test_builder_invalid_mutation_rate() {
        let result = GeneratorBuilder::new().mutation_rate(-0.1).build();
        match result {
            Err(BuilderError::InvalidParameter(msg)) => {
                assert!(msg.contains("mutation_rate"));
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_invalid_artifact_rate() {
        assert!(GeneratorBuilder::new().dropout_rate(1.5).build().is_err());
        assert!(GeneratorBuilder::new()
            .single_allele_rate(-0.2)
            .build()
            .is_err());
    }

    #[test]
    fn test_builder_inconsistent_sizes() {
        let result = GeneratorBuilder::new()
            .query_count(5)
            .true_pairs(10)
            .build();
        assert!(result.is_err());
    }
}
