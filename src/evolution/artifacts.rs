//! Genotyping artifacts: locus dropout and single-allele observation.

use crate::base::{Allele, Genotype};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error;
use std::fmt;

/// Observation model applied to every true two-allele genotype.
///
/// Checks run in a fixed priority order per (profile, locus) cell: the
/// dropout roll first, then the single-allele roll, else both alleles are
/// observed. Rates are locus-independent and every cell rolls
/// independently, so artifact states are uncorrelated across loci within
/// one profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactModel {
    /// Probability that the whole locus is missing
    dropout_rate: f64,
    /// Probability that only one of the two alleles is observed
    single_allele_rate: f64,
}

impl ArtifactModel {
    /// Create a new artifact model.
    ///
    /// # Errors
    /// Returns an error if either rate is not in the valid range [0.0, 1.0].
    pub fn new(dropout_rate: f64, single_allele_rate: f64) -> Result<Self, ArtifactError> {
        if !(0.0..=1.0).contains(&dropout_rate) {
            return Err(ArtifactError::InvalidRate {
                name: "dropout_rate",
                value: dropout_rate,
            });
        }
        if !(0.0..=1.0).contains(&single_allele_rate) {
            return Err(ArtifactError::InvalidRate {
                name: "single_allele_rate",
                value: single_allele_rate,
            });
        }
        Ok(Self {
            dropout_rate,
            single_allele_rate,
        })
    }

    /// An artifact-free model (every cell observes both alleles).
    pub fn none() -> Self {
        Self {
            dropout_rate: 0.0,
            single_allele_rate: 0.0,
        }
    }

    /// Get the dropout rate.
    #[inline]
    pub fn dropout_rate(&self) -> f64 {
        self.dropout_rate
    }

    /// Get the single-allele observation rate.
    #[inline]
    pub fn single_allele_rate(&self) -> f64 {
        self.single_allele_rate
    }

    /// Turn a true allele pair into the observed genotype for one cell.
    ///
    /// Dropout short-circuits before the single-allele roll; the
    /// single-allele case picks one of the two alleles uniformly.
    pub fn observe<R: Rng + ?Sized>(&self, a1: Allele, a2: Allele, rng: &mut R) -> Genotype {
        if rng.random::<f64>() < self.dropout_rate {
            return Genotype::Dropout;
        }
        if rng.random::<f64>() < self.single_allele_rate {
            let observed = if rng.random::<f64>() < 0.5 { a1 } else { a2 };
            return Genotype::Single(observed);
        }
        Genotype::pair(a1, a2)
    }
}

/// Errors that can occur when building an artifact model.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactError {
    /// A rate was outside [0.0, 1.0].
    InvalidRate { name: &'static str, value: f64 },
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactError::InvalidRate { name, value } => {
                write!(f, "Invalid {name}: {value} (must be between 0.0 and 1.0)")
            }
        }
    }
}

impl error::Error for ArtifactError {}
