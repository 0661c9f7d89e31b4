//! Mutation of transmitted alleles.
//!
//! STR germline mutations are modeled as single repeat-unit slippage: the
//! integer repeat count moves one step up or down while any microvariant
//! suffix is preserved (a mutated 9.3 becomes 8.3 or 10.3, never 9.2).

use crate::base::Allele;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error;
use std::fmt;

/// Single-step repeat mutation model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepMutation {
    /// Mutation probability per transmitted allele per generation
    rate: f64,
}

impl StepMutation {
    /// Create a new mutation model.
    ///
    /// # Errors
    /// Returns an error if `rate` is not in the valid range [0.0, 1.0].
    pub fn new(rate: f64) -> Result<Self, MutationError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(MutationError::InvalidRate(rate));
        }
        Ok(Self { rate })
    }

    /// Get the mutation rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Possibly mutate a transmitted allele.
    ///
    /// With probability `rate`, the repeat count shifts by ±1 (uniform
    /// direction); otherwise the allele passes through unchanged.
    #[inline]
    pub fn mutate<R: Rng + ?Sized>(&self, allele: Allele, rng: &mut R) -> Allele {
        if rng.random::<f64>() >= self.rate {
            return allele;
        }
        allele.step(rng.random::<bool>())
    }
}

/// Errors that can occur when building a mutation model.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationError {
    /// Invalid mutation rate (must be between 0.0 and 1.0)
    InvalidRate(f64),
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationError::InvalidRate(rate) => {
                write!(
                    f,
                    "Invalid mutation rate: {rate} (must be between 0.0 and 1.0)"
                )
            }
        }
    }
}

impl error::Error for MutationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_new_validates_rate() {
        assert!(StepMutation::new(0.002).is_ok());
        assert!(StepMutation::new(0.0).is_ok());
        assert!(StepMutation::new(1.0).is_ok());
        assert!(StepMutation::new(-0.1).is_err());
        assert!(StepMutation::new(1.5).is_err());
    }

    #[test]
    fn test_zero_rate_never_mutates() {
        let model = StepMutation::new(0.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let allele = Allele::new(14, 0);

        for _ in 0..1000 {
            assert_eq!(model.mutate(allele, &mut rng), allele);
        }
    }

    #[test]
    fn test_forced_mutation_steps_integer_allele() {
        let model = StepMutation::new(1.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let parent = Allele::new(14, 0);

        let mut seen_down = false;
        let mut seen_up = false;
        for _ in 0..200 {
            let child = model.mutate(parent, &mut rng);
            match child {
                a if a == Allele::new(13, 0) => seen_down = true,
                a if a == Allele::new(15, 0) => seen_up = true,
                other => panic!("unexpected mutated allele {other}"),
            }
        }
        assert!(seen_down && seen_up);
    }

    #[test]
    fn test_forced_mutation_preserves_microvariant() {
        let model = StepMutation::new(1.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let parent = Allele::new(9, 3);

        for _ in 0..200 {
            let child = model.mutate(parent, &mut rng);
            assert!(
                child == Allele::new(8, 3) || child == Allele::new(10, 3),
                "unexpected mutated allele {child}"
            );
        }
    }

    #[test]
    fn test_low_rate_mutation_frequency() {
        let model = StepMutation::new(0.05).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(123);
        let parent = Allele::new(20, 0);

        let trials = 20_000;
        let mutated = (0..trials)
            .filter(|_| model.mutate(parent, &mut rng) != parent)
            .count();
        let observed = mutated as f64 / trials as f64;
        assert!(
            (observed - 0.05).abs() < 0.01,
            "observed mutation fraction {observed}"
        );
    }

    #[test]
    fn test_mutation_error_display() {
        let msg = MutationError::InvalidRate(1.5).to_string();
        assert!(msg.contains("Invalid mutation rate"));
        assert!(msg.contains("1.5"));
    }
}
