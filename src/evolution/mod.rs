//! Stochastic genetic processes.
//!
//! This module implements the three sources of randomness in profile
//! generation:
//! - **Frequencies**: allele sampling weighted by population frequency
//! - **Mutation**: ±1 repeat-step mutation during parent-to-child transmission
//! - **Artifacts**: locus dropout and single-allele observation effects

pub mod artifacts;
pub mod frequencies;
pub mod mutation;

pub use artifacts::{ArtifactError, ArtifactModel};
pub use frequencies::{FrequencyError, FrequencyTable};
pub use mutation::{MutationError, StepMutation};
