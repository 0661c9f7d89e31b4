//! Dataset generation engine.
//!
//! This module provides the generator that assembles founders, children,
//! and filler profiles into a database plus a query set with ground truth.

pub mod builder;
pub mod dataset;
pub mod engine;
pub mod parameters;

pub use builder::{BuilderError, GeneratorBuilder};
pub use dataset::Dataset;
pub use engine::{Generator, GeneratorError};
pub use parameters::{
    ArtifactConfig, DatasetConfig, MutationConfig, DEFAULT_DATABASE_SIZE, DEFAULT_DROPOUT_RATE,
    DEFAULT_MUTATION_RATE, DEFAULT_QUERY_COUNT, DEFAULT_SINGLE_ALLELE_RATE, DEFAULT_TRUE_PAIRS,
};
