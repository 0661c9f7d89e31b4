//! Strsynth: a generator of synthetic STR forensic genotype databases with
//! embedded kinship ground truth.
//!
//! This library simulates populations of short-tandem-repeat (STR) profiles
//! over the 21 common forensic loci, plants true parent-child pairs inside an
//! otherwise unrelated database, and emits a query set together with the
//! ground-truth mapping that downstream matching algorithms are scored
//! against.

pub mod base;
pub mod evolution;
pub mod profile;
pub mod simulation;
pub mod storage;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use when generating datasets: `strsynth::Allele`,
// `strsynth::Generator`, etc.
pub use base::{Allele, Genotype, Locus};
pub use profile::{PersonId, Profile};
pub use simulation::{Dataset, Generator, GeneratorBuilder};
