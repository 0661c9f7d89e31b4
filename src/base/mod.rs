//! Base types for STR genotype representation.
//!
//! This module provides the foundational value types of the library:
//! alleles, per-locus genotypes, and the fixed set of forensic loci.

mod allele;
mod errors;
mod genotype;
mod locus;

pub use allele::Allele;
pub use errors::{InvalidAllele, InvalidGenotype, UnknownLocus};
pub use genotype::Genotype;
pub use locus::Locus;
