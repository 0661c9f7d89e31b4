//! Identity and profile types.
//!
//! A `Profile` couples a namespaced `PersonId` with one genotype per locus.
//! Parent-child links are carried as explicit `Relationship` records rather
//! than positional correspondence between lists, so they survive shuffling.

mod person;
mod profile;
mod relationship;

pub use person::PersonId;
pub use profile::Profile;
pub use relationship::{GroundTruthEntry, Relationship};
