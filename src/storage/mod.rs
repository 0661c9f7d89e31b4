//! Storage module for persisting generated datasets.
//!
//! This module provides the CSV boundary: the typed profiles of a
//! `Dataset` serialize into the challenge's three artifacts, and profile
//! CSVs can be read back into typed form.

mod reader;
mod writer;

pub use reader::{read_ground_truth, read_profiles};
pub use writer::write_dataset;

use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// File name of the database artifact.
pub const DATABASE_FILE: &str = "str_database.csv";
/// File name of the query artifact.
pub const QUERIES_FILE: &str = "str_queries.csv";
/// File name of the ground-truth artifact.
pub const GROUND_TRUTH_FILE: &str = "ground_truth.csv";

/// Errors that can occur at the CSV boundary.
#[derive(Debug)]
pub enum StorageError {
    /// Filesystem failure (directory creation, file access).
    Io(io::Error),
    /// CSV-level read/write failure.
    Csv(csv::Error),
    /// A profile CSV header did not match `PersonID` + the 21 locus names.
    Header { path: PathBuf, message: String },
    /// A cell could not be parsed into the genotype grammar.
    Parse { path: PathBuf, message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Csv(err) => write!(f, "CSV error: {err}"),
            Self::Header { path, message } => {
                write!(f, "Bad header in {}: {message}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "Bad record in {}: {message}", path.display())
            }
        }
    }
}

impl error::Error for StorageError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for StorageError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}
