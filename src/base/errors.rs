use std::error;
use std::fmt;

/// Error returned when a string cannot be parsed into an `Allele`.
///
/// The inner `String` is the original text that failed to parse. This type
/// implements `error::Error` and `Display` to provide helpful messages
/// when surfaced to callers or upstream libraries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAllele(pub String);

impl fmt::Display for InvalidAllele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid allele value: '{}'", self.0)
    }
}

impl error::Error for InvalidAllele {}

/// Error type for failures when parsing a genotype cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGenotype {
    /// One of the allele fields could not be parsed.
    Allele(InvalidAllele),

    /// The cell had more than two comma-separated fields.
    TooManyAlleles(String),

    /// The cell was empty.
    EmptyCell,
}

impl fmt::Display for InvalidGenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allele(err) => write!(f, "Invalid genotype cell: {err}"),
            Self::TooManyAlleles(cell) => {
                write!(f, "Genotype cell has more than two alleles: '{cell}'")
            }
            Self::EmptyCell => write!(f, "Empty genotype cell"),
        }
    }
}

impl error::Error for InvalidGenotype {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Allele(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidAllele> for InvalidGenotype {
    fn from(err: InvalidAllele) -> Self {
        Self::Allele(err)
    }
}

/// Error returned when a locus name does not match any of the 21 markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocus(pub String);

impl fmt::Display for UnknownLocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown locus name: '{}'", self.0)
    }
}

impl error::Error for UnknownLocus {}
