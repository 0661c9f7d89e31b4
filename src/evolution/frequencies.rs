//! Per-locus allele frequency distributions and weighted sampling.
//!
//! The table normalizes raw frequencies so each locus's distribution sums
//! to 1, and exposes i.i.d. weighted allele draws. The built-in forensic
//! table carries allele frequencies derived from real population data,
//! including microvariants such as 9.3 and 30.2.

use crate::base::{Allele, Locus};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;
use std::error;
use std::fmt;

/// Normalized allele distribution for a single locus, with a prebuilt
/// weighted sampler.
#[derive(Debug, Clone)]
struct LocusDistribution {
    /// Alleles with normalized frequencies, in table order
    entries: Vec<(Allele, f64)>,
    /// Sampler over the same indices as `entries`
    sampler: WeightedIndex<f64>,
}

/// Allele frequency table covering all 21 loci.
///
/// Sampling routes every genotype draw in the library through this table;
/// each call consumes RNG state from the explicitly passed generator.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    /// One distribution per locus, indexed by `Locus::index()`
    loci: Vec<LocusDistribution>,
}

impl FrequencyTable {
    /// Build a table from raw per-locus weights.
    ///
    /// Weights do not need to sum to 1; they are normalized per locus.
    /// Every locus must appear exactly once with at least one
    /// positive-weight allele, otherwise construction fails — a zero-weight
    /// locus is a configuration error, never a runtime sampling panic.
    pub fn from_raw(raw: &[(Locus, &[(Allele, f64)])]) -> Result<Self, FrequencyError> {
        let mut slots: Vec<Option<LocusDistribution>> = vec![None; Locus::COUNT];

        for &(locus, weights) in raw {
            if slots[locus.index()].is_some() {
                return Err(FrequencyError::DuplicateLocus(locus));
            }

            let mut total = 0.0;
            for &(allele, weight) in weights {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(FrequencyError::InvalidWeight {
                        locus,
                        allele,
                        weight,
                    });
                }
                total += weight;
            }
            if weights.is_empty() || total <= 0.0 {
                return Err(FrequencyError::EmptyDistribution(locus));
            }

            let entries: Vec<(Allele, f64)> = weights
                .iter()
                .map(|&(allele, weight)| (allele, weight / total))
                .collect();
            let sampler = WeightedIndex::new(entries.iter().map(|&(_, f)| f))
                .map_err(|_| FrequencyError::EmptyDistribution(locus))?;

            slots[locus.index()] = Some(LocusDistribution { entries, sampler });
        }

        let mut loci = Vec::with_capacity(Locus::COUNT);
        for (slot, locus) in slots.into_iter().zip(Locus::ALL) {
            loci.push(slot.ok_or(FrequencyError::MissingLocus(locus))?);
        }

        Ok(Self { loci })
    }

    /// The built-in 21-locus forensic frequency table.
    pub fn forensic() -> Self {
        Self::from_raw(&FORENSIC_FREQS).expect("built-in forensic frequency table is valid")
    }

    /// Draw one allele for `locus` according to its frequency distribution.
    ///
    /// Calls are independent and identically distributed; no state is
    /// carried between draws other than the RNG cursor.
    pub fn sample<R: Rng + ?Sized>(&self, locus: Locus, rng: &mut R) -> Allele {
        let dist = &self.loci[locus.index()];
        dist.entries[dist.sampler.sample(rng)].0
    }

    /// Normalized (allele, frequency) pairs for `locus`, in table order.
    pub fn frequencies(&self, locus: Locus) -> &[(Allele, f64)] {
        &self.loci[locus.index()].entries
    }

    /// Number of distinct alleles known for `locus`.
    pub fn allele_count(&self, locus: Locus) -> usize {
        self.loci[locus.index()].entries.len()
    }
}

/// Errors that can occur when constructing a frequency table.
#[derive(Debug, Clone, PartialEq)]
pub enum FrequencyError {
    /// A locus was listed more than once.
    DuplicateLocus(Locus),
    /// A locus was missing from the raw table.
    MissingLocus(Locus),
    /// A locus had no alleles or a zero total weight.
    EmptyDistribution(Locus),
    /// A weight was negative or not finite.
    InvalidWeight {
        locus: Locus,
        allele: Allele,
        weight: f64,
    },
}

impl fmt::Display for FrequencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLocus(locus) => write!(f, "Locus {locus} listed more than once"),
            Self::MissingLocus(locus) => write!(f, "No frequencies given for locus {locus}"),
            Self::EmptyDistribution(locus) => {
                write!(f, "Locus {locus} has no positive-weight alleles")
            }
            Self::InvalidWeight {
                locus,
                allele,
                weight,
            } => write!(
                f,
                "Invalid weight {weight} for allele {allele} at locus {locus}"
            ),
        }
    }
}

impl error::Error for FrequencyError {}

// Raw allele frequencies based on real population data. Values are
// normalized at construction, so per-locus sums may be slightly off 1.
const fn a(repeats: u8, micro: u8) -> Allele {
    Allele::new(repeats, micro)
}

const FORENSIC_FREQS: [(Locus, &[(Allele, f64)]); Locus::COUNT] = [
    (
        Locus::D3S1358,
        &[
            (a(14, 0), 0.15),
            (a(15, 0), 0.25),
            (a(16, 0), 0.22),
            (a(17, 0), 0.20),
            (a(18, 0), 0.13),
            (a(19, 0), 0.05),
        ],
    ),
    (
        Locus::VWA,
        &[
            (a(14, 0), 0.10),
            (a(15, 0), 0.12),
            (a(16, 0), 0.20),
            (a(17, 0), 0.25),
            (a(18, 0), 0.20),
            (a(19, 0), 0.10),
            (a(20, 0), 0.03),
        ],
    ),
    (
        Locus::FGA,
        &[
            (a(19, 0), 0.05),
            (a(20, 0), 0.10),
            (a(21, 0), 0.15),
            (a(22, 0), 0.20),
            (a(23, 0), 0.18),
            (a(24, 0), 0.15),
            (a(25, 0), 0.10),
            (a(26, 0), 0.07),
        ],
    ),
    (
        Locus::D8S1179,
        &[
            (a(10, 0), 0.05),
            (a(11, 0), 0.08),
            (a(12, 0), 0.10),
            (a(13, 0), 0.30),
            (a(14, 0), 0.25),
            (a(15, 0), 0.15),
            (a(16, 0), 0.07),
        ],
    ),
    (
        Locus::D21S11,
        &[
            (a(27, 0), 0.05),
            (a(28, 0), 0.15),
            (a(29, 0), 0.20),
            (a(30, 0), 0.25),
            (a(31, 0), 0.15),
            (a(32, 0), 0.10),
            (a(30, 2), 0.08),
            (a(31, 2), 0.02),
        ],
    ),
    (
        Locus::D18S51,
        &[
            (a(12, 0), 0.08),
            (a(13, 0), 0.15),
            (a(14, 0), 0.20),
            (a(15, 0), 0.18),
            (a(16, 0), 0.12),
            (a(17, 0), 0.10),
            (a(18, 0), 0.08),
            (a(19, 0), 0.06),
            (a(20, 0), 0.03),
        ],
    ),
    (
        Locus::D5S818,
        &[
            (a(9, 0), 0.05),
            (a(10, 0), 0.08),
            (a(11, 0), 0.25),
            (a(12, 0), 0.30),
            (a(13, 0), 0.20),
            (a(14, 0), 0.10),
            (a(15, 0), 0.02),
        ],
    ),
    (
        Locus::D13S317,
        &[
            (a(8, 0), 0.05),
            (a(9, 0), 0.08),
            (a(10, 0), 0.10),
            (a(11, 0), 0.25),
            (a(12, 0), 0.20),
            (a(13, 0), 0.18),
            (a(14, 0), 0.12),
            (a(15, 0), 0.02),
        ],
    ),
    (
        Locus::D7S820,
        &[
            (a(8, 0), 0.10),
            (a(9, 0), 0.12),
            (a(10, 0), 0.25),
            (a(11, 0), 0.28),
            (a(12, 0), 0.15),
            (a(13, 0), 0.08),
            (a(14, 0), 0.02),
        ],
    ),
    (
        Locus::D16S539,
        &[
            (a(8, 0), 0.05),
            (a(9, 0), 0.20),
            (a(10, 0), 0.15),
            (a(11, 0), 0.25),
            (a(12, 0), 0.20),
            (a(13, 0), 0.10),
            (a(14, 0), 0.05),
        ],
    ),
    (
        Locus::TH01,
        &[
            (a(6, 0), 0.20),
            (a(7, 0), 0.15),
            (a(8, 0), 0.18),
            (a(9, 0), 0.22),
            (a(9, 3), 0.15),
            (a(10, 0), 0.08),
            (a(11, 0), 0.02),
        ],
    ),
    (
        Locus::TPOX,
        &[
            (a(8, 0), 0.40),
            (a(9, 0), 0.10),
            (a(10, 0), 0.12),
            (a(11, 0), 0.25),
            (a(12, 0), 0.10),
            (a(13, 0), 0.03),
        ],
    ),
    (
        Locus::CSF1PO,
        &[
            (a(9, 0), 0.05),
            (a(10, 0), 0.20),
            (a(11, 0), 0.25),
            (a(12, 0), 0.30),
            (a(13, 0), 0.12),
            (a(14, 0), 0.08),
        ],
    ),
    (
        Locus::D2S1338,
        &[
            (a(17, 0), 0.08),
            (a(18, 0), 0.05),
            (a(19, 0), 0.10),
            (a(20, 0), 0.15),
            (a(21, 0), 0.08),
            (a(22, 0), 0.07),
            (a(23, 0), 0.12),
            (a(24, 0), 0.15),
            (a(25, 0), 0.15),
        ],
    ),
    (
        Locus::D19S433,
        &[
            (a(13, 0), 0.15),
            (a(14, 0), 0.30),
            (a(14, 2), 0.05),
            (a(15, 0), 0.20),
            (a(15, 2), 0.05),
            (a(16, 0), 0.15),
            (a(17, 0), 0.10),
        ],
    ),
    (
        Locus::D22S1045,
        &[
            (a(11, 0), 0.10),
            (a(14, 0), 0.08),
            (a(15, 0), 0.30),
            (a(16, 0), 0.35),
            (a(17, 0), 0.12),
            (a(18, 0), 0.05),
        ],
    ),
    (
        Locus::D10S1248,
        &[
            (a(11, 0), 0.05),
            (a(12, 0), 0.08),
            (a(13, 0), 0.25),
            (a(14, 0), 0.30),
            (a(15, 0), 0.20),
            (a(16, 0), 0.10),
            (a(17, 0), 0.02),
        ],
    ),
    (
        Locus::D1S1656,
        &[
            (a(12, 0), 0.10),
            (a(13, 0), 0.08),
            (a(14, 0), 0.05),
            (a(15, 0), 0.12),
            (a(16, 0), 0.15),
            (a(17, 0), 0.20),
            (a(17, 3), 0.10),
            (a(18, 0), 0.10),
            (a(18, 3), 0.05),
        ],
    ),
    (
        Locus::D12S391,
        &[
            (a(17, 0), 0.05),
            (a(18, 0), 0.15),
            (a(19, 0), 0.12),
            (a(20, 0), 0.20),
            (a(21, 0), 0.18),
            (a(22, 0), 0.15),
            (a(23, 0), 0.10),
            (a(24, 0), 0.05),
        ],
    ),
    (
        Locus::D2S441,
        &[
            (a(10, 0), 0.10),
            (a(11, 0), 0.20),
            (a(11, 3), 0.05),
            (a(12, 0), 0.08),
            (a(13, 0), 0.10),
            (a(14, 0), 0.25),
            (a(15, 0), 0.15),
            (a(16, 0), 0.07),
        ],
    ),
    (
        Locus::SE33,
        &[
            (a(19, 0), 0.05),
            (a(20, 0), 0.08),
            (a(21, 0), 0.10),
            (a(22, 0), 0.12),
            (a(23, 0), 0.10),
            (a(24, 0), 0.08),
            (a(25, 0), 0.12),
            (a(26, 0), 0.10),
            (a(27, 0), 0.10),
            (a(28, 0), 0.08),
            (a(29, 0), 0.07),
        ],
    ),
];
