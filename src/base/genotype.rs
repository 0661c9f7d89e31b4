use crate::base::errors::InvalidGenotype;
use crate::base::Allele;
use std::fmt;
use std::str::FromStr;

/// The observed genotype of one individual at one locus.
///
/// Exactly one of three states holds per (individual, locus) cell. The
/// states are produced stochastically by the artifact model and cannot be
/// re-derived from other fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genotype {
    /// Both alleles observed, stored in ascending order.
    Pair(Allele, Allele),
    /// Only one allele observed; the other is indistinguishable from
    /// background.
    Single(Allele),
    /// Missing locus (complete dropout).
    Dropout,
}

impl Genotype {
    /// Build a two-allele genotype, sorting so the lower allele comes
    /// first. Canonicalization is order-independent on input: callers never
    /// need to pre-sort.
    pub fn pair(a: Allele, b: Allele) -> Self {
        if a <= b {
            Self::Pair(a, b)
        } else {
            Self::Pair(b, a)
        }
    }

    /// Check whether this cell is a dropout.
    #[inline]
    pub fn is_dropout(&self) -> bool {
        matches!(self, Self::Dropout)
    }

    /// Check whether this cell is a single-allele observation.
    #[inline]
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// The pair of alleles a parent carrying this genotype can transmit.
    ///
    /// A single observation is treated as homozygous: both transmissible
    /// alleles equal the one observed value. Dropout transmits nothing.
    pub fn transmissible_alleles(&self) -> Option<(Allele, Allele)> {
        match *self {
            Self::Pair(a, b) => Some((a, b)),
            Self::Single(a) => Some((a, a)),
            Self::Dropout => None,
        }
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Dropout => write!(f, "-"),
            Self::Single(a) => write!(f, "{a}"),
            // Homozygous pairs collapse to a single rendered value.
            Self::Pair(a, b) if a == b => write!(f, "{a}"),
            Self::Pair(a, b) => write!(f, "{a},{b}"),
        }
    }
}

impl FromStr for Genotype {
    type Err = InvalidGenotype;

    /// Parse a genotype cell: `-` | `<allele>` | `<allele>,<allele>`.
    ///
    /// A lone value parses as `Single`; the rendering of a homozygous pair
    /// is textually indistinguishable from a single observation, and both
    /// transmit identically.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidGenotype::EmptyCell);
        }
        if s == "-" {
            return Ok(Self::Dropout);
        }
        let fields: Vec<&str> = s.split(',').collect();
        match fields.as_slice() {
            [one] => Ok(Self::Single(one.parse::<Allele>()?)),
            [first, second] => Ok(Self::pair(
                first.parse::<Allele>()?,
                second.parse::<Allele>()?,
            )),
            _ => Err(InvalidGenotype::TooManyAlleles(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a(repeats: u8, micro: u8) -> Allele {
        Allele::new(repeats, micro)
    }

    #[test]
    fn test_pair_sorts_ascending() {
        let g = Genotype::pair(a(16, 0), a(14, 0));
        assert_eq!(g, Genotype::Pair(a(14, 0), a(16, 0)));
    }

    #[test]
    fn test_pair_commutative() {
        let pairs = [
            (a(14, 0), a(16, 0)),
            (a(9, 3), a(9, 0)),
            (a(30, 2), a(31, 0)),
            (a(8, 0), a(8, 0)),
        ];
        for (x, y) in pairs {
            assert_eq!(Genotype::pair(x, y), Genotype::pair(y, x));
            assert_eq!(
                Genotype::pair(x, y).to_string(),
                Genotype::pair(y, x).to_string()
            );
        }
    }

    #[test]
    fn test_display_heterozygous() {
        assert_eq!(Genotype::pair(a(16, 0), a(14, 0)).to_string(), "14,16");
        assert_eq!(Genotype::pair(a(9, 0), a(9, 3)).to_string(), "9,9.3");
    }

    #[test]
    fn test_display_homozygous_collapses() {
        assert_eq!(Genotype::pair(a(12, 0), a(12, 0)).to_string(), "12");
    }

    #[test]
    fn test_display_single_and_dropout() {
        assert_eq!(Genotype::Single(a(9, 3)).to_string(), "9.3");
        assert_eq!(Genotype::Dropout.to_string(), "-");
    }

    #[test]
    fn test_parse_dropout() {
        assert_eq!("-".parse::<Genotype>().unwrap(), Genotype::Dropout);
    }

    #[test]
    fn test_parse_single() {
        assert_eq!(
            "9.3".parse::<Genotype>().unwrap(),
            Genotype::Single(a(9, 3))
        );
    }

    #[test]
    fn test_parse_pair_recovers_allele_set() {
        let g: Genotype = "14,16".parse().unwrap();
        assert_eq!(g.transmissible_alleles(), Some((a(14, 0), a(16, 0))));
        // Unordered input canonicalizes on parse.
        let g: Genotype = "16,14".parse().unwrap();
        assert_eq!(g.to_string(), "14,16");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<Genotype>().is_err());
        assert!("14,15,16".parse::<Genotype>().is_err());
        assert!("14,x".parse::<Genotype>().is_err());
    }

    #[test]
    fn test_render_parse_idempotent() {
        for cell in ["-", "9.3", "12", "14,16", "9,9.3"] {
            let g: Genotype = cell.parse().unwrap();
            assert_eq!(g.to_string(), cell);
        }
    }

    #[test]
    fn test_transmissible_alleles() {
        assert_eq!(
            Genotype::pair(a(14, 0), a(16, 0)).transmissible_alleles(),
            Some((a(14, 0), a(16, 0)))
        );
        assert_eq!(
            Genotype::Single(a(9, 3)).transmissible_alleles(),
            Some((a(9, 3), a(9, 3)))
        );
        assert_eq!(Genotype::Dropout.transmissible_alleles(), None);
    }
}
