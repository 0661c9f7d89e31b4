use crate::base::errors::InvalidAllele;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A single STR allele: an integer repeat count plus an optional
/// single-digit "microvariant" suffix (e.g. `13`, `9.3`).
///
/// Alleles are kept in this typed form throughout the engine; the textual
/// challenge grammar only appears at the storage boundary. Ordering derives
/// from `(repeats, micro)`, which matches numeric order because the
/// microvariant is a single fractional digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Allele {
    /// Integer repeat count
    repeats: u8,
    /// Fractional digit; 0 means a plain integer allele
    micro: u8,
}

impl Allele {
    /// Create a new allele from a repeat count and microvariant digit.
    ///
    /// A `micro` of 0 denotes a plain integer allele. Digits above 9 are
    /// not representable in the challenge grammar.
    pub const fn new(repeats: u8, micro: u8) -> Self {
        debug_assert!(micro <= 9);
        Self { repeats, micro }
    }

    /// Get the integer repeat count.
    #[inline]
    pub fn repeats(&self) -> u8 {
        self.repeats
    }

    /// Get the microvariant digit (0 for plain integer alleles).
    #[inline]
    pub fn micro(&self) -> u8 {
        self.micro
    }

    /// Check whether this allele carries a microvariant suffix.
    #[inline]
    pub fn is_microvariant(&self) -> bool {
        self.micro != 0
    }

    /// Numeric value of the allele (e.g. 9.3).
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from(self.repeats) + f64::from(self.micro) / 10.0
    }

    /// Shift the integer repeat count by one step, keeping the microvariant
    /// digit unchanged. A downward step at zero repeats is redirected
    /// upward so the count cannot underflow.
    pub fn step(self, up: bool) -> Self {
        let repeats = if up || self.repeats == 0 {
            self.repeats + 1
        } else {
            self.repeats - 1
        };
        Self {
            repeats,
            micro: self.micro,
        }
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.micro == 0 {
            write!(f, "{}", self.repeats)
        } else {
            write!(f, "{}.{}", self.repeats, self.micro)
        }
    }
}

impl FromStr for Allele {
    type Err = InvalidAllele;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidAllele(s.to_string());

        match s.split_once('.') {
            None => {
                let repeats: u8 = s.parse().map_err(|_| invalid())?;
                Ok(Self::new(repeats, 0))
            }
            Some((whole, frac)) => {
                let repeats: u8 = whole.parse().map_err(|_| invalid())?;
                // Exactly one fractional digit, and never a trailing zero
                // ("13.0" is not a valid cell; integers render bare).
                if frac.len() != 1 {
                    return Err(invalid());
                }
                let micro: u8 = frac.parse().map_err(|_| invalid())?;
                if micro == 0 {
                    return Err(invalid());
                }
                Ok(Self::new(repeats, micro))
            }
        }
    }
}

impl Serialize for Allele {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Allele {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
