use crate::base::errors::UnknownLocus;
use std::fmt;
use std::str::FromStr;

/// One of the 21 forensic STR markers (CODIS core plus expanded set).
///
/// `Locus::ALL` fixes the canonical column order used everywhere: profile
/// storage, CSV headers, and the per-locus iteration order of the
/// generation engine (which in turn fixes the random draw sequence for a
/// given seed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locus {
    D3S1358,
    VWA,
    FGA,
    D8S1179,
    D21S11,
    D18S51,
    D5S818,
    D13S317,
    D7S820,
    D16S539,
    TH01,
    TPOX,
    CSF1PO,
    D2S1338,
    D19S433,
    D22S1045,
    D10S1248,
    D1S1656,
    D12S391,
    D2S441,
    SE33,
}

impl Locus {
    /// Number of loci in a complete profile.
    pub const COUNT: usize = 21;

    /// All loci in canonical order.
    pub const ALL: [Locus; Locus::COUNT] = [
        Locus::D3S1358,
        Locus::VWA,
        Locus::FGA,
        Locus::D8S1179,
        Locus::D21S11,
        Locus::D18S51,
        Locus::D5S818,
        Locus::D13S317,
        Locus::D7S820,
        Locus::D16S539,
        Locus::TH01,
        Locus::TPOX,
        Locus::CSF1PO,
        Locus::D2S1338,
        Locus::D19S433,
        Locus::D22S1045,
        Locus::D10S1248,
        Locus::D1S1656,
        Locus::D12S391,
        Locus::D2S441,
        Locus::SE33,
    ];

    /// The marker name as it appears in CSV headers.
    pub const fn name(&self) -> &'static str {
        match self {
            Locus::D3S1358 => "D3S1358",
            Locus::VWA => "vWA",
            Locus::FGA => "FGA",
            Locus::D8S1179 => "D8S1179",
            Locus::D21S11 => "D21S11",
            Locus::D18S51 => "D18S51",
            Locus::D5S818 => "D5S818",
            Locus::D13S317 => "D13S317",
            Locus::D7S820 => "D7S820",
            Locus::D16S539 => "D16S539",
            Locus::TH01 => "TH01",
            Locus::TPOX => "TPOX",
            Locus::CSF1PO => "CSF1PO",
            Locus::D2S1338 => "D2S1338",
            Locus::D19S433 => "D19S433",
            Locus::D22S1045 => "D22S1045",
            Locus::D10S1248 => "D10S1248",
            Locus::D1S1656 => "D1S1656",
            Locus::D12S391 => "D12S391",
            Locus::D2S441 => "D2S441",
            Locus::SE33 => "SE33",
        }
    }

    /// Position of this locus in the canonical order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Locus {
    type Err = UnknownLocus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locus::ALL
            .iter()
            .find(|locus| locus.name() == s)
            .copied()
            .ok_or_else(|| UnknownLocus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(Locus::ALL.len(), 21);
        assert_eq!(Locus::ALL.len(), Locus::COUNT);
    }

    #[test]
    fn test_index_matches_canonical_order() {
        for (i, locus) in Locus::ALL.iter().enumerate() {
            assert_eq!(locus.index(), i);
        }
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<&str> = Locus::ALL.iter().map(|l| l.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Locus::COUNT);
    }

    #[test]
    fn test_from_str_roundtrip() {
        for locus in Locus::ALL {
            let parsed: Locus = locus.name().parse().unwrap();
            assert_eq!(parsed, locus);
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("VWA".parse::<Locus>().is_err());
        assert_eq!("vWA".parse::<Locus>().unwrap(), Locus::VWA);
    }

    #[test]
    fn test_from_str_unknown() {
        assert!("D99S999".parse::<Locus>().is_err());
    }
}
