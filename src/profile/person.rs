use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Identifier of one individual, in one of four namespaces:
/// founder `P######`, unrelated filler `U######`, child `C######`, and
/// query `Q###`.
///
/// Ids are interned (`Arc<str>`) so relabeling and relationship records
/// clone cheaply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(Arc<str>);

impl PersonId {
    /// Founder id `P{index:06}` (zero-based).
    pub fn founder(index: usize) -> Self {
        Self(format!("P{index:06}").into())
    }

    /// Child id `C{index:06}` (zero-based, parallel to the founder index).
    pub fn child(index: usize) -> Self {
        Self(format!("C{index:06}").into())
    }

    /// Filler id `U{n:06}` where `n` is one-based.
    pub fn filler(index: usize) -> Self {
        Self(format!("U{:06}", index + 1).into())
    }

    /// Query id `Q{n:03}` where `n` is one-based.
    pub fn query(index: usize) -> Self {
        Self(format!("Q{:03}", index + 1).into())
    }

    /// Wrap an id read back from storage.
    pub fn from_raw(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PersonId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PersonId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_raw(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_formats() {
        assert_eq!(PersonId::founder(0).as_str(), "P000000");
        assert_eq!(PersonId::founder(34).as_str(), "P000034");
        assert_eq!(PersonId::child(7).as_str(), "C000007");
        assert_eq!(PersonId::filler(0).as_str(), "U000001");
        assert_eq!(PersonId::query(0).as_str(), "Q001");
        assert_eq!(PersonId::query(39).as_str(), "Q040");
    }

    #[test]
    fn test_from_raw_roundtrip() {
        let id = PersonId::from_raw("P000123");
        assert_eq!(id, PersonId::founder(123));
        assert_eq!(id.to_string(), "P000123");
    }
}
