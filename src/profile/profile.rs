use crate::base::{Genotype, Locus};
use crate::profile::PersonId;

/// A complete STR profile: one individual, one genotype per locus.
///
/// Genotypes are stored in `Locus::ALL` order; accessors index by locus so
/// callers never deal with positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Identifier of the individual
    id: PersonId,
    /// One genotype per locus, in canonical order
    genotypes: Vec<Genotype>,
}

impl Profile {
    /// Create a profile from genotypes in canonical locus order.
    pub fn new(id: PersonId, genotypes: Vec<Genotype>) -> Self {
        debug_assert_eq!(genotypes.len(), Locus::COUNT);
        Self { id, genotypes }
    }

    /// Get the individual's id.
    #[inline]
    pub fn id(&self) -> &PersonId {
        &self.id
    }

    /// Genotype at a specific locus.
    #[inline]
    pub fn genotype(&self, locus: Locus) -> &Genotype {
        &self.genotypes[locus.index()]
    }

    /// All genotypes in canonical locus order.
    #[inline]
    pub fn genotypes(&self) -> &[Genotype] {
        &self.genotypes
    }

    /// Copy of this profile under a new id; genetic content is unchanged.
    /// Used when children are relabeled into the query namespace.
    pub fn relabeled(&self, id: PersonId) -> Self {
        Self {
            id,
            genotypes: self.genotypes.clone(),
        }
    }

    /// Count of dropout cells in this profile.
    pub fn dropout_count(&self) -> usize {
        self.genotypes.iter().filter(|g| g.is_dropout()).count()
    }
}
