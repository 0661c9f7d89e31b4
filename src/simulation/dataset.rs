//! The assembled dataset artifact.

use crate::profile::{GroundTruthEntry, PersonId, Profile};

/// Output of one generation run: the three artifacts with distinct
/// lifecycles.
///
/// The database and query collections are shuffled exactly once at
/// creation and are immutable afterward. Ground truth covers only the
/// true-relative queries; negative controls have no entry.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Founders, children, and filler profiles in shuffled order
    database: Vec<Profile>,
    /// Relabeled children plus unrelated controls in shuffled order
    queries: Vec<Profile>,
    /// Query id → true counterpart id, one row per true pair
    ground_truth: Vec<GroundTruthEntry>,
}

impl Dataset {
    /// Assemble a dataset from its three parts.
    pub fn new(
        database: Vec<Profile>,
        queries: Vec<Profile>,
        ground_truth: Vec<GroundTruthEntry>,
    ) -> Self {
        Self {
            database,
            queries,
            ground_truth,
        }
    }

    /// Database profiles in their shuffled order.
    pub fn database(&self) -> &[Profile] {
        &self.database
    }

    /// Query profiles in their shuffled order.
    pub fn queries(&self) -> &[Profile] {
        &self.queries
    }

    /// Ground-truth rows, one per true pair.
    pub fn ground_truth(&self) -> &[GroundTruthEntry] {
        &self.ground_truth
    }

    /// Number of database profiles.
    pub fn database_size(&self) -> usize {
        self.database.len()
    }

    /// Number of query profiles.
    pub fn query_count(&self) -> usize {
        self.queries.len()
    }

    /// Number of true relative pairs.
    pub fn true_pair_count(&self) -> usize {
        self.ground_truth.len()
    }

    /// Look up a database profile by id.
    pub fn find_in_database(&self, id: &PersonId) -> Option<&Profile> {
        self.database.iter().find(|p| p.id() == id)
    }

    /// Look up a query profile by id.
    pub fn find_query(&self, id: &PersonId) -> Option<&Profile> {
        self.queries.iter().find(|p| p.id() == id)
    }
}
