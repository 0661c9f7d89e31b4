use crate::profile::PersonId;
use serde::{Deserialize, Serialize};

/// An explicit parent-to-child link created at generation time.
///
/// Carrying the link as a record, rather than by list position, keeps it
/// valid after the database and query collections are shuffled
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// The founder parent
    pub parent: PersonId,
    /// The biological child derived from that parent
    pub child: PersonId,
}

impl Relationship {
    /// Create a new parent-child record.
    pub fn new(parent: PersonId, child: PersonId) -> Self {
        Self { parent, child }
    }
}

/// One row of the ground-truth artifact: a relabeled query id and the
/// database id of its true counterpart. Only true-relative queries get an
/// entry; negative controls are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundTruthEntry {
    /// Query id in the `Q###` namespace
    #[serde(rename = "QueryID")]
    pub query_id: PersonId,
    /// Id of the true parent in the database
    #[serde(rename = "TrueCounterpartID")]
    pub true_counterpart_id: PersonId,
}

impl GroundTruthEntry {
    /// Build an entry from a relationship record and the child's new
    /// query id.
    pub fn from_relationship(relationship: &Relationship, query_id: PersonId) -> Self {
        Self {
            query_id,
            true_counterpart_id: relationship.parent.clone(),
        }
    }
}
