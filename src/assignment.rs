use std::collections::HashMap;

use serde::Serialize;

use crate::archetype::Archetype;
use crate::types::RecordId;

/// Record-to-archetype exclusivity tracking shared across all passes.
///
/// A claim is permanent: once a record id is claimed for a squad it is never
/// released, even when sibling candidate branches that contained the record
/// are later abandoned. Abandonment is bounded to a recursion branch;
/// commitment is not.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Assignment {
    claims: HashMap<RecordId, Archetype>,
}

impl Assignment {
    /// Whether `id` has already been committed to some squad.
    pub fn is_claimed(&self, id: &str) -> bool {
        self.claims.contains_key(id)
    }

    /// Claim `id` for `archetype`.
    pub fn claim(&mut self, id: RecordId, archetype: Archetype) {
        self.claims.insert(id, archetype);
    }

    /// The archetype that claimed `id`, if any.
    pub fn archetype_for(&self, id: &str) -> Option<Archetype> {
        self.claims.get(id).copied()
    }

    /// Number of claimed records.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether no record has been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Iterate over claimed record ids and the archetype that claimed them.
    pub fn iter(&self) -> impl Iterator<Item = (&RecordId, Archetype)> {
        self.claims.iter().map(|(id, archetype)| (id, *archetype))
    }
}
