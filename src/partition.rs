use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

use crate::archetype::Archetype;
use crate::assignment::Assignment;
use crate::checkpoint::CheckpointSink;
use crate::config::PartitionConfig;
use crate::constants::passes::PASS_ORDER;
use crate::data::{FaceRecord, Squad};
use crate::engine::{Deadline, search_pass};

/// Runs the three archetype passes in canonical order over one roster.
///
/// All passes share a single cumulative [`Assignment`], so records claimed by
/// an earlier pass are permanently unavailable to later ones. Pass order is
/// therefore part of the observable result, not an implementation detail.
#[derive(Clone, Debug, Default)]
pub struct Partitioner {
    config: PartitionConfig,
}

impl Partitioner {
    /// Create a partitioner with explicit configuration.
    pub fn new(config: PartitionConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// Partition `roster` into archetype squads.
    ///
    /// Precondition: the roster is well-formed (unique ids, recognized
    /// attribute codes); [`crate::input::parse_roster`] enforces this at the
    /// boundary. Each pass runs under its configured budget and an expired
    /// budget truncates that pass, keeping the squads committed so far.
    pub fn partition(&self, roster: &[FaceRecord], sink: &dyn CheckpointSink) -> PartitionOutcome {
        let mut assignment = Assignment::default();
        let mut squads = IndexMap::with_capacity(PASS_ORDER.len());
        for archetype in PASS_ORDER {
            let budget = self.config.budgets.budget_for(archetype);
            let found = search_pass(
                roster,
                archetype,
                &mut assignment,
                Deadline::after(budget),
                sink,
            );
            info!(
                archetype = %archetype,
                squads = found.len(),
                budget_ms = budget.as_millis() as u64,
                "pass complete"
            );
            squads.insert(archetype, found);
        }
        let outcome = PartitionOutcome { squads, assignment };
        info!(
            total_squads = outcome.total_squads(),
            records_claimed = outcome.assignment.len(),
            "partition complete"
        );
        outcome
    }
}

/// Final result of a partition run.
///
/// Serializes as a JSON object keyed by archetype tag in pass order, each
/// value the list of squads that pass committed.
#[derive(Clone, Debug, Serialize)]
pub struct PartitionOutcome {
    /// Squads per archetype, keyed in pass order.
    #[serde(flatten)]
    pub squads: IndexMap<Archetype, Vec<Squad>>,
    /// Cumulative record claims left by the three passes.
    #[serde(skip)]
    pub assignment: Assignment,
}

impl PartitionOutcome {
    /// Combined number of squads across all archetypes.
    pub fn total_squads(&self) -> usize {
        self.squads.values().map(Vec::len).sum()
    }

    /// Squads committed for one archetype.
    pub fn squads_for(&self, archetype: Archetype) -> &[Squad] {
        self.squads
            .get(&archetype)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Roster records no squad claimed, in roster order.
    pub fn unclaimed<'a>(&self, roster: &'a [FaceRecord]) -> Vec<&'a FaceRecord> {
        roster
            .iter()
            .filter(|record| !self.assignment.is_claimed(&record.id))
            .collect()
    }
}
