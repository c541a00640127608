use crate::archetype::Archetype;
use crate::constants::squad::SQUAD_SIZE;
use crate::partition::PartitionOutcome;

/// Aggregate tally for a completed partition run.
#[derive(Clone, Debug, PartialEq)]
pub struct PartitionTally {
    pub total_squads: usize,
    pub records_claimed: usize,
    pub records_total: usize,
    pub coverage: f64,
    pub per_archetype: Vec<ArchetypeShare>,
}

/// Per-archetype share of the committed squads.
#[derive(Clone, Debug, PartialEq)]
pub struct ArchetypeShare {
    pub archetype: Archetype,
    pub squads: usize,
    pub share: f64,
}

/// Compute run metrics from a partition outcome and the roster size.
pub fn partition_tally(outcome: &PartitionOutcome, records_total: usize) -> PartitionTally {
    let total_squads = outcome.total_squads();
    let records_claimed = total_squads * SQUAD_SIZE;
    let coverage = if records_total == 0 {
        0.0
    } else {
        records_claimed as f64 / records_total as f64
    };
    let mut per_archetype: Vec<ArchetypeShare> = outcome
        .squads
        .iter()
        .map(|(archetype, squads)| ArchetypeShare {
            archetype: *archetype,
            squads: squads.len(),
            share: if total_squads == 0 {
                0.0
            } else {
                squads.len() as f64 / total_squads as f64
            },
        })
        .collect();
    per_archetype.sort_by(|a, b| {
        b.squads
            .cmp(&a.squads)
            .then_with(|| a.archetype.tag().cmp(b.archetype.tag()))
    });
    PartitionTally {
        total_squads,
        records_claimed,
        records_total,
        coverage,
        per_archetype,
    }
}
