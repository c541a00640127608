//! Depth-first backtracking search for one archetype pass.
//!
//! The engine enumerates index-ascending combinations of roster records,
//! prunes with the archetype's prefix predicate, and commits the first valid
//! squad found along each branch. Commits are irrevocable: members are
//! claimed in the shared [`Assignment`] immediately and the engine never
//! backtracks past a commit looking for a larger overall partition.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::archetype::Archetype;
use crate::assignment::Assignment;
use crate::checkpoint::CheckpointSink;
use crate::constants::squad::SQUAD_SIZE;
use crate::data::{FaceRecord, Squad};

/// Absolute time bound for one search pass.
///
/// Checked once at the top of every recursive call; expiry is cooperative,
/// so a deep exploration can overrun slightly before the next check.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    expires_at: Option<Instant>,
}

impl Deadline {
    /// Deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self {
            expires_at: Some(Instant::now() + budget),
        }
    }

    /// Deadline that never expires.
    pub fn unbounded() -> Self {
        Self { expires_at: None }
    }

    /// Whether the deadline has passed.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// Run one archetype's search pass over `roster`.
///
/// `assignment` carries claims from earlier passes in and accumulated claims
/// out. Every committed squad is reported to `sink` with the pass's full
/// squad list so far; sink failures are logged and swallowed. On deadline
/// expiry the squads committed so far are returned as-is.
pub fn search_pass(
    roster: &[FaceRecord],
    archetype: Archetype,
    assignment: &mut Assignment,
    deadline: Deadline,
    sink: &dyn CheckpointSink,
) -> Vec<Squad> {
    let mut pass = Pass {
        roster,
        archetype,
        assignment,
        deadline,
        sink,
        found: Vec::new(),
    };
    let mut prefix = Vec::with_capacity(SQUAD_SIZE);
    pass.explore(&mut prefix, 0);
    debug!(
        archetype = %archetype,
        squads = pass.found.len(),
        expired = deadline.is_expired(),
        "search pass finished"
    );
    pass.found
}

struct Pass<'a> {
    roster: &'a [FaceRecord],
    archetype: Archetype,
    assignment: &'a mut Assignment,
    deadline: Deadline,
    sink: &'a dyn CheckpointSink,
    found: Vec<Squad>,
}

impl Pass<'_> {
    fn explore(&mut self, prefix: &mut Vec<usize>, next_index: usize) {
        if self.deadline.is_expired() {
            return;
        }

        let candidate: Vec<&FaceRecord> = prefix.iter().map(|&idx| &self.roster[idx]).collect();

        // Claim-freedom is rechecked here (not only at selection time below)
        // because a commit further down the branch claims records that are
        // still on this frame's prefix.
        if !self.archetype.admits_prefix(&candidate, self.assignment) {
            return;
        }
        if candidate.len() == SQUAD_SIZE {
            if self.archetype.accepts(&candidate) {
                self.commit(prefix);
            }
            return;
        }
        if next_index >= self.roster.len() {
            return;
        }

        for idx in next_index..self.roster.len() {
            if self.assignment.is_claimed(&self.roster[idx].id) {
                continue;
            }
            prefix.push(idx);
            self.explore(prefix, idx + 1);
            prefix.pop();
        }
    }

    fn commit(&mut self, prefix: &[usize]) {
        let members: Vec<FaceRecord> = prefix
            .iter()
            .map(|&idx| self.roster[idx].clone())
            .collect();
        for member in &members {
            self.assignment.claim(member.id.clone(), self.archetype);
        }
        self.found.push(Squad {
            archetype: self.archetype,
            members,
        });
        if let Err(err) = self.sink.squads_updated(self.archetype, &self.found) {
            warn!(
                archetype = %self.archetype,
                error = %err,
                "checkpoint write failed; continuing search"
            );
        }
        debug!(
            archetype = %self.archetype,
            squads = self.found.len(),
            "committed squad"
        );
    }
}
