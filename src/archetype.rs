use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::constants::squad::{BALANCED_GENDER_COUNT, MIN_DISTINCT_RACES, SQUAD_SIZE};
use crate::data::{FaceRecord, Gender};

/// One of the three squad-validity rules.
///
/// The serialized tag (`diversity_balance`, `distinct_emotion`,
/// `distinct_age_emotion`) is stable and keys the outcome mapping and the
/// per-archetype checkpoint files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Two male and two female members spanning at least three races.
    DiversityBalance,
    /// Four pairwise-distinct emotions spanning at least three races.
    DistinctEmotion,
    /// Four pairwise-distinct age brackets and four pairwise-distinct
    /// emotions.
    DistinctAgeEmotion,
}

impl Archetype {
    /// Stable snake_case tag matching the serialized form.
    pub fn tag(&self) -> &'static str {
        match self {
            Archetype::DiversityBalance => "diversity_balance",
            Archetype::DistinctEmotion => "distinct_emotion",
            Archetype::DistinctAgeEmotion => "distinct_age_emotion",
        }
    }

    /// Prefix predicate: can `candidate` still grow into a valid squad?
    ///
    /// Rejects immediately when any member is already claimed in
    /// `assignment` or the candidate has overrun the squad size. The
    /// archetype-specific constraints are monotone-safe: once a prefix is
    /// rejected, every extension of it is rejected too, which is what makes
    /// pruning on this predicate sound.
    pub fn admits_prefix(&self, candidate: &[&FaceRecord], assignment: &Assignment) -> bool {
        if candidate
            .iter()
            .any(|record| assignment.is_claimed(&record.id))
        {
            return false;
        }
        if candidate.len() > SQUAD_SIZE {
            return false;
        }
        match self {
            Archetype::DiversityBalance => {
                gender_count(candidate, Gender::Male) <= BALANCED_GENDER_COUNT
                    && gender_count(candidate, Gender::Female) <= BALANCED_GENDER_COUNT
            }
            Archetype::DistinctEmotion => all_distinct(candidate.iter().map(|r| r.emotion)),
            Archetype::DistinctAgeEmotion => {
                all_distinct(candidate.iter().map(|r| r.age))
                    && all_distinct(candidate.iter().map(|r| r.emotion))
            }
        }
    }

    /// Terminal predicate: does a full candidate of exactly [`SQUAD_SIZE`]
    /// records satisfy this archetype?
    pub fn accepts(&self, candidate: &[&FaceRecord]) -> bool {
        if candidate.len() != SQUAD_SIZE {
            return false;
        }
        match self {
            Archetype::DiversityBalance => {
                gender_count(candidate, Gender::Male) == BALANCED_GENDER_COUNT
                    && gender_count(candidate, Gender::Female) == BALANCED_GENDER_COUNT
                    && distinct_count(candidate.iter().map(|r| r.race)) >= MIN_DISTINCT_RACES
            }
            Archetype::DistinctEmotion => {
                distinct_count(candidate.iter().map(|r| r.emotion)) == SQUAD_SIZE
                    && distinct_count(candidate.iter().map(|r| r.race)) >= MIN_DISTINCT_RACES
            }
            Archetype::DistinctAgeEmotion => {
                distinct_count(candidate.iter().map(|r| r.age)) == SQUAD_SIZE
                    && distinct_count(candidate.iter().map(|r| r.emotion)) == SQUAD_SIZE
            }
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

fn gender_count(candidate: &[&FaceRecord], gender: Gender) -> usize {
    candidate
        .iter()
        .filter(|record| record.gender == gender)
        .count()
}

fn distinct_count<T: Eq + Hash>(values: impl Iterator<Item = T>) -> usize {
    values.collect::<HashSet<_>>().len()
}

fn all_distinct<T: Eq + Hash>(values: impl Iterator<Item = T> + ExactSizeIterator) -> bool {
    let len = values.len();
    distinct_count(values) == len
}
