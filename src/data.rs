use serde::{Deserialize, Serialize};

use crate::archetype::Archetype;

pub use crate::types::{BoundingBox, RecordId};

/// Gender code attached to a detection by the upstream attribute model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Emotion code attached to a detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Neutral,
    Happiness,
    Anger,
    Surprise,
    Fear,
    Sadness,
    Disgust,
}

/// Age bracket attached to a detection.
///
/// The two adult brackets keep the upstream pipeline's range-style wire
/// names; everything else serializes under its variant name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    Baby,
    Kid,
    Teenager,
    #[serde(rename = "20-30s")]
    YoungAdult,
    #[serde(rename = "40-50s")]
    MaturedAdult,
    Senior,
}

/// Race code attached to a detection, including the synthetic `Android`
/// class the upstream model emits for non-biological faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Caucasian,
    Mongoloid,
    Negroid,
    Android,
}

/// One classified face detection from the upstream attribute model.
///
/// Records are immutable once decoded; roster order determines search
/// enumeration order and therefore which squads form first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceRecord {
    /// Stable identifier, unique within a roster (wire field `file_name`).
    #[serde(rename = "file_name")]
    pub id: RecordId,
    /// Detector bounding box, opaque to the grouping logic.
    pub bbox: BoundingBox,
    /// Gender attribute.
    pub gender: Gender,
    /// Emotion attribute.
    pub emotion: Emotion,
    /// Age-bracket attribute.
    pub age: AgeBracket,
    /// Race attribute.
    pub race: Race,
}

/// A committed group of exactly four records satisfying one archetype.
///
/// Squads are only ever constructed terminal-valid; there is no partially
/// built squad outside a search stack frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    /// The archetype this squad satisfies.
    pub archetype: Archetype,
    /// The four member records, in roster index order.
    pub members: Vec<FaceRecord>,
}

impl Squad {
    /// Member record identifiers in roster index order.
    pub fn member_ids(&self) -> impl Iterator<Item = &RecordId> {
        self.members.iter().map(|member| &member.id)
    }
}
