use crate::archetype::Archetype;
use crate::data::{AgeBracket, Emotion, Gender, Race};

/// Constants defining squad shape and archetype thresholds.
pub mod squad {
    /// Number of members in every squad.
    pub const SQUAD_SIZE: usize = 4;
    /// Members required per gender for a balanced squad.
    pub const BALANCED_GENDER_COUNT: usize = 2;
    /// Minimum distinct races for the race-diverse archetypes.
    pub const MIN_DISTINCT_RACES: usize = 3;
}

/// Constants governing pass ordering and default time budgets.
pub mod passes {
    use super::Archetype;

    /// Canonical pass order. Earlier passes claim records first, so order is
    /// part of the observable contract.
    pub const PASS_ORDER: [Archetype; 3] = [
        Archetype::DistinctAgeEmotion,
        Archetype::DiversityBalance,
        Archetype::DistinctEmotion,
    ];
    /// Default budget in seconds for the two distinctness passes.
    pub const DEFAULT_LONG_BUDGET_SECS: u64 = 60;
    /// Default budget in seconds for the diversity-balance pass.
    pub const DEFAULT_SHORT_BUDGET_SECS: u64 = 1;
}

/// Constants used by checkpoint persistence.
pub mod checkpoints {
    /// Default directory for per-archetype checkpoint files.
    pub const DEFAULT_CHECKPOINT_DIR: &str = "run";
    /// File extension for checkpoint files.
    pub const CHECKPOINT_FILE_EXT: &str = "json";
}

/// Canonical attribute-variant orderings used by synthetic roster
/// generation and exhaustive tests.
pub mod attributes {
    use super::{AgeBracket, Emotion, Gender, Race};

    /// All gender codes.
    pub const ALL_GENDERS: [Gender; 2] = [Gender::Male, Gender::Female];
    /// All emotion codes.
    pub const ALL_EMOTIONS: [Emotion; 7] = [
        Emotion::Neutral,
        Emotion::Happiness,
        Emotion::Anger,
        Emotion::Surprise,
        Emotion::Fear,
        Emotion::Sadness,
        Emotion::Disgust,
    ];
    /// All age brackets.
    pub const ALL_AGE_BRACKETS: [AgeBracket; 6] = [
        AgeBracket::Baby,
        AgeBracket::Kid,
        AgeBracket::Teenager,
        AgeBracket::YoungAdult,
        AgeBracket::MaturedAdult,
        AgeBracket::Senior,
    ];
    /// All race codes.
    pub const ALL_RACES: [Race; 4] = [
        Race::Caucasian,
        Race::Mongoloid,
        Race::Negroid,
        Race::Android,
    ];
}
