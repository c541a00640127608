#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Archetype definitions and their admission predicates.
pub mod archetype;
/// Record-to-archetype exclusivity tracking.
pub mod assignment;
/// Checkpoint sink trait and built-in sinks.
pub mod checkpoint;
/// Partition run configuration types.
pub mod config;
/// Centralized constants used across predicates, passes, and checkpoints.
pub mod constants;
/// Face record, squad, and attribute types.
pub mod data;
/// Backtracking search engine and deadline handling.
pub mod engine;
/// Reusable demo runners shared by the demo binaries.
pub mod example_apps;
/// Roster input boundary: decoding and validation.
pub mod input;
/// Aggregate partition metrics helpers.
pub mod metrics;
/// Pass orchestration and the partition outcome type.
pub mod partition;
/// Shared type aliases.
pub mod types;

mod errors;

pub use archetype::Archetype;
pub use assignment::Assignment;
pub use checkpoint::{CheckpointSink, JsonCheckpointSink, MemoryCheckpointSink, NullCheckpointSink};
pub use config::{PartitionConfig, PassBudgets};
pub use data::{AgeBracket, Emotion, FaceRecord, Gender, Race, Squad};
pub use engine::{Deadline, search_pass};
pub use errors::PartitionError;
pub use input::{parse_roster, read_roster};
pub use metrics::{ArchetypeShare, PartitionTally, partition_tally};
pub use partition::{PartitionOutcome, Partitioner};
pub use types::{BoundingBox, RecordId};
