use std::io;

use thiserror::Error;

use crate::types::RecordId;

/// Error type for roster decoding, validation, and checkpoint failures.
#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("record '{id}' appears more than once in the roster")]
    DuplicateRecord { id: RecordId },
    #[error("failed to decode roster: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("checkpoint sink failure: {0}")]
    Checkpoint(String),
}
