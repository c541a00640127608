//! Roster input boundary: decoding and validation.
//!
//! The search engine assumes well-formed records, so everything entering it
//! goes through this module first: unrecognized categorical codes fail serde
//! decoding, and duplicate record ids are rejected before any pass runs.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::data::FaceRecord;
use crate::errors::PartitionError;

/// Read and validate a JSON roster file.
pub fn read_roster<P: AsRef<Path>>(path: P) -> Result<Vec<FaceRecord>, PartitionError> {
    let bytes = fs::read(path)?;
    parse_roster(&bytes)
}

/// Decode and validate a JSON roster from raw bytes.
pub fn parse_roster(bytes: &[u8]) -> Result<Vec<FaceRecord>, PartitionError> {
    let roster: Vec<FaceRecord> = serde_json::from_slice(bytes)?;
    ensure_unique_ids(&roster)?;
    Ok(roster)
}

fn ensure_unique_ids(roster: &[FaceRecord]) -> Result<(), PartitionError> {
    let mut seen = HashSet::with_capacity(roster.len());
    for record in roster {
        if !seen.insert(record.id.as_str()) {
            return Err(PartitionError::DuplicateRecord {
                id: record.id.clone(),
            });
        }
    }
    Ok(())
}
