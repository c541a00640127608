//! Checkpoint sinks for incremental squad persistence.
//!
//! The engine emits the full squad list for an archetype on every commit, so
//! a sink always overwrites its previous snapshot for that archetype rather
//! than appending. Sink failures are reported to the caller of
//! [`CheckpointSink::squads_updated`] but are treated as non-fatal by the
//! search engine.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::archetype::Archetype;
use crate::constants::checkpoints::CHECKPOINT_FILE_EXT;
use crate::data::Squad;
use crate::errors::PartitionError;

/// Receiver for per-commit squad snapshots.
pub trait CheckpointSink: Send + Sync {
    /// Persist or transmit the full list of squads found so far for
    /// `archetype`. Called once per committed squad.
    fn squads_updated(&self, archetype: Archetype, squads: &[Squad]) -> Result<(), PartitionError>;
}

/// File-backed checkpoint sink writing one JSON file per archetype tag.
///
/// Each call rewrites `<dir>/<tag>.json` with the complete snapshot.
#[derive(Debug)]
pub struct JsonCheckpointSink {
    dir: PathBuf,
}

impl JsonCheckpointSink {
    /// Open (or create) a checkpoint directory.
    pub fn open<P: Into<PathBuf>>(dir: P) -> Result<Self, PartitionError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the checkpoint file for one archetype.
    pub fn checkpoint_path(&self, archetype: Archetype) -> PathBuf {
        self.dir
            .join(format!("{}.{}", archetype.tag(), CHECKPOINT_FILE_EXT))
    }

    /// Read back the most recent snapshot for `archetype`, if one exists.
    pub fn read_snapshot(&self, archetype: Archetype) -> Result<Option<Vec<Squad>>, PartitionError> {
        let path = self.checkpoint_path(archetype);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

impl CheckpointSink for JsonCheckpointSink {
    fn squads_updated(&self, archetype: Archetype, squads: &[Squad]) -> Result<(), PartitionError> {
        let payload = serde_json::to_vec_pretty(squads)?;
        fs::write(self.checkpoint_path(archetype), payload).map_err(map_sink_err)
    }
}

/// In-memory checkpoint sink for tests and embedding.
///
/// Keeps the latest snapshot per archetype and counts commits.
#[derive(Debug, Default)]
pub struct MemoryCheckpointSink {
    snapshots: Mutex<HashMap<Archetype, Vec<Squad>>>,
    commits: AtomicUsize,
}

impl MemoryCheckpointSink {
    /// Latest snapshot stored for `archetype`.
    pub fn snapshot(&self, archetype: Archetype) -> Option<Vec<Squad>> {
        self.snapshots
            .lock()
            .ok()?
            .get(&archetype)
            .cloned()
    }

    /// Total number of commit notifications received.
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::Relaxed)
    }
}

impl CheckpointSink for MemoryCheckpointSink {
    fn squads_updated(&self, archetype: Archetype, squads: &[Squad]) -> Result<(), PartitionError> {
        self.commits.fetch_add(1, Ordering::Relaxed);
        let mut guard = self
            .snapshots
            .lock()
            .map_err(|_| PartitionError::Checkpoint("snapshot lock poisoned".into()))?;
        guard.insert(archetype, squads.to_vec());
        Ok(())
    }
}

/// Sink that discards every snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCheckpointSink;

impl CheckpointSink for NullCheckpointSink {
    fn squads_updated(
        &self,
        _archetype: Archetype,
        _squads: &[Squad],
    ) -> Result<(), PartitionError> {
        Ok(())
    }
}

fn map_sink_err(err: io::Error) -> PartitionError {
    PartitionError::Checkpoint(err.to_string())
}
