//! Reusable demo runners shared by the demo binaries.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};
use rand::Rng;

use crate::checkpoint::JsonCheckpointSink;
use crate::config::{PartitionConfig, PassBudgets};
use crate::constants::attributes::{ALL_AGE_BRACKETS, ALL_EMOTIONS, ALL_GENDERS, ALL_RACES};
use crate::constants::checkpoints::DEFAULT_CHECKPOINT_DIR;
use crate::data::FaceRecord;
use crate::input::read_roster;
use crate::metrics::partition_tally;
use crate::partition::Partitioner;

#[derive(Debug, Parser)]
#[command(
    name = "partition_demo",
    disable_help_subcommand = true,
    about = "Partition a detection roster into archetype squads",
    long_about = "Load a JSON roster (or generate a deterministic synthetic one), run the three archetype passes, and print a per-archetype tally."
)]
struct PartitionDemoCli {
    #[arg(
        long,
        value_name = "PATH",
        help = "Roster JSON file; omit to generate a synthetic roster"
    )]
    roster: Option<PathBuf>,
    #[arg(
        long = "synthetic-count",
        default_value_t = 1500,
        value_parser = parse_positive_usize,
        help = "Synthetic roster size used when no roster file is given"
    )]
    synthetic_count: usize,
    #[arg(
        long,
        default_value_t = 99,
        help = "Deterministic seed for synthetic roster generation"
    )]
    seed: u64,
    #[arg(
        long = "checkpoint-dir",
        value_name = "DIR",
        help = "Directory for per-archetype checkpoint files"
    )]
    checkpoint_dir: Option<PathBuf>,
    #[arg(
        long,
        value_name = "PATH",
        help = "Optional path for the final partition JSON"
    )]
    output: Option<PathBuf>,
    #[arg(
        long = "budget-secs",
        value_name = "AGE_EMOTION,BALANCE,EMOTION",
        value_parser = parse_budget_secs_arg,
        help = "Comma-separated per-pass budgets in seconds"
    )]
    budgets: Option<PassBudgets>,
}

/// Run the partition demo against CLI-style arguments.
pub fn run_partition_demo<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<PartitionDemoCli, _>(
        std::iter::once("partition_demo".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let roster = match &cli.roster {
        Some(path) => read_roster(path)?,
        None => synthetic_roster(cli.synthetic_count, cli.seed),
    };

    let mut config = PartitionConfig::default();
    if let Some(budgets) = cli.budgets {
        config.budgets = budgets;
    }

    let checkpoint_dir = cli
        .checkpoint_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CHECKPOINT_DIR));
    println!(
        "Writing per-archetype checkpoints to {}",
        checkpoint_dir.display()
    );
    let sink = JsonCheckpointSink::open(&checkpoint_dir)?;

    let outcome = Partitioner::new(config).partition(&roster, &sink);

    let tally = partition_tally(&outcome, roster.len());
    println!(
        "Formed {} squads from {} records ({:.1}% of the roster claimed)",
        tally.total_squads,
        tally.records_total,
        tally.coverage * 100.0
    );
    for entry in &tally.per_archetype {
        println!(
            "  {:<22} {:>5} squads ({:.1}%)",
            entry.archetype.tag(),
            entry.squads,
            entry.share * 100.0
        );
    }

    if let Some(path) = cli.output {
        let payload = serde_json::to_vec_pretty(&outcome)?;
        fs::write(&path, payload)?;
        println!("Wrote final partition to {}", path.display());
    }

    Ok(())
}

/// Generate a deterministic synthetic roster for demos and tests.
///
/// Attribute codes are drawn uniformly from the canonical variant orderings,
/// so a fixed `(count, seed)` pair always produces the same roster.
pub fn synthetic_roster(count: usize, seed: u64) -> Vec<FaceRecord> {
    let mut rng = DeterministicRng::new(seed);
    (0..count)
        .map(|idx| {
            let x = rng.random_range(0.0..1920.0);
            let y = rng.random_range(0.0..1080.0);
            let side = rng.random_range(32.0..128.0);
            FaceRecord {
                id: format!("synthetic/face_{idx:05}.png"),
                bbox: [x, y, side, side],
                gender: ALL_GENDERS[rng.random_range(0..ALL_GENDERS.len())],
                emotion: ALL_EMOTIONS[rng.random_range(0..ALL_EMOTIONS.len())],
                age: ALL_AGE_BRACKETS[rng.random_range(0..ALL_AGE_BRACKETS.len())],
                race: ALL_RACES[rng.random_range(0..ALL_RACES.len())],
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
/// Small deterministic RNG (splitmix64) for reproducible demo rosters.
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64_internal(&mut self) -> u64 {
        let mut z = self.state.wrapping_add(0x9E3779B97F4A7C15);
        self.state = z;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

impl rand::RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64_internal() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u64_internal()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;
        while offset < dest.len() {
            let value = self.next_u64_internal();
            let bytes = value.to_le_bytes();
            let remaining = dest.len() - offset;
            let copy_len = remaining.min(bytes.len());
            dest[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
            offset += copy_len;
        }
    }
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let parsed = raw.parse::<usize>().map_err(|_| {
        format!(
            "Could not parse --synthetic-count value '{}' as a positive integer",
            raw
        )
    })?;
    if parsed == 0 {
        return Err("--synthetic-count must be greater than zero".to_string());
    }
    Ok(parsed)
}

fn parse_budget_secs_arg(raw: &str) -> Result<PassBudgets, String> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 3 {
        return Err("--budget-secs expects exactly 3 comma-separated values".to_string());
    }
    let mut secs = [0u64; 3];
    for (slot, part) in secs.iter_mut().zip(&parts) {
        *slot = part.trim().parse::<u64>().map_err(|_| {
            format!(
                "invalid budget '{}': must be a whole number of seconds",
                part.trim()
            )
        })?;
    }
    Ok(PassBudgets {
        distinct_age_emotion: std::time::Duration::from_secs(secs[0]),
        diversity_balance: std::time::Duration::from_secs(secs[1]),
        distinct_emotion: std::time::Duration::from_secs(secs[2]),
    })
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
