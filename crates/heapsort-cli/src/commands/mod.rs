//! Subcommands and the plumbing they share

pub mod array;
pub mod sort;

use clap::{Args, ValueEnum};
use heapsort_core::errors::ExResult;
use heapsort_core::logging_facility::Profile;
use heapsort_core::model::{ArrayRecord, SortHistoryEntry, SortOutcome};
use heapsort_core_types::RequestContext;
use heapsort_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use heapsort_store::SqliteArrayRepo;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rusqlite::Connection;
use serde::Serialize;
use std::path::PathBuf;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Options accepted by every subcommand
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// SQLite database file
    #[arg(
        long,
        global = true,
        env = "HEAPSORT_DB",
        default_value = ".heapsort/store.db"
    )]
    pub db: PathBuf,

    /// Owner whose arrays and history are used
    #[arg(long, global = true, env = "HEAPSORT_OWNER", default_value_t = 1)]
    pub owner: i64,

    /// Seed for array generation (random when omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs to stderr with this profile
    #[arg(long, global = true, value_enum)]
    pub log: Option<LogProfile>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogProfile {
    Dev,
    Prod,
}

impl From<LogProfile> for Profile {
    fn from(p: LogProfile) -> Self {
        match p {
            LogProfile::Dev => Profile::Development,
            LogProfile::Prod => Profile::Production,
        }
    }
}

/// Open database plus RNG for one CLI invocation
pub struct Session {
    conn: Connection,
    rng: ChaCha8Rng,
    owner_id: i64,
    json: bool,
}

impl Session {
    /// Open the database and bring its schema up to date
    pub fn open(global: &GlobalArgs) -> ExResult<Self> {
        let mut conn = heapsort_store::db::open(&global.db)?;
        heapsort_store::migrations::apply_migrations(&mut conn)?;

        let rng = match global.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(Self {
            conn,
            rng,
            owner_id: global.owner,
            json: global.json,
        })
    }

    pub fn owner_id(&self) -> i64 {
        self.owner_id
    }

    pub fn run(&mut self, cmd: EngineCommand) -> ExResult<EngineCommandResult> {
        let mut repo = SqliteArrayRepo::new(&self.conn);
        apply_engine_command(cmd, &mut repo, &mut self.rng, &RequestContext::new())
    }

    /// Print a command result in the selected format
    pub fn emit(&self, result: &EngineCommandResult) -> CliResult {
        if self.json {
            return match result {
                EngineCommandResult::Array(rec) => print_json(rec),
                EngineCommandResult::Arrays(recs) => print_json(recs),
                EngineCommandResult::Deleted { array_id } => {
                    print_json(&serde_json::json!({ "deleted": array_id }))
                }
                EngineCommandResult::Slice(elements) => print_json(elements),
                EngineCommandResult::Sorted(outcome) => print_json(outcome),
                EngineCommandResult::History(entries) => print_json(entries),
            };
        }

        match result {
            EngineCommandResult::Array(rec) => print_record(rec),
            EngineCommandResult::Arrays(recs) => {
                if recs.is_empty() {
                    println!("No arrays.");
                }
                for rec in recs {
                    println!("{}\t{} elements\t{}", rec.id, rec.elements.len(), rec.elements);
                }
            }
            EngineCommandResult::Deleted { array_id } => println!("Deleted array {}", array_id),
            EngineCommandResult::Slice(elements) => println!("{}", elements),
            EngineCommandResult::Sorted(outcome) => print_outcome(outcome),
            EngineCommandResult::History(entries) => {
                if entries.is_empty() {
                    println!("No sort history.");
                }
                for entry in entries {
                    print_history_entry(entry);
                }
            }
        }
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_record(rec: &ArrayRecord) {
    println!("Array {}:", rec.id);
    println!("  elements: {}", rec.elements);
    println!("  created_at: {}", rec.created_at.to_rfc3339());
    println!("  updated_at: {}", rec.updated_at.to_rfc3339());
}

fn print_outcome(outcome: &SortOutcome) {
    println!("Sorted {} elements:", outcome.sorted.len());
    println!("  original: {}", outcome.original);
    println!("  sorted: {}", outcome.sorted);
    println!("  execution_time_ms: {}", outcome.execution_time_ms);
}

fn print_history_entry(entry: &SortHistoryEntry) {
    let array = entry
        .array_id
        .map_or_else(|| "-".to_string(), |id| id.to_string());
    println!(
        "#{} array={} {}ms at {}: {} -> {}",
        entry.id,
        array,
        entry.execution_time_ms,
        entry.sorted_at.to_rfc3339(),
        entry.original,
        entry.sorted
    );
}
