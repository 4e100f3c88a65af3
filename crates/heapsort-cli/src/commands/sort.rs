//! Sort commands
//!
//! Usage: heapsort sort <run|preview|history> ...

use clap::{Args, Subcommand};
use heapsort_core::model::GenerateSpec;
use heapsort_engine::commands::engine_command::EngineCommand;
use heapsort_engine::commands::sort::SortSource;

use super::{CliResult, GlobalArgs, Session};

#[derive(Debug, Args)]
pub struct SortArgs {
    #[command(subcommand)]
    pub command: SortCommand,
}

#[derive(Debug, Subcommand)]
pub enum SortCommand {
    /// Sort a stored or generated array and record the outcome
    Run(RunArgs),
    /// Sort a generated array without recording it
    Preview(GenerateArgs),
    /// Show recorded sorts, newest first
    History,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Stored array to sort
    #[arg(long, conflicts_with = "size")]
    pub id: Option<i64>,

    #[command(flatten)]
    pub generate: OptionalGenerateArgs,
}

#[derive(Debug, Args)]
pub struct OptionalGenerateArgs {
    /// Number of values to generate
    #[arg(long)]
    pub size: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i32>,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of values to generate
    #[arg(long)]
    pub size: i64,

    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i32>,
}

pub fn execute(args: SortArgs, global: &GlobalArgs) -> CliResult {
    let cmd = match args.command {
        SortCommand::Run(a) => {
            let source = match (a.id, a.generate.size) {
                (Some(id), _) => SortSource::Stored(id),
                (None, Some(size)) => SortSource::Generated(GenerateSpec::from_options(
                    size,
                    a.generate.min,
                    a.generate.max,
                )),
                (None, None) => return Err("Must specify either --id or --size".into()),
            };
            EngineCommand::Sort {
                owner_id: global.owner,
                source,
            }
        }
        SortCommand::Preview(a) => EngineCommand::SortPreview {
            spec: GenerateSpec::from_options(a.size, a.min, a.max),
        },
        SortCommand::History => EngineCommand::SortHistory {
            owner_id: global.owner,
        },
    };

    let mut session = Session::open(global)?;
    let result = session.run(cmd)?;
    session.emit(&result)
}
