//! Array commands
//!
//! Usage: heapsort array <create|list|show|update|delete|add|slice> ...

use clap::{Args, Subcommand};
use heapsort_core::model::{InsertSpec, SliceSpec};
use heapsort_engine::commands::array::ArraySource;
use heapsort_engine::commands::engine_command::EngineCommand;

use super::{CliResult, GlobalArgs, Session};

#[derive(Debug, Args)]
pub struct ArrayArgs {
    #[command(subcommand)]
    pub command: ArrayCommand,
}

#[derive(Debug, Subcommand)]
pub enum ArrayCommand {
    /// Store a new array from explicit elements or generated values
    Create(CreateArgs),
    /// List stored arrays, newest first
    List,
    /// Show one array
    Show(IdArg),
    /// Replace the elements of an array
    Update(UpdateArgs),
    /// Delete an array and its sort history
    Delete(IdArg),
    /// Insert one value into an array
    Add(AddArgs),
    /// Print part of an array without changing it
    Slice(SliceArgs),
}

#[derive(Debug, Args)]
pub struct IdArg {
    pub id: i64,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Comma-separated elements, e.g. 5,-3,8
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub elements: Vec<i32>,

    /// Number of values to generate when no elements are given
    #[arg(long)]
    pub size: Option<i64>,

    /// Smallest generated value (default 1)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i32>,

    /// Largest generated value (default 1000)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i32>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: i64,

    /// Comma-separated replacement elements
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub elements: Vec<i32>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    pub id: i64,

    #[arg(allow_negative_numbers = true)]
    pub value: i32,

    /// start, end or after
    #[arg(long, default_value = "end")]
    pub position: String,

    /// Index to insert after (required with --position after)
    #[arg(long, allow_negative_numbers = true)]
    pub index: Option<i64>,
}

#[derive(Debug, Args)]
pub struct SliceArgs {
    pub id: i64,

    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<i64>,
}

pub fn execute(args: ArrayArgs, global: &GlobalArgs) -> CliResult {
    let mut session = Session::open(global)?;
    let owner_id = session.owner_id();

    let cmd = match args.command {
        ArrayCommand::Create(a) => EngineCommand::CreateArray {
            owner_id,
            source: ArraySource::from_parts(Some(a.elements), a.size, a.min, a.max)?,
        },
        ArrayCommand::List => EngineCommand::ListArrays { owner_id },
        ArrayCommand::Show(a) => EngineCommand::GetArray {
            owner_id,
            array_id: a.id,
        },
        ArrayCommand::Update(a) => EngineCommand::UpdateArray {
            owner_id,
            array_id: a.id,
            elements: a.elements.into(),
        },
        ArrayCommand::Delete(a) => EngineCommand::DeleteArray {
            owner_id,
            array_id: a.id,
        },
        ArrayCommand::Add(a) => EngineCommand::AddElement {
            owner_id,
            array_id: a.id,
            insert: InsertSpec::parse(a.value, &a.position, a.index)?,
        },
        ArrayCommand::Slice(a) => EngineCommand::SliceArray {
            owner_id,
            array_id: a.id,
            bounds: SliceSpec::new(a.start, a.end),
        },
    };

    let result = session.run(cmd)?;
    session.emit(&result)
}
