//! Single dispatch point for front-ends.

use heapsort_core::errors::ExResult;
use heapsort_core::model::{
    ArrayId, ArrayRecord, ArraySnapshot, GenerateSpec, InsertSpec, OwnerId, SliceSpec,
    SortHistoryEntry, SortOutcome,
};
use heapsort_core::ArrayRepository;
use heapsort_core_types::RequestContext;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::commands::array::{self, ArraySource};
use crate::commands::sort::{self, SortSource};

/// Everything a front-end can ask the engine to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineCommand {
    CreateArray {
        owner_id: OwnerId,
        source: ArraySource,
    },
    GetArray {
        owner_id: OwnerId,
        array_id: ArrayId,
    },
    ListArrays {
        owner_id: OwnerId,
    },
    UpdateArray {
        owner_id: OwnerId,
        array_id: ArrayId,
        elements: ArraySnapshot,
    },
    DeleteArray {
        owner_id: OwnerId,
        array_id: ArrayId,
    },
    AddElement {
        owner_id: OwnerId,
        array_id: ArrayId,
        insert: InsertSpec,
    },
    SliceArray {
        owner_id: OwnerId,
        array_id: ArrayId,
        bounds: SliceSpec,
    },
    Sort {
        owner_id: OwnerId,
        source: SortSource,
    },
    SortPreview {
        spec: GenerateSpec,
    },
    SortHistory {
        owner_id: OwnerId,
    },
}

impl EngineCommand {
    /// Stable command name, used as the span's `command` field
    pub fn name(&self) -> &'static str {
        match self {
            EngineCommand::CreateArray { .. } => "create_array",
            EngineCommand::GetArray { .. } => "get_array",
            EngineCommand::ListArrays { .. } => "list_arrays",
            EngineCommand::UpdateArray { .. } => "update_array",
            EngineCommand::DeleteArray { .. } => "delete_array",
            EngineCommand::AddElement { .. } => "add_element",
            EngineCommand::SliceArray { .. } => "slice_array",
            EngineCommand::Sort { .. } => "sort_and_record",
            EngineCommand::SortPreview { .. } => "sort_preview",
            EngineCommand::SortHistory { .. } => "sort_history",
        }
    }
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineCommandResult {
    /// Created, fetched, updated or extended array
    Array(ArrayRecord),
    Arrays(Vec<ArrayRecord>),
    Deleted { array_id: ArrayId },
    Slice(ArraySnapshot),
    Sorted(SortOutcome),
    History(Vec<SortHistoryEntry>),
}

/// Apply an engine command inside a span carrying the request id.
///
/// # Errors
///
/// Whatever the underlying handler returns, stamped with
/// `ctx.request_id`.
pub fn apply_engine_command(
    cmd: EngineCommand,
    repo: &mut dyn ArrayRepository,
    rng: &mut dyn RngCore,
    ctx: &RequestContext,
) -> ExResult<EngineCommandResult> {
    let span = tracing::info_span!(
        "engine_command",
        command = cmd.name(),
        request_id = %ctx.request_id,
        trace_id = ctx.trace_id.as_ref().map(|t| t.as_str()),
    );
    let _guard = span.enter();

    dispatch(cmd, repo, rng).map_err(|e| e.with_request_id(ctx.request_id.clone()))
}

fn dispatch(
    cmd: EngineCommand,
    repo: &mut dyn ArrayRepository,
    rng: &mut dyn RngCore,
) -> ExResult<EngineCommandResult> {
    match cmd {
        EngineCommand::CreateArray { owner_id, source } => {
            array::create_array(owner_id, source, repo, rng).map(EngineCommandResult::Array)
        }
        EngineCommand::GetArray { owner_id, array_id } => {
            array::get_array(owner_id, array_id, repo).map(EngineCommandResult::Array)
        }
        EngineCommand::ListArrays { owner_id } => {
            array::list_arrays(owner_id, repo).map(EngineCommandResult::Arrays)
        }
        EngineCommand::UpdateArray {
            owner_id,
            array_id,
            elements,
        } => array::update_array(owner_id, array_id, elements, repo)
            .map(EngineCommandResult::Array),
        EngineCommand::DeleteArray { owner_id, array_id } => {
            array::delete_array(owner_id, array_id, repo)?;
            Ok(EngineCommandResult::Deleted { array_id })
        }
        EngineCommand::AddElement {
            owner_id,
            array_id,
            insert,
        } => array::add_element(owner_id, array_id, insert, repo).map(EngineCommandResult::Array),
        EngineCommand::SliceArray {
            owner_id,
            array_id,
            bounds,
        } => array::slice_array(owner_id, array_id, bounds, repo).map(EngineCommandResult::Slice),
        EngineCommand::Sort { owner_id, source } => {
            sort::sort_and_record(owner_id, source, repo, rng).map(EngineCommandResult::Sorted)
        }
        EngineCommand::SortPreview { spec } => {
            sort::sort_preview(spec, rng).map(EngineCommandResult::Sorted)
        }
        EngineCommand::SortHistory { owner_id } => {
            sort::sort_history(owner_id, repo).map(EngineCommandResult::History)
        }
    }
}
