pub mod array;
pub mod outcome;
pub mod request;

pub use array::{ArrayId, ArrayRecord, ArraySnapshot, OwnerId};
pub use outcome::{SortHistoryEntry, SortOutcome};
pub use request::{GenerateSpec, InsertPosition, InsertSpec, SliceSpec};
