pub mod generator;
pub mod mutator;
pub mod recorder;
pub mod repository;
pub mod sort_engine;
pub mod store;

pub use recorder::SortHistoryRecord;
pub use repository::ArrayRepository;
pub use store::MemoryStore;
