// Todolist - single-screen to-do list core: task store, draft validation, snapshots

pub mod draft;
pub mod ids;
pub mod models;
pub mod snapshot;
pub mod store;

// Re-export main types for convenience
pub use draft::{DraftValidation, MAX_LABEL_CHARS, validate_draft};
pub use ids::{IdGenerator, RandomIds, SequentialIds, TaskId};
pub use models::{Task, sample_tasks};
pub use snapshot::{RestoreError, SNAPSHOT_VERSION, Snapshot};
pub use store::TaskListStore;
