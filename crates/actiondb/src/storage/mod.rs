//! Action database storage
//!
//! The in-memory registry, its versioned snapshot format, the backing
//! stores snapshots are written to, and the persister that ties them
//! together with a debounced save.

mod action_db;
mod backend;
mod persister;
pub mod snapshot;
mod timing;

pub use action_db::{ActionDb, StrokeRef};
pub use backend::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore};
pub use persister::{LogNotifier, Notifier, PersistState, Persister, SaveOutcome};
pub use snapshot::SnapshotError;
pub use timing::SaveTimer;
