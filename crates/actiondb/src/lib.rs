//! Action database - strokes bound to actions
//!
//! This crate provides the platform-independent core of the stroke tools:
//! - Action model (shell commands, key/button synthesis, scroll, ignore)
//! - Stroke entries and the id-keyed action database
//! - Matching of incoming gestures by similarity score
//! - Versioned persistence with debounced saves
//!
//! The gesture comparison metric, input capture and any user interface
//! live outside this crate and plug in through the [`Comparator`],
//! [`Effects`] and [`Notifier`] traits.

pub mod actions;
pub mod matcher;
pub mod models;
pub mod storage;

pub use actions::{Action, ButtonInfo, Effects, Modifiers, SystemEffects};
pub use matcher::{
    Candidate, EXECUTE_THRESHOLD, Matcher, RELEVANCE_THRESHOLD, Ranking, Winner, WinnerId,
};
pub use models::{Comparator, Gesture, Point, Stroke, StrokeId, StrokeInfo};
pub use storage::{
    ActionDb, FileSnapshotStore, LogNotifier, MemorySnapshotStore, Notifier, PersistState,
    Persister, SaveOutcome, SaveTimer, SnapshotError, SnapshotStore, StrokeRef,
};
