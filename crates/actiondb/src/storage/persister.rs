//! Loading and debounced saving of the action database
//!
//! The persister owns the backing store and the save timer. The event
//! loop calls [`Persister::poll`] on every tick; changes arm the timer and
//! a full snapshot is written once it expires. A failing save warns the
//! user once, until a later save succeeds.

use chrono::{DateTime, Utc};
use log::{debug, error, warn};

use super::snapshot;
use super::{ActionDb, SaveTimer, SnapshotStore};
use crate::models::Gesture;

/// Receives user-visible error messages
pub trait Notifier {
    fn notify_error(&self, message: &str);
}

impl<F: Fn(&str)> Notifier for F {
    fn notify_error(&self, message: &str) {
        self(message)
    }
}

/// Notifier that only writes to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, message: &str) {
        error!("{}", message);
    }
}

/// Lifecycle of the persister
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistState {
    /// Nothing has been loaded yet
    Loading,
    /// Loaded, no save scheduled
    Ready,
    /// A save is scheduled
    Saving,
}

/// Result of a save that [`Persister::poll`] or [`Persister::flush`] performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { entries: usize },
    Failed,
}

/// Loads the database once and saves it after changes settle
pub struct Persister<S, N> {
    store: S,
    notifier: N,
    timer: SaveTimer,
    state: PersistState,
    good_state: bool,
    last_saved_at: Option<DateTime<Utc>>,
    remedy: String,
}

impl<S: SnapshotStore, N: Notifier> Persister<S, N> {
    pub fn new(store: S, notifier: N, timer: SaveTimer) -> Self {
        Self {
            store,
            notifier,
            timer,
            state: PersistState::Loading,
            good_state: true,
            last_saved_at: None,
            remedy: String::new(),
        }
    }

    /// Extra advice appended to the save-failure notification
    pub fn with_remedy(mut self, remedy: impl Into<String>) -> Self {
        self.remedy = remedy.into();
        self
    }

    /// Read the database from the store.
    ///
    /// A missing or unreadable store yields an empty database; startup
    /// never fails because of it.
    pub fn load<G: Gesture>(&mut self) -> ActionDb<G> {
        self.state = PersistState::Ready;

        let text = match self.store.read() {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("No action database at {}", self.store.location());
                return ActionDb::new();
            }
            Err(e) => {
                error!("Couldn't read action database: {:#}", e);
                return ActionDb::new();
            }
        };

        match snapshot::decode(&text) {
            Ok(db) => {
                debug!("Loaded {} actions.", db.len());
                db
            }
            Err(e) => {
                error!(
                    "Couldn't read action database {}: {}",
                    self.store.location(),
                    e
                );
                ActionDb::new()
            }
        }
    }

    /// Drive the save timer.
    ///
    /// Arms the timer if the database changed since the last call and
    /// writes a snapshot once the timer expires.
    pub fn poll<G: Gesture>(
        &mut self,
        db: &mut ActionDb<G>,
        now: DateTime<Utc>,
    ) -> Option<SaveOutcome> {
        if db.take_dirty() {
            self.timer.arm(now);
            self.state = PersistState::Saving;
        }
        if !self.timer.fire(now) {
            return None;
        }
        self.state = PersistState::Ready;
        Some(self.save(db))
    }

    /// Save right away if anything is pending (e.g. at shutdown)
    pub fn flush<G: Gesture>(&mut self, db: &mut ActionDb<G>) -> Option<SaveOutcome> {
        let dirty = db.take_dirty();
        if !dirty && !self.timer.is_armed() {
            return None;
        }
        self.timer.cancel();
        self.state = PersistState::Ready;
        Some(self.save(db))
    }

    /// Write a full snapshot of the database now
    pub fn save<G: Gesture>(&mut self, db: &ActionDb<G>) -> SaveOutcome {
        let result = snapshot::encode(db)
            .map_err(anyhow::Error::from)
            .and_then(|text| self.store.write(&text));

        match result {
            Ok(()) => {
                debug!("Saved {} actions.", db.len());
                self.good_state = true;
                self.last_saved_at = Some(Utc::now());
                SaveOutcome::Saved { entries: db.len() }
            }
            Err(e) => {
                error!("Couldn't save action database: {:#}", e);
                if self.good_state {
                    self.good_state = false;
                    self.notifier.notify_error(&self.failure_message());
                } else {
                    warn!("Save still failing, not notifying again");
                }
                SaveOutcome::Failed
            }
        }
    }

    fn failure_message(&self) -> String {
        let mut message = format!(
            "Couldn't save actions. Your changes will be lost.\n\
             Make sure that {} is writable.",
            self.store.location()
        );
        if !self.remedy.is_empty() {
            message.push('\n');
            message.push_str(&self.remedy);
        }
        message
    }

    /// False after a failed save, until a save succeeds again
    pub fn is_good(&self) -> bool {
        self.good_state
    }

    pub fn state(&self) -> PersistState {
        self.state
    }

    pub fn pending_deadline(&self) -> Option<DateTime<Utc>> {
        self.timer.deadline()
    }

    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.last_saved_at
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
