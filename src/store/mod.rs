//! Canonical schedule ownership and persistence.
//!
//! [`ScheduleStore`] holds the single authoritative copy of the schedule.
//! Every mutation updates memory first and then writes the serialized
//! document through the configured [`StorageBackend`]; a failed write is
//! logged and does not roll the mutation back, so reads within the session
//! always observe the latest edit.

pub mod backend;

pub use backend::{FileStorage, MemoryStorage, StorageBackend};

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{error, warn};

use crate::error::{PlannerError, Result};
use crate::schedule::{Schedule, ScheduleEvent};

/// Storage key the schedule document lives under.
pub const SCHEDULE_KEY: &str = "schedule";

/// Handle to the canonical in-memory schedule.
///
/// Cloning yields another handle to the same state, so the editor and the
/// regeneration coordinator can share one store.
#[derive(Clone)]
pub struct ScheduleStore {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    schedule: Schedule,
    backend: Box<dyn StorageBackend>,
}

impl ScheduleStore {
    /// Open a store over `backend`, loading any previously persisted
    /// schedule. An absent, unreadable, or unparseable stored document
    /// yields an empty schedule rather than an error.
    pub fn open<B: StorageBackend + 'static>(backend: B) -> Self {
        let schedule = read_persisted(&backend);
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                schedule,
                backend: Box::new(backend),
            })),
        }
    }

    /// Clone of the current schedule.
    ///
    /// # Errors
    /// Returns a storage error if the store lock is poisoned.
    pub fn snapshot(&self) -> Result<Schedule> {
        Ok(self.lock()?.schedule.clone())
    }

    /// Number of events currently held.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.schedule.len())
    }

    /// Returns `true` when the schedule holds no events.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.schedule.is_empty())
    }

    /// Copy of the event stored under `id`, if any.
    pub fn get(&self, id: &str) -> Result<Option<ScheduleEvent>> {
        Ok(self.lock()?.schedule.get(id).cloned())
    }

    /// Insert or overwrite one event, then persist.
    pub fn upsert(&self, event: ScheduleEvent) -> Result<()> {
        let mut inner = self.lock()?;
        inner.schedule.insert(event);
        inner.persist();
        Ok(())
    }

    /// Remove the event stored under `id`, then persist. Returns whether an
    /// event was actually removed; removing an absent id is a no-op.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let mut inner = self.lock()?;
        let removed = inner.schedule.remove(id).is_some();
        if removed {
            inner.persist();
        }
        Ok(removed)
    }

    /// Replace the whole schedule, then persist. Events absent from
    /// `schedule` are gone after this call.
    pub fn replace(&self, schedule: Schedule) -> Result<()> {
        let mut inner = self.lock()?;
        inner.schedule = schedule;
        inner.persist();
        Ok(())
    }

    /// Drop every event, then persist.
    pub fn clear(&self) -> Result<()> {
        self.replace(Schedule::new())
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>> {
        self.inner
            .lock()
            .map_err(|_| PlannerError::Storage("schedule store lock poisoned".to_owned()))
    }
}

impl StoreInner {
    /// Write the current schedule through the backend. Failures are logged
    /// and swallowed; the in-memory schedule stays authoritative.
    fn persist(&mut self) {
        let document = match serde_json::to_string(&self.schedule) {
            Ok(document) => document,
            Err(e) => {
                error!("cannot serialize schedule for persistence: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.set(SCHEDULE_KEY, &document) {
            error!("cannot persist schedule: {e}");
        }
    }
}

fn read_persisted(backend: &dyn StorageBackend) -> Schedule {
    let raw = match backend.get(SCHEDULE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Schedule::new(),
        Err(e) => {
            warn!("cannot read persisted schedule, starting empty: {e}");
            return Schedule::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(schedule) => schedule,
        Err(e) => {
            warn!("persisted schedule does not parse, starting empty: {e}");
            Schedule::new()
        }
    }
}
