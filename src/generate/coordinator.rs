//! Regeneration coordination.
//!
//! Owns the idle/pending discipline around generative calls: at most one
//! request is in flight per coordinator, and a candidate schedule replaces
//! the stored one only after it decodes cleanly. Failure on any step
//! (transport, timeout, parse) leaves the schedule exactly as it was.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{info, warn};

use crate::error::{PlannerError, Result};
use crate::generate::parse::parse_schedule_response;
use crate::generate::provider::{GenerationRequest, GenerativeProvider};
use crate::schedule::Schedule;
use crate::store::ScheduleStore;

/// Ceiling on one generation attempt, over and above any transport timeout
/// the provider carries itself.
const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(120);

/// Drives schedule synthesis against a [`GenerativeProvider`] and applies
/// accepted candidates to the store as full replacements.
///
/// The pending flag is state, not a lock: a request arriving while another
/// is in flight is rejected with [`PlannerError::RegenerationPending`], not
/// queued. Store edits made while a call is in flight are legal; they are
/// overwritten if the call succeeds, since the candidate was drafted from
/// the schedule as it stood at call time.
pub struct Regenerator {
    provider: Arc<dyn GenerativeProvider>,
    store: ScheduleStore,
    pending: AtomicBool,
    attempt_timeout: Duration,
}

/// Clears the pending flag when a generation attempt ends, on every exit
/// path including panics.
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Regenerator {
    /// Create a coordinator over `provider` and `store`.
    pub fn new(provider: Arc<dyn GenerativeProvider>, store: ScheduleStore) -> Self {
        Self {
            provider,
            store,
            pending: AtomicBool::new(false),
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    /// Set the per-attempt timeout.
    #[must_use]
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Returns `true` while a generation call is in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Relaxed)
    }

    /// Synthesize a schedule from free-text requirement lines and store it,
    /// replacing the current schedule wholesale.
    ///
    /// # Errors
    /// Returns [`PlannerError::RegenerationPending`] when a call is already
    /// in flight, a provider error on transport failure or timeout, or a
    /// parse error when the response is not a schedule document. The store
    /// is untouched on every error.
    pub async fn generate(&self, requirements: Vec<String>) -> Result<Schedule> {
        self.run(GenerationRequest::from_requirements(requirements)).await
    }

    /// Revise the current schedule: the stored document is sent as the
    /// requirement and `change_request` describes the revision.
    ///
    /// # Errors
    /// Same failure modes as [`Regenerator::generate`].
    pub async fn regenerate(&self, change_request: &str) -> Result<Schedule> {
        let current = serde_json::to_string(&self.store.snapshot()?)
            .map_err(|e| PlannerError::Parse(format!("cannot serialize current schedule: {e}")))?;
        self.run(GenerationRequest::from_requirements(vec![current]).with_change(change_request))
            .await
    }

    async fn run(&self, request: GenerationRequest) -> Result<Schedule> {
        if self.pending.swap(true, Ordering::Relaxed) {
            warn!("generation request rejected: another is in flight");
            return Err(PlannerError::RegenerationPending);
        }
        let _guard = PendingGuard(&self.pending);

        let raw = tokio::time::timeout(self.attempt_timeout, self.provider.generate(&request))
            .await
            .map_err(|_| {
                PlannerError::Provider(format!(
                    "generation timed out after {}s",
                    self.attempt_timeout.as_secs()
                ))
            })??;

        let candidate = parse_schedule_response(&raw)?;

        info!(
            provider = self.provider.name(),
            events = candidate.len(),
            "applying generated schedule"
        );
        self.store.replace(candidate.clone())?;
        Ok(candidate)
    }
}
