//! Route loader: the one async boundary in front of the résumé page.
//!
//! Each navigation by a session takes a fresh epoch. A résumé that resolves
//! after its session has navigated again belongs to an abandoned view and is
//! dropped as `StaleNavigation` instead of being rendered.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;
use uuid::Uuid;

use crate::errors::ProviderError;
use crate::models::resume::Resume;
use crate::provider::{fetch_resume, ResumeProvider};

/// Upper bound on remembered sessions; the table is reset when it fills.
const MAX_TRACKED_SESSIONS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTicket {
    session: Uuid,
    epoch: u64,
}

#[derive(Clone, Default)]
pub struct NavigationTracker {
    inner: Arc<TrackerInner>,
}

#[derive(Default)]
struct TrackerInner {
    // Global counter, so an epoch is never reused even after a reset.
    next_epoch: AtomicU64,
    latest: Mutex<HashMap<Uuid, u64>>,
}

impl NavigationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a navigation by `session`, superseding any earlier ticket it holds.
    pub fn navigate(&self, session: Uuid) -> NavigationTicket {
        let epoch = self.inner.next_epoch.fetch_add(1, Ordering::Relaxed) + 1;
        let mut latest = self.latest();
        if latest.len() >= MAX_TRACKED_SESSIONS && !latest.contains_key(&session) {
            debug!("Navigation table full, resetting");
            latest.clear();
        }
        latest.insert(session, epoch);
        NavigationTicket { session, epoch }
    }

    /// A ticket is current until its session navigates again. Sessions
    /// forgotten by a reset count as current.
    pub fn is_current(&self, ticket: &NavigationTicket) -> bool {
        self.latest()
            .get(&ticket.session)
            .map_or(true, |epoch| *epoch == ticket.epoch)
    }

    /// Passes `result` through for a current ticket and replaces it with
    /// `StaleNavigation` otherwise.
    pub fn settle<T>(
        &self,
        ticket: &NavigationTicket,
        result: Result<T, ProviderError>,
    ) -> Result<T, ProviderError> {
        if self.is_current(ticket) {
            result
        } else {
            debug!(
                "Discarding résumé resolution for session {} (epoch {})",
                ticket.session, ticket.epoch
            );
            Err(ProviderError::StaleNavigation)
        }
    }

    fn latest(&self) -> MutexGuard<'_, HashMap<Uuid, u64>> {
        self.inner
            .latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Resolves the résumé for one navigation: one provider call, then the stale check.
pub async fn load_resume(
    tracker: &NavigationTracker,
    ticket: NavigationTicket,
    provider: &dyn ResumeProvider,
) -> Result<Resume, ProviderError> {
    let result = fetch_resume(provider).await;
    tracker.settle(&ticket, result)
}
