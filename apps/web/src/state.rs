use std::sync::Arc;

use crate::provider::ResumeProvider;
use crate::routes::loader::NavigationTracker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable résumé source. Static mock by default; swap via RESUME_SOURCE.
    pub provider: Arc<dyn ResumeProvider>,
    /// Per-session navigation epochs backing the stale-response guard.
    pub navigation: NavigationTracker,
}

impl AppState {
    pub fn new(provider: Arc<dyn ResumeProvider>) -> Self {
        Self {
            provider,
            navigation: NavigationTracker::new(),
        }
    }
}
