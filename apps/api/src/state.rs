use std::sync::Arc;

use crate::config::Config;
use crate::dataset::SurveyDataset;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Reference tables, loaded once at startup and immutable afterwards.
    /// Handlers on every worker read through the same `Arc` without locking;
    /// a future hot-reload would swap the whole `Arc`, never edit in place.
    pub dataset: Arc<SurveyDataset>,
    pub config: Config,
}
