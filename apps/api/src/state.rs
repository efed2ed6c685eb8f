use std::sync::Arc;

use crate::config::Config;
use crate::extraction::CvExtractor;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable document-understanding backend. Production: `GeminiExtractor`;
    /// tests swap in a mock.
    pub extractor: Arc<dyn CvExtractor>,
    pub config: Config,
}
