// src/web/state.rs
// Web server state management

use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::avatar::AvatarRequester;
use crate::vision::PhotoAnalyzer;

/// Shared application state. Everything here is read-only per request.
#[derive(Clone)]
pub struct AppState {
    /// Provider client plus poll and failure policies
    pub avatars: Arc<AvatarRequester>,

    /// Optional photo description step
    pub analyzer: Option<Arc<dyn PhotoAnalyzer>>,

    /// Unknown answer combinations get answer-derived traits
    pub describe_fallback: bool,

    /// Cancelled on shutdown; each request polls under a child token
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(avatars: AvatarRequester) -> Self {
        Self {
            avatars: Arc::new(avatars),
            analyzer: None,
            describe_fallback: false,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_analyzer(mut self, analyzer: Option<Arc<dyn PhotoAnalyzer>>) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn with_describe_fallback(mut self, enabled: bool) -> Self {
        self.describe_fallback = enabled;
        self
    }

    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }
}
