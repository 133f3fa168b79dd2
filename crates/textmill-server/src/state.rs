//! Server state management.

use std::sync::Arc;

use textmill_extractors::ExtractorRegistry;

/// Shared application state.
///
/// Assembled once at startup and never mutated afterwards; handlers receive
/// it by cheap clone.
#[derive(Clone)]
pub struct AppState {
    /// File-based extractors, keyed by document format.
    pub extractors: Arc<ExtractorRegistry>,
}

impl AppState {
    /// Create application state with the default extractor set.
    pub fn new() -> Self {
        Self {
            extractors: Arc::new(ExtractorRegistry::with_defaults()),
        }
    }

    /// Create application state with a custom extractor registry.
    pub fn with_registry(registry: ExtractorRegistry) -> Self {
        Self {
            extractors: Arc::new(registry),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
