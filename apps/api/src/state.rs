use std::sync::Arc;

use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when `ANTHROPIC_API_KEY` is unset; conversion requests then fail with a 500.
    pub llm: Option<Arc<dyn CompletionProvider>>,
}
