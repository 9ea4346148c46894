use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::CompletionProvider;
use crate::state::AppState;
use crate::tickets::convert::convert_text;
use crate::tickets::models::Ticket;

const MISSING_KEY_MESSAGE: &str = "Anthropic API key not configured. Cannot process request.";

#[derive(Debug, Serialize)]
pub struct CreateTicketsResponse {
    pub tickets: Vec<Ticket>,
}

/// The configured completion provider, or a 500 when no credential was set.
fn require_provider(state: &AppState) -> Result<Arc<dyn CompletionProvider>, AppError> {
    state
        .llm
        .clone()
        .ok_or_else(|| AppError::ConfigurationMissing(MISSING_KEY_MESSAGE.to_string()))
}

/// Extracts the non-blank `text` field from a raw JSON request body.
fn extract_text(body: &[u8]) -> Result<String, AppError> {
    let parsed: Value = serde_json::from_slice(body)
        .map_err(|_| AppError::InvalidRequest("Invalid JSON body".to_string()))?;

    match parsed.get("text") {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.clone()),
        _ => Err(AppError::InvalidRequest(
            "No text provided or text is empty".to_string(),
        )),
    }
}

/// POST /api/v1/tickets/from-text
///
/// Body `{ "text": "..." }` → `{ "tickets": [...] }`.
pub async fn handle_create_from_text(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateTicketsResponse>, AppError> {
    let provider = require_provider(&state)?;
    let text = extract_text(&body)?;
    let tickets = convert_text(&text, provider.as_ref()).await?;
    Ok(Json(CreateTicketsResponse { tickets }))
}

/// Any non-POST method on the conversion paths.
/// The credential check still comes first.
pub async fn handle_method_not_allowed(State(state): State<AppState>) -> AppError {
    match require_provider(&state) {
        Ok(_) => AppError::MethodNotAllowed,
        Err(e) => e,
    }
}
