pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::tickets::handlers;

pub const TICKETS_FROM_TEXT_PATH: &str = "/api/v1/tickets/from-text";
/// Path board front-ends used when this ran as a Netlify function.
pub const LEGACY_FUNCTION_PATH: &str = "/.netlify/functions/create-tickets-from-text";

pub fn build_router(state: AppState) -> Router {
    let from_text = post(handlers::handle_create_from_text)
        .fallback(handlers::handle_method_not_allowed);

    Router::new()
        .route("/health", get(health::health_handler))
        .route(TICKETS_FROM_TEXT_PATH, from_text.clone())
        .route(LEGACY_FUNCTION_PATH, from_text)
        .with_state(state)
}
