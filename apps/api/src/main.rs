use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use ticket_api::config::Config;
use ticket_api::llm_client::{self, CompletionProvider, LlmClient};
use ticket_api::logging::init_tracing;
use ticket_api::routes::build_router;
use ticket_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_tracing(env!("CARGO_CRATE_NAME"), &config.rust_log);

    info!("Starting ticket API v{}", env!("CARGO_PKG_VERSION"));

    let llm: Option<Arc<dyn CompletionProvider>> = match &config.anthropic_api_key {
        Some(key) => {
            let client: Arc<dyn CompletionProvider> = Arc::new(LlmClient::new(key.clone())?);
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            warn!("ANTHROPIC_API_KEY is not set; ticket conversion requests will fail");
            None
        }
    };

    let state = AppState { llm };

    // the board front-end calls this straight from the browser
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
