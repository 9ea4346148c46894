//! Seeds the Supabase `tickets` table with the fixed demo backlog.
//!
//! Exits non-zero only when configuration is missing. Store failures are
//! logged and the process still exits normally.

use anyhow::Result;
use tracing::{error, info};

use ticket_api::config::SeedConfig;
use ticket_api::logging::init_tracing;
use ticket_api::seed::runner::run_seed;
use ticket_api::seed::store::SupabaseStore;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(env!("CARGO_CRATE_NAME"), "info");

    let config = match SeedConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Supabase URL and anon key are required: {e:#}");
            error!(
                "Make sure {} and {} are set in your environment or .env file.",
                SeedConfig::URL_VAR,
                SeedConfig::KEY_VAR
            );
            std::process::exit(1);
        }
    };

    let store = SupabaseStore::new(&config.supabase_url, config.supabase_anon_key);

    // the error was already logged with store details
    let _ = run_seed(&store).await;

    info!("Seeding process finished.");
    Ok(())
}
