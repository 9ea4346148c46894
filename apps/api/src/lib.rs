pub mod config;
pub mod errors;
pub mod llm_client;
pub mod logging;
pub mod routes;
pub mod seed;
pub mod state;
pub mod tickets;
