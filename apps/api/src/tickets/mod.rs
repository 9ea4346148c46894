//! Text-to-tickets conversion.
//!
//! Pipeline:
//! 1. `prompts`: build the completion prompt around the user's text
//! 2. `llm_client`: one completion call, no retries
//! 3. `repair`: close the truncated array and parse it strictly
//! 4. `normalize`: default-fill every ticket field

pub mod convert;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod prompts;
pub mod repair;
