//! Text-to-tickets pipeline: prompt → completion → repair/parse → normalize.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::CompletionProvider;
use crate::tickets::models::Ticket;
use crate::tickets::normalize::normalize;
use crate::tickets::prompts::build_prompt;
use crate::tickets::repair::repair_and_parse;

/// Converts free-form text into normalized tickets with a single completion call.
///
/// All-or-nothing: any upstream or parse failure discards the whole batch.
pub async fn convert_text(
    text: &str,
    provider: &dyn CompletionProvider,
) -> Result<Vec<Ticket>, AppError> {
    let prompt = build_prompt(text);
    let completion = provider.generate_completion(&prompt).await?;
    debug!("Raw completion: {completion}");

    let records = repair_and_parse(&completion)?;
    let tickets = normalize(&records);

    info!(
        "Converted {} chars of text into {} tickets",
        text.len(),
        tickets.len()
    );
    Ok(tickets)
}
