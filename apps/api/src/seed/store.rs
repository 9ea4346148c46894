use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::seed::catalog::CatalogTicket;

const TICKETS_TABLE: &str = "tickets";
/// Filter that matches every real row, used to clear the table.
const NIL_ID_FILTER: &str = "neq.00000000-0000-0000-0000-000000000000";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<String>,
        hint: Option<String>,
    },
}

/// PostgREST error body.
#[derive(Debug, Default, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    message: String,
    details: Option<String>,
    hint: Option<String>,
}

impl StoreError {
    fn from_response(status: u16, body: String) -> Self {
        let parsed = serde_json::from_str::<PostgrestError>(&body).unwrap_or_default();
        let message = if parsed.message.is_empty() {
            body
        } else {
            parsed.message
        };
        StoreError::Api {
            status,
            message,
            details: parsed.details,
            hint: parsed.hint,
        }
    }

    /// Logs the error with whatever extra context the store supplied.
    pub fn log(&self, context: &str) {
        error!("{context}: {self}");
        if let StoreError::Api { details, hint, .. } = self {
            if let Some(details) = details {
                error!("Details: {details}");
            }
            if let Some(hint) = hint {
                error!("Hint: {hint}");
            }
        }
    }
}

/// Snake-case row shape of the `tickets` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: String,
    pub category: String,
    pub section: String,
    pub is_subtask: bool,
    pub parent_id: Option<Uuid>,
    pub created_at: String,
    pub updated_at: String,
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T09:30:00.000Z`.
fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<&CatalogTicket> for TicketRow {
    fn from(ticket: &CatalogTicket) -> Self {
        TicketRow {
            id: ticket.id,
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            status: ticket.status.as_str().to_string(),
            category: ticket.category.clone(),
            section: ticket.section.clone(),
            is_subtask: ticket.is_subtask,
            parent_id: ticket.parent_id,
            created_at: iso_timestamp(&ticket.created_at),
            updated_at: iso_timestamp(&ticket.updated_at),
        }
    }
}

/// Persistence seam for the seed process.
#[async_trait]
pub trait TicketStore: Send + Sync {
    async fn delete_all_tickets(&self) -> Result<(), StoreError>;

    /// Inserts all rows in one batch, returning how many the store reports inserted.
    async fn insert_tickets(&self, rows: &[TicketRow]) -> Result<usize, StoreError>;

    /// Clears the table, then inserts `rows`.
    ///
    /// Not atomic: a delete failure is logged and the insert still runs, and
    /// an insert failure after a successful delete leaves the table empty.
    async fn replace_all_tickets(&self, rows: &[TicketRow]) -> Result<usize, StoreError> {
        info!("Deleting existing tickets...");
        match self.delete_all_tickets().await {
            Ok(()) => info!("Existing tickets deleted (or table was empty)"),
            Err(e) => e.log("Error deleting existing tickets"),
        }

        info!("Inserting {} tickets...", rows.len());
        self.insert_tickets(rows).await
    }
}

/// `TicketStore` backed by a Supabase project's PostgREST endpoint.
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: &str, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TICKETS_TABLE)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::from_response(status.as_u16(), body))
    }
}

#[async_trait]
impl TicketStore for SupabaseStore {
    async fn delete_all_tickets(&self) -> Result<(), StoreError> {
        let response = self
            .authorized(self.client.delete(self.table_url()))
            .query(&[("id", NIL_ID_FILTER)])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn insert_tickets(&self, rows: &[TicketRow]) -> Result<usize, StoreError> {
        let response = self
            .authorized(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(rows)
            .send()
            .await?;
        let inserted: Vec<serde_json::Value> = Self::check(response).await?.json().await?;
        Ok(inserted.len())
    }
}
