//! Ticket normalizer: fills every missing ticket field with its default.
//!
//! Defaulting is by JavaScript-style truthiness, matching what board clients
//! already receive: `null`, `false`, `0` and `""` are replaced exactly like an
//! absent key. This means an intentional `isSubtask: false` is harmless, but a
//! `status: 0` or `title: ""` from the model is silently overwritten. Known
//! quirk, kept on purpose; a strict null check would change the output.

use serde_json::Value;

use crate::tickets::models::{Ticket, TicketStatus};

/// Title given to tickets the model left untitled.
pub const UNTITLED_TICKET: &str = "Untitled Ticket";
pub const DEFAULT_CATEGORY: &str = "General";

/// JavaScript truthiness for a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `record[key] || default`
fn field_or(record: &Value, key: &str, default: Value) -> Value {
    match record.get(key) {
        Some(v) if is_truthy(v) => v.clone(),
        _ => default,
    }
}

/// Normalizes one untyped record. Non-object records yield an all-defaults ticket.
pub fn normalize_record(record: &Value) -> Ticket {
    Ticket {
        id: record.get("id").cloned(),
        title: field_or(record, "title", Value::from(UNTITLED_TICKET)),
        description: field_or(record, "description", Value::from("")),
        status: field_or(record, "status", Value::from(TicketStatus::Todo.as_str())),
        category: field_or(record, "category", Value::from(DEFAULT_CATEGORY)),
        section: field_or(record, "section", Value::from("")),
        is_subtask: field_or(record, "isSubtask", Value::Bool(false)),
        parent_id: field_or(record, "parentId", Value::Null),
    }
}

/// Order-preserving one-to-one mapping of records to tickets.
///
/// No id generation, no deduplication, no parent/child link checks.
pub fn normalize(records: &[Value]) -> Vec<Ticket> {
    records.iter().map(normalize_record).collect()
}
