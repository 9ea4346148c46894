use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle column a ticket sits in on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TicketStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Todo => "todo",
            TicketStatus::InProgress => "inProgress",
            TicketStatus::Done => "done",
        }
    }
}

/// A ticket as returned by the conversion endpoint.
///
/// Fields hold raw JSON values because the model's output is only
/// default-filled, never type-checked: a numeric `title` stays numeric.
/// `id` is `None` when the model omitted it and is then left out of the
/// serialized object entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub title: Value,
    pub description: Value,
    pub status: Value,
    pub category: Value,
    pub section: Value,
    pub is_subtask: Value,
    pub parent_id: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_serializes_camel_case() {
        assert_eq!(
            serde_json::to_value(TicketStatus::InProgress).unwrap(),
            json!("inProgress")
        );
        assert_eq!(TicketStatus::default().as_str(), "todo");
    }

    #[test]
    fn test_ticket_without_id_omits_key() {
        let ticket = Ticket {
            id: None,
            title: json!("A"),
            description: json!(""),
            status: json!("todo"),
            category: json!("General"),
            section: json!(""),
            is_subtask: json!(false),
            parent_id: Value::Null,
        };
        let value = serde_json::to_value(&ticket).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("id"));
        assert_eq!(obj.len(), 7);
        assert_eq!(value["isSubtask"], json!(false));
        assert_eq!(value["parentId"], Value::Null);
    }
}
