//! Fixed demo backlog used to seed the ticket table.
//!
//! Six groups from the supply-side UI rework. Each group except the
//! terminology one has a lead ticket followed by its subtasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tickets::models::TicketStatus;

/// A fully-typed ticket from the seed catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTicket {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub category: String,
    pub section: String,
    pub is_subtask: bool,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// (title, description)
type Entry = (&'static str, &'static str);

struct Group {
    category: &'static str,
    section: &'static str,
    /// When set, every item becomes a subtask of this ticket.
    lead: Option<Entry>,
    items: &'static [Entry],
}

const GROUPS: &[Group] = &[
    Group {
        category: "terminology",
        section: "Global Changes",
        lead: None,
        items: &[
            (
                "Rename 'Enhancement' to 'Enrichment' in UI",
                "Find and replace all instances of 'Enhancement' with 'Enrichment' throughout the UI.",
            ),
            (
                "Rename 'Connection' to 'Route' in UI",
                "Find and replace all instances of 'Connection' with 'Route' throughout the UI.",
            ),
        ],
    },
    Group {
        category: "supply-partners",
        section: "Main Table Screen",
        lead: Some((
            "Supply Partners - Main Table Screen",
            "Update the Supply Partners main table screen with appropriate metrics and controls.",
        )),
        items: &[
            (
                "Update metrics columns",
                "Use the same metrics columns as the Supply Tags page: Ad Requests, Fill Rate, Impressions, Media Cost, Revenue",
            ),
            (
                "Add Date Picker",
                "Add a Date Picker in the top-right, same as on Supply Tags page",
            ),
            (
                "Use customizable schema",
                "Ensure the table uses a customizable schema from src/lib/client/components/data-table/column-schemas",
            ),
        ],
    },
    Group {
        category: "supply-partners",
        section: "Edit Drawer",
        lead: Some((
            "Supply Partners - Edit Drawer/Page",
            "Create the edit drawer/page for Supply Partner details with multiple tabs.",
        )),
        items: &[
            (
                "Settings Tab",
                "Create Settings tab with Name field as text input and Active/Inactive toggle slider",
            ),
            (
                "Enrichments Tab",
                "Create Enrichments tab with Inherited Enrichments display and Partner Level Enrichments (same functionality as 'Tag Level Request Enhancements' in the Supply Tags screen)",
            ),
            (
                "Supply Tags Tab",
                "Create Supply Tags tab with a table listing all tags belonging to this supply partner. Table should be the same as used on Supply Tags screen, but optimized for in-drawer usage. Clicking on a row should open that tag's details in a new tab.",
            ),
        ],
    },
    Group {
        category: "supply-packages",
        section: "Main Table Screen",
        lead: Some((
            "Supply Packages - Main Table Screen",
            "Update the Supply Packages main table screen with appropriate metrics.",
        )),
        items: &[(
            "Update metrics columns",
            "Use the same metrics columns as the Supply Tags page: Ad Requests, Fill Rate, Impressions, Media Cost, Revenue",
        )],
    },
    Group {
        category: "supply-packages",
        section: "Edit Drawer",
        lead: Some((
            "Supply Packages - Edit Drawer/Page",
            "Create the edit drawer/page for Supply Package details with Targeting tab.",
        )),
        items: &[
            (
                "Use filter builder",
                "Use same filter builder as Supply Tags Targeting Tab",
            ),
            (
                "Add Supply Tag Targeting section",
                "Add 'Supply Tag Targeting' section above filters with radio button group: Include All Tags, Include Specific Tags, Exclude Specific Tags",
            ),
            (
                "Implement tag selection modal",
                "If Include/Exclude Specific Tags is selected, open modal with searchable table of supply tags and checkbox column to select tags. After selection, show summary and provide Edit option.",
            ),
            (
                "Add confirmation prompt",
                "Show confirmation prompt if the user switches targeting types (e.g., from Include to Exclude), warning that it will reset selected tags",
            ),
        ],
    },
    Group {
        category: "supply-partners",
        section: "General",
        lead: Some((
            "Data Persistence & UX",
            "Implement data persistence and UX improvements for all screens.",
        )),
        items: &[
            (
                "Use Edit Drawer or Page",
                "All screens (Supply Partners + Supply Packages) must use an Edit Drawer or Page",
            ),
            (
                "Temporary edits until Save",
                "All edits to a record should be temporary until 'Save' is clicked. No automatic saves. Allows adops to configure entire record before persisting changes.",
            ),
        ],
    },
];

fn make_ticket(
    group: &Group,
    (title, description): Entry,
    parent_id: Option<Uuid>,
    now: DateTime<Utc>,
) -> CatalogTicket {
    CatalogTicket {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        status: TicketStatus::Todo,
        category: group.category.to_string(),
        section: group.section.to_string(),
        is_subtask: parent_id.is_some(),
        parent_id,
        created_at: now,
        updated_at: now,
    }
}

/// Builds the catalog with fresh ids and one shared timestamp.
///
/// Lead tickets precede their subtasks; each lead's id is generated once and
/// reused as `parent_id` by its children.
pub fn catalog() -> Vec<CatalogTicket> {
    let now = Utc::now();
    let mut tickets = Vec::new();

    for group in GROUPS {
        let parent_id = group.lead.map(|lead| {
            let ticket = make_ticket(group, lead, None, now);
            let id = ticket.id;
            tickets.push(ticket);
            id
        });
        for &item in group.items {
            tickets.push(make_ticket(group, item, parent_id, now));
        }
    }

    tickets
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;

    #[test]
    fn test_catalog_size_and_shape() {
        let tickets = catalog();
        assert_eq!(tickets.len(), 20);
        assert_eq!(tickets.iter().filter(|t| !t.is_subtask).count(), 7);
        assert!(tickets.iter().all(|t| t.status == TicketStatus::Todo));
    }

    #[test]
    fn test_no_dangling_parent_references() {
        let tickets = catalog();
        let ids: HashSet<Uuid> = tickets.iter().map(|t| t.id).collect();
        for t in &tickets {
            match t.parent_id {
                Some(parent) => {
                    assert!(t.is_subtask);
                    assert_ne!(parent, t.id);
                    assert!(ids.contains(&parent), "dangling parent for {}", t.title);
                }
                None => assert!(!t.is_subtask),
            }
        }
    }

    #[test]
    fn test_parents_precede_children_and_share_group() {
        let tickets = catalog();
        let position: HashMap<Uuid, usize> =
            tickets.iter().enumerate().map(|(i, t)| (t.id, i)).collect();
        for (i, t) in tickets.iter().enumerate() {
            if let Some(parent) = t.parent_id {
                let p = &tickets[position[&parent]];
                assert!(position[&parent] < i);
                assert!(!p.is_subtask);
                assert_eq!(p.category, t.category);
                assert_eq!(p.section, t.section);
            }
        }
    }

    #[test]
    fn test_ids_are_unique_and_fresh_per_call() {
        let first = catalog();
        let second = catalog();
        let ids: HashSet<Uuid> = first.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), first.len());
        assert!(second.iter().all(|t| !ids.contains(&t.id)));
    }

    #[test]
    fn test_shared_timestamp() {
        let tickets = catalog();
        let now = tickets[0].created_at;
        assert!(tickets
            .iter()
            .all(|t| t.created_at == now && t.updated_at == now));
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(&catalog()[2]).unwrap();
        assert_eq!(value["isSubtask"], false);
        assert!(value["parentId"].is_null());
        assert_eq!(value["status"], "todo");
        assert!(value.get("createdAt").is_some());
    }
}
