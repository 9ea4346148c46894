// Ticket conversion prompt templates.

use crate::llm_client::prompts::{AI_PROMPT, HUMAN_PROMPT, JSON_ARRAY_ONLY};

/// Delimiter line placed above and below the user's text.
pub const TEXT_DELIMITER: &str = "---";

const TICKET_PARSE_PROMPT: &str = r#"{human} You convert unstructured notes into a structured list of Kanban tickets.
Read the text below and produce a JSON array of ticket objects. Give each ticket these fields when the text supports them:
- id: (string, optional; invent a short unique id when the text gives none)
- title: (string, required; a concise summary of the task)
- description: (string, optional; the detailed description)
- status: (string, one of "todo", "inProgress", "done"; use "todo" when unsure)
- category: (string, optional; a grouping such as "General", "Frontend", "Backend", "Infrastructure", "Branding". Infer it where possible.)
- section: (string, optional; the screen or area affected, such as "Main Table Screen", "Edit Drawer", "Global Changes". Infer it where possible.)
- isSubtask: (boolean; true when the task is part of another task from the same text)
- parentId: (string or null; the id of the parent ticket when isSubtask is true. It must equal the id of another ticket produced from this same text.)

RULES:
- When a task reads as a sub-task of another task in the text, set isSubtask to true and point parentId at that task. Assign ids to parent tasks first so children can reference them.
- When no parent is obvious, set isSubtask to false and parentId to null.
- Ids you generate must be unique within the list.
- {json_only}

Here is the text to parse:
{delimiter}
{text}
{delimiter}
{assistant} [
"#;

/// Builds the completion prompt for `text`.
///
/// The text is embedded verbatim between `---` lines, and the prompt ends
/// with `[` plus a newline so the model continues straight into the array.
pub fn build_prompt(text: &str) -> String {
    TICKET_PARSE_PROMPT
        .replace("{human}", HUMAN_PROMPT)
        .replace("{assistant}", AI_PROMPT)
        .replace("{json_only}", JSON_ARRAY_ONLY)
        .replace("{delimiter}", TEXT_DELIMITER)
        // last, so braces inside the user's text are never treated as placeholders
        .replace("{text}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_ends_with_open_bracket() {
        let prompt = build_prompt("Fix login bug.");
        assert!(prompt.ends_with("[\n"));
        assert!(prompt.ends_with("\n\nAssistant: [\n"));
    }

    #[test]
    fn test_prompt_starts_with_human_turn() {
        assert!(build_prompt("anything").starts_with("\n\nHuman: "));
    }

    #[test]
    fn test_text_embedded_verbatim_between_delimiters() {
        let text = "Fix login bug.\nAlso update the button color as a subtask.";
        let prompt = build_prompt(text);
        assert!(prompt.contains(&format!("---\n{text}\n---\n")));
    }

    #[test]
    fn test_placeholder_like_text_is_not_expanded() {
        let text = "literal {delimiter} and {assistant} tokens";
        let prompt = build_prompt(text);
        assert!(prompt.contains(&format!("---\n{text}\n---")));
    }

    #[test]
    fn test_prompt_describes_schema_and_relationships() {
        let prompt = build_prompt("x");
        for field in [
            "id:",
            "title:",
            "description:",
            "status:",
            "category:",
            "section:",
            "isSubtask:",
            "parentId:",
        ] {
            assert!(prompt.contains(field), "prompt missing field {field}");
        }
        assert!(prompt.contains("JSON array"));
        assert!(!prompt.contains("{json_only}"));
    }
}
