//! Completion repair: turns a possibly truncated completion into a JSON array.
//!
//! The completion usually stops on the `]` stop sequence, so the closing
//! bracket is missing from the text we receive. Only that truncation pattern
//! is repaired; anything else is left for the strict parser to reject.

use serde_json::Value;

use crate::errors::AppError;

/// Applies the bracket repair to a raw completion.
///
/// 1. trim surrounding whitespace
/// 2. if it does not end with `]`: drop one trailing `,`, then append `\n]`
/// 3. if it does not start with `[`: prepend `[`
pub fn repair_completion(raw: &str) -> String {
    let mut repaired = raw.trim().to_string();

    if !repaired.ends_with(']') {
        if repaired.ends_with(',') {
            repaired.pop();
        }
        repaired.push_str("\n]");
    }

    if !repaired.starts_with('[') {
        repaired.insert(0, '[');
    }

    repaired
}

/// Repairs `raw` and parses it strictly into a list of untyped records.
///
/// Record shape is not checked here. A parse failure after repair is final.
pub fn repair_and_parse(raw: &str) -> Result<Vec<Value>, AppError> {
    let repaired = repair_completion(raw);
    serde_json::from_str::<Vec<Value>>(&repaired).map_err(AppError::MalformedOutput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_wrapper_is_added() {
        let raw = r#"{"title":"A"}"#;
        assert_eq!(repair_completion(raw), "[{\"title\":\"A\"}\n]");
        let records = repair_and_parse(raw).unwrap();
        assert_eq!(records, vec![json!({"title": "A"})]);
    }

    #[test]
    fn test_trailing_comma_is_stripped_before_closing() {
        let raw = r#"[{"title":"A"},"#;
        assert_eq!(repair_completion(raw), "[{\"title\":\"A\"}\n]");
        assert_eq!(repair_and_parse(raw).unwrap().len(), 1);
    }

    #[test]
    fn test_typical_stop_sequence_truncation() {
        // the prompt already supplied "[", so the completion starts mid-array
        let raw = "\n  {\"id\": \"t1\", \"title\": \"Fix login bug\"},\n  {\"id\": \"t2\", \"title\": \"Button color\", \"isSubtask\": true, \"parentId\": \"t1\"}\n";
        let records = repair_and_parse(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["parentId"], "t1");
    }

    #[test]
    fn test_complete_array_is_untouched() {
        let raw = "  [{\"title\":\"A\"}, {\"title\":\"B\"}]  ";
        assert_eq!(repair_completion(raw), "[{\"title\":\"A\"}, {\"title\":\"B\"}]");
        assert_eq!(repair_and_parse(raw).unwrap().len(), 2);
    }

    #[test]
    fn test_garbage_is_malformed_output() {
        let raw = "not json at all";
        assert_eq!(repair_completion(raw), "[not json at all\n]");
        assert!(matches!(
            repair_and_parse(raw),
            Err(AppError::MalformedOutput(_))
        ));
    }

    #[test]
    fn test_empty_completion_becomes_empty_list() {
        assert_eq!(repair_completion("   "), "[\n]");
        assert!(repair_and_parse("").unwrap().is_empty());
    }

    #[test]
    fn test_no_repair_inside_objects() {
        // trailing comma inside an object is not this module's job
        let raw = r#"{"title":"A",}"#;
        assert!(matches!(
            repair_and_parse(raw),
            Err(AppError::MalformedOutput(_))
        ));
    }

    #[test]
    fn test_non_object_records_pass_through() {
        let records = repair_and_parse("1, \"two\", null").unwrap();
        assert_eq!(records, vec![json!(1), json!("two"), Value::Null]);
    }
}
