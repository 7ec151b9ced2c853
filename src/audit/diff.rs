//! Diff generation for audit logging
//!
//! Walks two JSON documents and reports every changed leaf by dotted path.

use serde_json::Value;

/// Collect `path: before -> after` lines for every leaf that differs
pub fn changed_paths(before: &Value, after: &Value, prefix: &str) -> Vec<String> {
    let mut changes = Vec::new();

    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            for (key, before_val) in before_obj {
                let path = join(prefix, key);
                match after_obj.get(key) {
                    Some(after_val) => changes.extend(changed_paths(before_val, after_val, &path)),
                    None => changes.push(format!("{}: {} -> (removed)", path, format_value(before_val))),
                }
            }
            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!(
                        "{}: (added) -> {}",
                        join(prefix, key),
                        format_value(after_val)
                    ));
                }
            }
        }
        _ if before != after => {
            let path = if prefix.is_empty() { "(root)" } else { prefix };
            changes.push(format!(
                "{}: {} -> {}",
                path,
                format_value(before),
                format_value(after)
            ));
        }
        _ => {}
    }

    changes
}

/// One-line summary of all changes, or `None` if nothing changed
pub fn summarize(before: &Value, after: &Value) -> Option<String> {
    let changes = changed_paths(before, after, "");
    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_leaf_change() {
        let before = json!({"academic": {"matriculation": {"year": 0, "board": "Lahore"}}});
        let after = json!({"academic": {"matriculation": {"year": 2019, "board": "Lahore"}}});

        assert_eq!(
            changed_paths(&before, &after, ""),
            vec!["academic.matriculation.year: 0 -> 2019"]
        );
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"a": 1, "b": {"c": true}});
        assert_eq!(summarize(&value, &value), None);
    }

    #[test]
    fn test_array_change_reported_by_count() {
        let before = json!({"degrees": []});
        let after = json!({"degrees": [{"id": "x"}]});

        assert_eq!(
            summarize(&before, &after).unwrap(),
            "degrees: [0 items] -> [1 items]"
        );
    }

    #[test]
    fn test_added_and_removed_keys() {
        let before = json!({"old": "x"});
        let after = json!({"new": "y"});
        let changes = changed_paths(&before, &after, "");

        assert!(changes.contains(&"old: \"x\" -> (removed)".to_string()));
        assert!(changes.contains(&"new: (added) -> \"y\"".to_string()));
    }

    #[test]
    fn test_long_strings_truncated() {
        let long = "x".repeat(60);
        let summary = summarize(&json!(""), &json!(long)).unwrap();
        assert!(summary.ends_with("...\""));
    }
}
