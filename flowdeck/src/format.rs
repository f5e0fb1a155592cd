//! Display formatting shared by the CLI commands and the panel.

use crate::client::StatisticsMap;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Pretty-print a JSON value with 4-space indentation.
///
/// This is the format the parameters pane displays and seeds the editor
/// with.
pub fn to_pretty_json(value: &Value) -> String {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    String::from_utf8(out).unwrap_or_else(|_| value.to_string())
}

/// Render a statistics mapping as `name = value` lines.
///
/// String values are shown unquoted; everything else renders as compact
/// JSON. Line order follows the mapping's own iteration order.
pub fn statistics_lines(statistics: &StatisticsMap) -> Vec<String> {
    statistics
        .iter()
        .map(|(name, value)| format!("{} = {}", name, display_value(value)))
        .collect()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Human-readable run-state label.
pub fn run_state_label(is_running: bool) -> &'static str {
    if is_running {
        "Running"
    } else {
        "Stopped"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_json_uses_four_space_indent() {
        let value = json!({"x": 1});
        assert_eq!(to_pretty_json(&value), "{\n    \"x\": 1\n}");
    }

    #[test]
    fn test_pretty_json_nested() {
        let value = json!({"a": {"b": 2}});
        assert_eq!(
            to_pretty_json(&value),
            "{\n    \"a\": {\n        \"b\": 2\n    }\n}"
        );
    }

    #[test]
    fn test_statistics_lines_mixed_value_types() {
        let mut statistics = StatisticsMap::new();
        statistics.insert("count".to_string(), json!(5));
        statistics.insert("rate".to_string(), json!("2.1"));

        let lines = statistics_lines(&statistics);
        assert_eq!(lines.len(), 2);
        assert!(lines.contains(&"count = 5".to_string()));
        assert!(lines.contains(&"rate = 2.1".to_string()));
    }

    #[test]
    fn test_statistics_lines_empty_mapping() {
        assert!(statistics_lines(&StatisticsMap::new()).is_empty());
    }

    #[test]
    fn test_run_state_labels() {
        assert_eq!(run_state_label(true), "Running");
        assert_eq!(run_state_label(false), "Stopped");
    }
}
