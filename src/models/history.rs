//! Scrollback history entry.

use serde::{Deserialize, Serialize};

/// One executed command line and its rendered output.
///
/// Entries are created on execution and never mutated afterwards; the
/// whole log is only ever appended to, cleared, or replaced. Suggestion
/// entries (produced by Tab completion when no further unambiguous
/// extension exists) carry `is_suggestion = true` so the renderer can
/// style them differently.
///
/// The serialized form matches the log persisted under the `"history"`
/// localStorage key, so `is_suggestion` defaults to `false` for entries
/// written before the field existed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Raw command line as the user entered it.
    pub command: String,
    /// Output lines produced by the command handler.
    pub outputs: Vec<String>,
    /// Marks entries that display Tab-completion suggestions.
    #[serde(default)]
    pub is_suggestion: bool,
}

impl HistoryEntry {
    /// Create an entry for an executed command with a single output.
    pub fn new(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            outputs: vec![output.into()],
            is_suggestion: false,
        }
    }

    /// Create an entry with no command line, used for boot output. The
    /// renderer omits the prompt line when `command` is empty.
    pub fn output(output: impl Into<String>) -> Self {
        Self::new("", output)
    }

    /// Create a Tab-completion suggestion entry.
    pub fn suggestion(command: impl Into<String>, matches: &[String]) -> Self {
        Self {
            command: command.into(),
            outputs: vec![format!("Suggestions: {}", matches.join(", "))],
            is_suggestion: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry() {
        let entry = HistoryEntry::new("ls", "documents\nprojects");
        assert_eq!(entry.command, "ls");
        assert_eq!(entry.outputs, vec!["documents\nprojects".to_string()]);
        assert!(!entry.is_suggestion);
    }

    #[test]
    fn test_suggestion_entry() {
        let matches = vec!["list".to_string(), "listdir".to_string()];
        let entry = HistoryEntry::suggestion("lis", &matches);
        assert!(entry.is_suggestion);
        assert_eq!(entry.outputs, vec!["Suggestions: list, listdir".to_string()]);
    }

    #[test]
    fn test_serialized_field_names() {
        let entry = HistoryEntry::suggestion("lis", &["list".to_string()]);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"isSuggestion\":true"));
    }

    #[test]
    fn test_deserialize_without_suggestion_flag() {
        // Logs persisted before the flag existed omit it entirely.
        let json = r#"{"command":"pwd","outputs":["~"]}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.command, "pwd");
        assert!(!entry.is_suggestion);
    }
}
