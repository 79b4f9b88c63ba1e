//! Tab autocomplete over registered command names.
//!
//! Completion is a case-sensitive prefix match (unlike `theme set`,
//! which matches case-insensitively; the asymmetry is deliberate):
//! - Single match: complete to the full name plus a trailing space
//! - Multiple matches: extend to the longest common prefix if that
//!   gains anything, otherwise report the candidates for display

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Replace the input buffer with this value.
    Replace(String),
    /// No further unambiguous extension; show these candidates.
    Suggest(Vec<String>),
    /// No matches (or empty input); leave the buffer unchanged.
    None,
}

/// Compute the completion for `input` against the registered names.
pub fn complete(input: &str, names: &[&str]) -> Completion {
    if input.is_empty() {
        return Completion::None;
    }

    let matches: Vec<&str> = names.iter().filter(|n| n.starts_with(input)).copied().collect();

    match matches.len() {
        0 => Completion::None,
        1 => Completion::Replace(format!("{} ", matches[0])),
        _ => {
            let common = longest_common_prefix(&matches);
            if common.len() > input.len() {
                Completion::Replace(common)
            } else {
                Completion::Suggest(matches.iter().map(|s| s.to_string()).collect())
            }
        }
    }
}

/// Longest common prefix of a non-empty set of strings (case-sensitive).
fn longest_common_prefix(strings: &[&str]) -> String {
    let first = strings[0];
    let mut prefix_len = first.len();

    for s in &strings[1..] {
        prefix_len = first
            .chars()
            .zip(s.chars())
            .take(prefix_len)
            .take_while(|(a, b)| a == b)
            .count();
    }

    first[..prefix_len].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &["banner", "cat", "cd", "clear", "help", "list", "listdir", "ls"];

    #[test]
    fn test_empty_input_is_noop() {
        assert_eq!(complete("", NAMES), Completion::None);
    }

    #[test]
    fn test_no_match_is_noop() {
        assert_eq!(complete("xyz", NAMES), Completion::None);
    }

    #[test]
    fn test_single_match_appends_space() {
        assert_eq!(complete("he", NAMES), Completion::Replace("help ".to_string()));
    }

    #[test]
    fn test_multiple_matches_extend_to_lcp() {
        // "lis" matches list and listdir; LCP is "list"
        assert_eq!(complete("lis", NAMES), Completion::Replace("list".to_string()));
    }

    #[test]
    fn test_lcp_equal_to_input_suggests() {
        match complete("list", NAMES) {
            Completion::Suggest(matches) => {
                assert_eq!(matches, vec!["list".to_string(), "listdir".to_string()]);
            }
            other => panic!("expected suggestions, got {:?}", other),
        }
    }

    #[test]
    fn test_completion_is_case_sensitive() {
        assert_eq!(complete("HE", NAMES), Completion::None);
    }

    #[test]
    fn test_longest_common_prefix() {
        assert_eq!(longest_common_prefix(&["hello", "help", "helicopter"]), "hel");
        assert_eq!(longest_common_prefix(&["abc", "xyz"]), "");
        assert_eq!(longest_common_prefix(&["same", "same"]), "same");
    }
}
