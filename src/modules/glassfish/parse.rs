//! Line-oriented `key=value` parsing shared by the GlassFish modules

use std::collections::HashMap;

/// Parse newline-separated `key=value` lines into a mapping.
///
/// Each line is split on its first `=`; lines without one are skipped.
/// A later duplicate key overwrites the earlier entry. Both the asadmin
/// `list-system-properties` output and the desired-state property file use
/// this exact rule, so they share this one parser.
pub fn parse_key_value_lines(text: &str) -> HashMap<String, String> {
    let mut properties = HashMap::new();
    for line in text.lines() {
        if let Some((key, value)) = line.split_once('=') {
            properties.insert(key.to_string(), value.to_string());
        }
    }
    properties
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_pairs() {
        let parsed = parse_key_value_lines("a=1\nb=2\n");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["a"], "1");
        assert_eq!(parsed["b"], "2");
    }

    #[test]
    fn splits_on_first_equals_only() {
        let parsed = parse_key_value_lines("jdbc.url=jdbc:db://host?a=b\n");
        assert_eq!(parsed["jdbc.url"], "jdbc:db://host?a=b");
    }

    #[test]
    fn skips_lines_without_equals() {
        let parsed = parse_key_value_lines("Command executed successfully.\nkey=value\n\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["key"], "value");
    }

    #[test]
    fn later_duplicate_overwrites_earlier() {
        let parsed = parse_key_value_lines("k=first\nk=second\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["k"], "second");
    }

    #[test]
    fn empty_value_is_kept() {
        let parsed = parse_key_value_lines("k=\n");
        assert_eq!(parsed["k"], "");
    }

    #[test]
    fn reparse_of_formatted_mapping_is_identity() {
        let parsed = parse_key_value_lines("a=1\nb=2\nc=3\n");
        let formatted: String = parsed
            .iter()
            .map(|(k, v)| format!("{k}={v}\n"))
            .collect();
        assert_eq!(parse_key_value_lines(&formatted), parsed);
    }
}
