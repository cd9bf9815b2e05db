use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::{
    LEFT_BRACKET, POUND, RIGHT_BRACKET, R_DOUBLE_QUOTE, R_NO_QUOTE, R_NO_VALUE, R_SINGLE_QUOTE,
    SEMICOLON,
};

lazy_static! {
    static ref DOUBLE_QUOTE_REGEX: Regex = Regex::new(R_DOUBLE_QUOTE).unwrap();
    static ref SINGLE_QUOTE_REGEX: Regex = Regex::new(R_SINGLE_QUOTE).unwrap();
    static ref NO_QUOTE_REGEX: Regex = Regex::new(R_NO_QUOTE).unwrap();
    static ref NO_VALUE_REGEX: Regex = Regex::new(R_NO_VALUE).unwrap();
}

/// What a trimmed logical line turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Comment,
    /// Header with the brackets removed and the name trimmed, case untouched
    Section(&'a str),
    /// Key with case untouched and value with quotes removed
    Entry { key: &'a str, value: &'a str },
}

/// Classify a trimmed, non-empty logical line
///
/// # Returns
/// * `None` if the line is not a comment, not a section header and matches
///   none of the key/value forms
pub fn classify(line: &str) -> Option<Line<'_>> {
    let begin = line.chars().next()?;
    let end = line.chars().next_back()?;

    if begin == POUND || begin == SEMICOLON {
        return Some(Line::Comment);
    }

    if begin == LEFT_BRACKET && end == RIGHT_BRACKET && line.len() >= 2 {
        return Some(Line::Section(line[1..line.len() - 1].trim()));
    }

    // Quoted values are taken verbatim, an unquoted value is trimmed
    let quoted = [&*DOUBLE_QUOTE_REGEX, &*SINGLE_QUOTE_REGEX]
        .into_iter()
        .find_map(|regex| regex.captures(line))
        .map(|caps| (caps.get(1), caps.get(2)));
    if let Some((Some(key), Some(value))) = quoted {
        return Some(Line::Entry {
            key: key.as_str(),
            value: value.as_str(),
        });
    }

    if let Some(caps) = NO_QUOTE_REGEX.captures(line) {
        let key = caps.get(1).map_or("", |m| m.as_str());
        let value = caps.get(2).map_or("", |m| m.as_str().trim());
        return Some(Line::Entry { key, value });
    }

    NO_VALUE_REGEX.captures(line).map(|caps| Line::Entry {
        key: caps.get(1).map_or("", |m| m.as_str()),
        value: "",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry<'a>(key: &'a str, value: &'a str) -> Option<Line<'a>> {
        Some(Line::Entry { key, value })
    }

    #[test]
    fn test_comments() {
        assert_eq!(classify("# hash"), Some(Line::Comment));
        assert_eq!(classify("; semicolon"), Some(Line::Comment));
        assert_eq!(classify("#[section]"), Some(Line::Comment));
    }

    #[test]
    fn test_section_header() {
        assert_eq!(classify("[Main]"), Some(Line::Section("Main")));
        assert_eq!(classify("[  spaced out  ]"), Some(Line::Section("spaced out")));
        assert_eq!(classify("[]"), Some(Line::Section("")));
    }

    #[test]
    fn test_quoted_values_are_verbatim() {
        assert_eq!(classify(r#"k = "v1""#), entry("k", "v1"));
        assert_eq!(classify(r#"k="  padded  ""#), entry("k", "  padded  "));
        assert_eq!(classify("k = ' single; # '"), entry("k", " single; # "));
        assert_eq!(classify(r#"k = """#), entry("k", ""));
    }

    #[test]
    fn test_unquoted_value_stops_at_comment() {
        assert_eq!(classify("k = v1 ; comment"), entry("k", "v1"));
        assert_eq!(classify("k=v1#comment"), entry("k", "v1"));
        assert_eq!(classify("path = /usr/local/bin"), entry("path", "/usr/local/bin"));
        assert_eq!(classify("eq = a=b"), entry("eq", "a=b"));
    }

    #[test]
    fn test_trailing_text_after_quote_falls_back_to_unquoted() {
        assert_eq!(classify(r#"k = "v1" ; note"#), entry("k", r#""v1""#));
        assert_eq!(classify(r#"k = "a"b""#), entry("k", r#""a"b""#));
    }

    #[test]
    fn test_no_value() {
        assert_eq!(classify("k ="), entry("k", ""));
        assert_eq!(classify("k = ; nothing here"), entry("k", ""));
        assert_eq!(classify("k=#"), entry("k", ""));
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(classify("this is not valid"), None);
        assert_eq!(classify("= value"), None);
        assert_eq!(classify("[unterminated"), None);
    }
}
