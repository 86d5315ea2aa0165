//! Quoted phrase detection and quote sanitizing

const QUOTE: char = '"';

/// Detect a buffer that is entirely one double-quoted phrase
///
/// Returns the interior, trimmed, as a single fragment. Quotes inside the
/// interior are kept as literal characters. A buffer with anything outside
/// the outer quotes, or with a blank interior, yields `None`.
pub fn detect_quoted_phrase(buffer: &str) -> Option<Vec<String>> {
    let interior = buffer.strip_prefix(QUOTE)?.strip_suffix(QUOTE)?;
    let cleaned = interior.trim();
    if cleaned.is_empty() {
        return None;
    }
    Some(vec![cleaned.to_string()])
}

/// Strip every quote character (used for suggestion matching, never for stored values)
pub fn sanitize(buffer: &str) -> String {
    buffer.replace(QUOTE, "")
}

/// Whether the buffer holds a quoted term: at least two quotes around some content
pub fn is_quoted_term(buffer: &str) -> bool {
    let quote_count = buffer.matches(QUOTE).count();
    quote_count > 1 && !sanitize(buffer).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_quoted_buffer() {
        assert_eq!(
            detect_quoted_phrase(r#""sea kayak""#),
            Some(vec!["sea kayak".to_string()])
        );
    }

    #[test]
    fn test_interior_is_trimmed() {
        assert_eq!(
            detect_quoted_phrase(r#""  sea kayak ""#),
            Some(vec!["sea kayak".to_string()])
        );
    }

    #[test]
    fn test_internal_quotes_are_literal() {
        assert_eq!(
            detect_quoted_phrase(r#""the "big" boat""#),
            Some(vec![r#"the "big" boat"#.to_string()])
        );
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(detect_quoted_phrase(r#""sea kayak"#), None);
        assert_eq!(detect_quoted_phrase(r#"""#), None);
    }

    #[test]
    fn test_empty_and_blank_interior() {
        assert_eq!(detect_quoted_phrase(""), None);
        assert_eq!(detect_quoted_phrase(r#""""#), None);
        assert_eq!(detect_quoted_phrase(r#""   ""#), None);
    }

    #[test]
    fn test_surrounding_characters_reject() {
        assert_eq!(detect_quoted_phrase(r#"x"sea kayak""#), None);
        assert_eq!(detect_quoted_phrase(r#""sea kayak" "#), None);
        assert_eq!(detect_quoted_phrase(r#" "sea kayak""#), None);
    }

    #[test]
    fn test_sanitize_strips_quotes() {
        assert_eq!(sanitize(r#""sea "kayak""#), "sea kayak");
        assert_eq!(sanitize("boating"), "boating");
    }

    #[test]
    fn test_is_quoted_term() {
        assert!(is_quoted_term(r#""sea""#));
        assert!(is_quoted_term(r#"a "b" c"#));
        assert!(!is_quoted_term(r#""sea"#));
        assert!(!is_quoted_term(r#""""#));
    }
}
