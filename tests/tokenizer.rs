//! Tokenizer tests - operator shapes, quoted phrases, purity

use querybar::config::QueryConfig;
use querybar::tokenizer::{
    detect_quoted_phrase, is_quoted_term, sanitize, Detection, LogicMatch, Tokenizer,
};

fn commit(parts: &[&str]) -> Detection {
    Detection::Commit(parts.iter().map(|s| s.to_string()).collect())
}

// ========================================================================
// Operator shapes
// ========================================================================

#[test]
fn test_trailing_operator_commits_word_and_operator() {
    let tokenizer = Tokenizer::default();
    assert_eq!(
        tokenizer.detect("boating AND ", false, false),
        commit(&["boating", "AND"])
    );
}

#[test]
fn test_operator_prefix_of_longer_word_never_matches() {
    let tokenizer = Tokenizer::default();
    for buffer in ["boating O", "boating OR", "boating ORE", "boating OREGON", "boating OREGON "] {
        assert_eq!(
            tokenizer.detect(buffer, true, true),
            Detection::None,
            "buffer {:?}",
            buffer
        );
    }
}

#[test]
fn test_embedded_operator_needs_confirmation() {
    let tokenizer = Tokenizer::default();
    assert_eq!(
        tokenizer.detect("boating OR tourism", false, false),
        Detection::Deferred
    );
    assert_eq!(
        tokenizer.detect("boating OR tourism", false, true),
        commit(&["boating", "OR", "tourism"])
    );
}

#[test]
fn test_trailing_shape_wins_over_pending_flag() {
    let tokenizer = Tokenizer::default();
    assert_eq!(
        tokenizer.detect("boating NOT ", false, true),
        commit(&["boating", "NOT"])
    );
}

#[test]
fn test_leading_operator_only_with_existing_token() {
    let tokenizer = Tokenizer::default();
    assert_eq!(tokenizer.detect("OR ", false, false), Detection::None);
    assert_eq!(tokenizer.detect("OR ", true, false), commit(&["OR"]));
    assert_eq!(tokenizer.detect("OR", true, false), Detection::None);
}

#[test]
fn test_lowercase_operator_is_plain_text() {
    let tokenizer = Tokenizer::default();
    assert_eq!(tokenizer.detect("boating and ", true, false), Detection::None);
    assert_eq!(
        tokenizer.detect_logic_operator("boating or tourism", true, true),
        LogicMatch::NoMatch
    );
}

#[test]
fn test_logic_checked_before_quotes() {
    let tokenizer = Tokenizer::default();
    // Closing quote is part of the first word; the operator shape still applies
    assert_eq!(
        tokenizer.detect(r#"boating" AND "#, false, false),
        commit(&[r#"boating""#, "AND"])
    );
}

// ========================================================================
// Quoted phrases
// ========================================================================

#[test]
fn test_quoted_phrase_yields_interior_without_quotes() {
    for interior in ["sea kayak", "boating AND tourism", "a", "x \"y\" z"] {
        let buffer = format!("\"{}\"", interior);
        let fragments = detect_quoted_phrase(&buffer).unwrap();
        assert_eq!(fragments, vec![interior.trim().to_string()]);
        assert!(!fragments[0].starts_with('"'));
        assert!(!fragments[0].ends_with('"'));
    }
}

#[test]
fn test_quoted_phrase_with_operator_inside_is_single_phrase() {
    let tokenizer = Tokenizer::default();
    assert_eq!(
        tokenizer.detect(r#""boating OR tourism""#, true, true),
        commit(&["boating OR tourism"])
    );
}

#[test]
fn test_partially_quoted_buffers_keep_drafting() {
    let tokenizer = Tokenizer::default();
    for buffer in [r#"""#, r#""sea"#, r#""sea kayak"#, r#""  ""#] {
        assert_eq!(tokenizer.detect(buffer, true, false), Detection::None);
    }
}

#[test]
fn test_sanitize_and_quoted_term() {
    assert_eq!(sanitize(r#""sea kayak""#), "sea kayak");
    assert!(is_quoted_term(r#""sea kayak""#));
    assert!(!is_quoted_term("sea kayak"));
}

// ========================================================================
// Purity
// ========================================================================

#[test]
fn test_detection_is_idempotent() {
    let tokenizer = Tokenizer::default();
    let buffers = [
        "",
        "b",
        "boating",
        "boating ",
        "boating AND",
        "boating AND ",
        "boating AND t",
        "AND ",
        "\"sea kayak\"",
        "\"sea",
    ];
    for buffer in buffers {
        for allow_leading in [false, true] {
            for pending in [false, true] {
                let first = tokenizer.detect(buffer, allow_leading, pending);
                let second = tokenizer.detect(buffer, allow_leading, pending);
                assert_eq!(first, second);
            }
        }
    }
}

#[test]
fn test_vocabulary_from_config() {
    let config = QueryConfig::from_yaml("operators:\n  - value: NEAR\n  - value: AND\n").unwrap();
    let tokenizer = Tokenizer::new(config.vocabulary().unwrap());

    assert_eq!(
        tokenizer.detect("boating NEAR ", false, false),
        commit(&["boating", "NEAR"])
    );
    assert_eq!(tokenizer.detect("boating OR ", false, false), Detection::None);
}
