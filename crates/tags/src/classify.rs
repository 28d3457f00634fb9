//! Tag classification and name extraction.
//!
//! Classification is shape-based only: attributes are never parsed, so
//! `<a href="x">` and `<a !!>` are both start tags named `a`. Tag names start
//! with an ASCII letter followed by `[A-Za-z0-9_-]`; whitespace between the
//! name and the attributes is ASCII whitespace.

use std::sync::LazyLock;

use regex::Regex;

use crate::tag::TagKind;

static PROCESSING_INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| compile(r"^<\?xml[^?]*\?>$"));
static SELF_CLOSING: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^<[a-zA-Z][a-zA-Z0-9_-]*(?:(?-u:\s)[^>]*)?/>$"));
static START: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^<[a-zA-Z][a-zA-Z0-9_-]*(?:(?-u:\s)[^>]*)?>$"));
static END: LazyLock<Regex> = LazyLock::new(|| compile(r"^</[a-zA-Z][a-zA-Z0-9_-]*>$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid tag pattern {pattern:?}: {err}"))
}

/// Classifies a raw token such as `<item id="3">`.
///
/// Returns `None` for bracketed tokens of no recognised shape (`<1abc>`,
/// `<!-- x -->`, `<!DOCTYPE html>`, `</a b>`). Those are dropped by the engine
/// without a diagnostic.
pub fn classify(raw: &str) -> Option<TagKind> {
    if PROCESSING_INSTRUCTION.is_match(raw) {
        return Some(TagKind::ProcessingInstruction);
    }
    if is_self_closing(raw) {
        return Some(TagKind::SelfClosing);
    }
    if START.is_match(raw) {
        return Some(TagKind::Start);
    }
    if END.is_match(raw) {
        return Some(TagKind::End);
    }
    None
}

/// Self-closing by shape, or loosely: anything whose trimmed text ends in `/>`.
fn is_self_closing(raw: &str) -> bool {
    SELF_CLOSING.is_match(raw) || raw.trim().ends_with("/>")
}

/// Bare tag name of a raw token, without brackets, slashes or attributes.
///
/// Never fails: input with nothing usable yields `""`, which is still a valid
/// (degenerate) matching key.
pub fn extract_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '/'))
        .collect();
    let head = cleaned
        .trim()
        .split(char::is_whitespace)
        .next()
        .unwrap_or_default();
    head.strip_prefix('?').unwrap_or(head).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::{classify, extract_name};
    use crate::tag::TagKind;

    #[test]
    fn processing_instructions() {
        assert_eq!(
            classify(r#"<?xml version="1.0" encoding="UTF-8"?>"#),
            Some(TagKind::ProcessingInstruction)
        );
        assert_eq!(classify("<?xml?>"), Some(TagKind::ProcessingInstruction));
        // Only the xml declaration shape counts; an embedded `?` breaks it.
        assert_eq!(classify("<?xml a?b ?>"), None);
        assert_eq!(classify("<?php echo ?>"), None);
    }

    #[test]
    fn self_closing_shapes() {
        assert_eq!(classify("<br/>"), Some(TagKind::SelfClosing));
        assert_eq!(classify("<br />"), Some(TagKind::SelfClosing));
        assert_eq!(classify(r#"<img src="a.png" />"#), Some(TagKind::SelfClosing));
        // Loose fallback: anything ending in `/>`.
        assert_eq!(classify("<1abc/>"), Some(TagKind::SelfClosing));
        assert_eq!(classify("</a/>"), Some(TagKind::SelfClosing));
    }

    #[test]
    fn start_tags() {
        assert_eq!(classify("<note>"), Some(TagKind::Start));
        assert_eq!(classify("<to_x-1>"), Some(TagKind::Start));
        assert_eq!(classify(r#"<note id="1" lang='en'>"#), Some(TagKind::Start));
        assert_eq!(classify("<note\tid=1>"), Some(TagKind::Start));
        assert_eq!(classify("<Note>"), Some(TagKind::Start));
    }

    #[test]
    fn end_tags() {
        assert_eq!(classify("</note>"), Some(TagKind::End));
        assert_eq!(classify("</to_x-1>"), Some(TagKind::End));
    }

    #[test]
    fn malformed_shapes_are_unclassified() {
        for raw in [
            "<1abc>",
            "</1abc>",
            "</a b>",
            "</ a>",
            "< a>",
            "<a\"x>",
            "<!-- comment -->",
            "<!DOCTYPE note>",
            "<>",
            "",
        ] {
            assert_eq!(classify(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn name_strips_brackets_slashes_and_attributes() {
        assert_eq!(extract_name("<note>"), "note");
        assert_eq!(extract_name("</note>"), "note");
        assert_eq!(extract_name(r#"<note id="1">"#), "note");
        assert_eq!(extract_name("<br/>"), "br");
        assert_eq!(extract_name("<a\thref=x>"), "a");
        assert_eq!(extract_name("<?xml version=\"1.0\"?>"), "xml");
        // Slashes inside attribute values are removed as well.
        assert_eq!(extract_name(r#"<a href="x/y">"#), "a");
    }

    #[test]
    fn name_extraction_never_fails() {
        assert_eq!(extract_name("<>"), "");
        assert_eq!(extract_name("</>"), "");
        assert_eq!(extract_name(""), "");
        assert_eq!(extract_name("<  >"), "");
    }
}
