//! Diagnostic collection and the textual report.

use std::collections::HashSet;
use std::fmt;

use crate::tag::TagRecord;

/// Report text for a document without diagnostics.
pub const SUCCESS_MESSAGE: &str = "XML document is constructed correctly.";

/// One malformed tag, reported at the line it appeared on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub line: usize,
    pub text: String,
}

impl Diagnostic {
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
        }
    }
}

impl From<&TagRecord> for Diagnostic {
    fn from(record: &TagRecord) -> Self {
        Self::new(record.line(), record.raw())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error at line: {} {} is not constructed correctly.",
            self.line, self.text
        )
    }
}

/// Insertion-ordered set of diagnostics.
///
/// `(line, text)` identity is the same as identity of the formatted message,
/// so exact duplicate messages are suppressed.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    ordered: Vec<Diagnostic>,
    seen: HashSet<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic; returns `false` if it was already present.
    pub fn record(&mut self, line: usize, text: &str) -> bool {
        self.insert(Diagnostic::new(line, text))
    }

    /// Records a diagnostic for `record` at its own line and raw text.
    pub fn record_tag(&mut self, record: &TagRecord) -> bool {
        self.insert(Diagnostic::from(record))
    }

    fn insert(&mut self, diagnostic: Diagnostic) -> bool {
        if self.seen.contains(&diagnostic) {
            return false;
        }
        self.seen.insert(diagnostic.clone());
        self.ordered.push(diagnostic);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.ordered
    }

    pub fn clear(&mut self) {
        self.ordered.clear();
        self.seen.clear();
    }

    /// Success sentence, or one newline-terminated line per diagnostic in
    /// first-seen order.
    pub fn report(&self) -> String {
        render_report(&self.ordered)
    }
}

pub(crate) fn render_report(diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        return SUCCESS_MESSAGE.to_string();
    }
    let mut out = String::new();
    for diagnostic in diagnostics {
        use std::fmt::Write;
        let _ = writeln!(&mut out, "{diagnostic}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{Diagnostic, Diagnostics, SUCCESS_MESSAGE};
    use crate::tag::TagRecord;

    #[test]
    fn message_format() {
        let diagnostic = Diagnostic::new(7, "<note id=\"1\">");
        assert_eq!(
            diagnostic.to_string(),
            "Error at line: 7 <note id=\"1\"> is not constructed correctly."
        );
    }

    #[test]
    fn duplicates_are_suppressed_and_order_is_kept() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.record(3, "<b>"));
        assert!(diagnostics.record(1, "<a>"));
        assert!(!diagnostics.record(3, "<b>"));
        // Same text on another line is a different message.
        assert!(diagnostics.record(4, "<b>"));
        assert!(!diagnostics.record_tag(&TagRecord::new("a", "<a>", 1)));

        let lines: Vec<usize> = diagnostics.as_slice().iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![3, 1, 4]);
    }

    #[test]
    fn report_is_success_sentence_or_newline_terminated_lines() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(diagnostics.report(), SUCCESS_MESSAGE);

        diagnostics.record(2, "</a>");
        diagnostics.record(5, "<b>");
        assert_eq!(
            diagnostics.report(),
            "Error at line: 2 </a> is not constructed correctly.\n\
             Error at line: 5 <b> is not constructed correctly.\n"
        );

        diagnostics.clear();
        assert!(diagnostics.is_empty());
        assert_eq!(diagnostics.report(), SUCCESS_MESSAGE);
    }
}
