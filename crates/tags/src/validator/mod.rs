//! Tag-matching engine.
//!
//! A single pass over classified tags keeps an open-tag stack plus two
//! deferral queues. An end tag that does not close the top of the stack is
//! not judged on the spot: it may cancel an earlier deferred tag, close a
//! deeper open tag (charging everything above it), or be parked as an extra
//! closing tag. [`Validator::finish`] then settles the queues against each
//! other, so intercrossed tags are told apart from plain omissions.
//!
//! The engine is reusable. Each [`Validator::run`] starts from a clean state;
//! nothing carries over between documents.

use crate::classify::{classify, extract_name};
use crate::diagnostics::{Diagnostic, Diagnostics, render_report};
use crate::extract::extract_tags;
use crate::queue::TagQueue;
use crate::stack::{SearchOutcome, TagStack};
use crate::tag::{TagKind, TagRecord};
use tools::lines::split_lines;

mod reconcile;
mod stats;

pub use stats::ValidatorStats;

/// Outcome of validating one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    /// True iff no diagnostic was recorded, during the scan or reconciliation.
    pub well_formed: bool,
    /// First-seen order, exact duplicates removed.
    pub diagnostics: Vec<Diagnostic>,
}

impl Validation {
    pub fn report(&self) -> String {
        render_report(&self.diagnostics)
    }

    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Default)]
pub struct Validator {
    stack: TagStack,
    /// Tags that could not be matched when seen; may still be cancelled.
    error_q: TagQueue,
    /// End tags with no open counterpart anywhere in a non-empty stack.
    extras_q: TagQueue,
    diagnostics: Diagnostics,
    stats: ValidatorStats,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.error_q.clear();
        self.extras_q.clear();
        self.diagnostics.clear();
        self.stats = ValidatorStats::default();
    }

    /// Validates a whole document given as lines; line numbers start at 1.
    pub fn run<I, S>(&mut self, lines: I) -> Validation
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reset();
        for (index, line) in lines.into_iter().enumerate() {
            self.push_line(line.as_ref(), index + 1);
        }
        self.finish()
    }

    /// Feeds every tag token found on one line.
    pub fn push_line(&mut self, line: &str, line_number: usize) {
        self.stats.lines = self.stats.lines.saturating_add(1);
        for raw in extract_tags(line) {
            self.push_tag(raw, line_number);
        }
    }

    /// Feeds a single raw tag token, in document order.
    pub fn push_tag(&mut self, raw: &str, line_number: usize) {
        self.stats.tags_seen = self.stats.tags_seen.saturating_add(1);
        let Some(kind) = classify(raw) else {
            // Unrecognised shapes are dropped without a diagnostic.
            self.stats.dropped = self.stats.dropped.saturating_add(1);
            #[cfg(any(test, feature = "debug-stats"))]
            log::trace!(target: "tags.validator", "drop {raw:?} @{line_number}");
            return;
        };
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(
            target: "tags.validator",
            "{kind:?} {raw:?} @{line_number} depth={}",
            self.stack.len()
        );
        match kind {
            TagKind::ProcessingInstruction | TagKind::SelfClosing => {
                self.stats.ignored = self.stats.ignored.saturating_add(1);
            }
            TagKind::Start => {
                self.stats.start_tags = self.stats.start_tags.saturating_add(1);
                self.stack
                    .push(TagRecord::new(&extract_name(raw), raw, line_number));
            }
            TagKind::End => {
                self.stats.end_tags = self.stats.end_tags.saturating_add(1);
                self.handle_end_tag(&extract_name(raw), raw, line_number);
            }
        }
    }

    fn handle_end_tag(&mut self, name: &str, raw: &str, line_number: usize) {
        if self.stack.top_matches(name) {
            self.stack.pop();
        } else if self.error_q.front_matches(name) {
            // Cancels a tag deferred earlier.
            self.error_q.dequeue();
            self.stats.deferred_cancellations = self.stats.deferred_cancellations.saturating_add(1);
        } else if self.stack.is_empty() {
            let record = TagRecord::new(name, raw, line_number);
            self.diagnostics.record_tag(&record);
            self.error_q.enqueue(record);
        } else {
            self.stats.stack_searches = self.stats.stack_searches.saturating_add(1);
            match self.stack.unwind_to(name) {
                SearchOutcome::Found { skipped } => {
                    for record in skipped {
                        self.diagnostics.record_tag(&record);
                        self.error_q.enqueue(record);
                    }
                }
                SearchOutcome::NotFound => {
                    let record = TagRecord::new(name, raw, line_number);
                    self.diagnostics.record_tag(&record);
                    self.extras_q.enqueue(record);
                }
            }
        }
    }

    /// Ends the document: reconciles leftovers and returns the outcome.
    ///
    /// The engine keeps its final state (inspectable through [`Self::stats`])
    /// until the next `reset` or `run`.
    pub fn finish(&mut self) -> Validation {
        self.stats.max_depth = self.stack.max_depth();
        self.reconcile();
        let validation = Validation {
            well_formed: self.diagnostics.is_empty(),
            diagnostics: self.diagnostics.as_slice().to_vec(),
        };
        log::debug!(
            target: "tags.validator",
            "finished: well_formed={} diagnostics={} {:?}",
            validation.well_formed,
            validation.diagnostics.len(),
            self.stats
        );
        validation
    }

    pub fn stats(&self) -> ValidatorStats {
        self.stats
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Open tag names, bottom to top.
    pub fn open_tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.stack.iter_names()
    }

    /// Names currently deferred in the error queue, front first.
    pub fn deferred_tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.error_q.iter().map(TagRecord::name)
    }

    /// Names currently parked as extra closing tags, front first.
    pub fn extra_tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.extras_q.iter().map(TagRecord::name)
    }
}

/// One-shot validation of a document given as lines.
pub fn validate<I, S>(lines: I) -> Validation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Validator::new().run(lines)
}

/// One-shot validation of an in-memory document.
///
/// Lines end at `\n`, `\r` or `\r\n`, as when reading from a stream.
pub fn validate_str(text: &str) -> Validation {
    validate(split_lines(text))
}
