//! End-of-input reconciliation.

use super::Validator;
use crate::tag::SameTag;

enum Step {
    Done,
    /// Exactly one queue still holds records.
    Drain,
    /// Fronts share a name: an error and an extra cancel out.
    Cancel,
    /// Fronts differ: the error front is charged on its own.
    Charge,
}

impl Validator {
    /// Charges every still-open tag, then settles the error queue against the
    /// extras queue until both are empty.
    pub(super) fn reconcile(&mut self) {
        // Innermost unclosed tag first.
        while let Some(record) = self.stack.pop() {
            self.diagnostics.record_tag(&record);
            self.error_q.enqueue(record);
        }

        log::debug!(
            target: "tags.reconcile",
            "reconciling error_q={} extras_q={}",
            self.error_q.len(),
            self.extras_q.len()
        );

        loop {
            let step = match (self.error_q.peek(), self.extras_q.peek()) {
                (None, None) => Step::Done,
                (Some(_), None) | (None, Some(_)) => Step::Drain,
                (Some(error), Some(extra)) if error.same_tag(extra) => Step::Cancel,
                (Some(_), Some(_)) => Step::Charge,
            };
            match step {
                Step::Done => break,
                Step::Drain => {
                    self.drain_leftovers();
                    break;
                }
                Step::Cancel => {
                    self.error_q.dequeue();
                    self.extras_q.dequeue();
                    self.stats.reconciled_pairs = self.stats.reconciled_pairs.saturating_add(1);
                }
                Step::Charge => {
                    if let Some(error) = self.error_q.dequeue() {
                        self.diagnostics.record_tag(&error);
                    }
                }
            }
        }
    }

    /// Reports everything left in either queue.
    fn drain_leftovers(&mut self) {
        while let Some(record) = self.error_q.dequeue() {
            self.diagnostics.record_tag(&record);
        }
        while let Some(record) = self.extras_q.dequeue() {
            self.diagnostics.record_tag(&record);
        }
    }
}
