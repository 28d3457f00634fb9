//! Stack of open tags.

use crate::tag::{SameTag, TagRecord};

/// Result of [`TagStack::unwind_to`].
#[derive(Debug)]
pub enum SearchOutcome {
    /// The target was open. It has been closed and removed together with
    /// everything above it; `skipped` holds those records ordered from the
    /// one directly above the match up to the former top.
    Found { skipped: Vec<TagRecord> },
    /// The target is not open anywhere. The stack is untouched.
    NotFound,
}

/// Open-tag stack with deterministic push/pop behavior.
///
/// Top is the most recently opened tag that is still open.
#[derive(Clone, Debug, Default)]
pub struct TagStack {
    items: Vec<TagRecord>,
    max_depth: u32,
}

impl TagStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.max_depth = 0;
    }

    pub fn push(&mut self, record: TagRecord) {
        self.items.push(record);
        self.max_depth = self.max_depth.max(self.items.len() as u32);
    }

    pub fn pop(&mut self) -> Option<TagRecord> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&TagRecord> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Deepest nesting seen since the last `clear`.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn top_matches(&self, name: &str) -> bool {
        self.peek().is_some_and(|top| top.same_tag(name))
    }

    /// Open tag names, bottom to top.
    pub fn iter_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(TagRecord::name)
    }

    /// Bounded search for an open `name`, nearest to the top first.
    ///
    /// On a hit the matching record is discarded and the records above it are
    /// handed back; on a miss nothing moves. The index is located before any
    /// mutation, so a failed search cannot disturb the stack.
    pub fn unwind_to(&mut self, name: &str) -> SearchOutcome {
        let Some(index) = self.items.iter().rposition(|record| record.same_tag(name)) else {
            return SearchOutcome::NotFound;
        };
        let skipped = self.items.split_off(index + 1);
        let matched = self.items.pop();
        debug_assert!(matched.is_some_and(|record| record.same_tag(name)));
        SearchOutcome::Found { skipped }
    }
}
