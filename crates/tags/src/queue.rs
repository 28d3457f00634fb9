//! FIFO queues of deferred tags.

use std::collections::VecDeque;

use crate::tag::{SameTag, TagRecord};

#[derive(Clone, Debug, Default)]
pub struct TagQueue {
    items: VecDeque<TagRecord>,
}

impl TagQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, record: TagRecord) {
        self.items.push_back(record);
    }

    pub fn dequeue(&mut self) -> Option<TagRecord> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&TagRecord> {
        self.items.front()
    }

    pub fn front_matches(&self, name: &str) -> bool {
        self.peek().is_some_and(|front| front.same_tag(name))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagRecord> + '_ {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::TagQueue;
    use crate::tag::TagRecord;

    #[test]
    fn enqueue_dequeue_is_fifo() {
        let mut queue = TagQueue::new();
        assert!(queue.peek().is_none());
        assert!(queue.dequeue().is_none());

        queue.enqueue(TagRecord::new("a", "</a>", 1));
        queue.enqueue(TagRecord::new("b", "</b>", 2));
        assert!(queue.front_matches("a"));
        assert!(!queue.front_matches("b"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue().map(|r| r.line()), Some(1));
        assert_eq!(queue.peek().map(TagRecord::name), Some("b"));
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut queue = TagQueue::new();
        queue.enqueue(TagRecord::new("a", "</a>", 1));
        queue.clear();
        assert!(queue.is_empty());
        assert!(!queue.front_matches("a"));
    }
}
