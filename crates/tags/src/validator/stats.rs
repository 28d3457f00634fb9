/// Per-run counters. Reset with the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidatorStats {
    pub lines: u64,
    pub tags_seen: u64,
    pub start_tags: u64,
    pub end_tags: u64,
    /// Processing instructions and self-closing tags.
    pub ignored: u64,
    /// Tokens of no recognised shape.
    pub dropped: u64,
    pub stack_searches: u64,
    /// End tags that cancelled the front of the error queue mid-scan.
    pub deferred_cancellations: u64,
    /// Error/extra pairs cancelled during reconciliation.
    pub reconciled_pairs: u64,
    pub max_depth: u32,
}
