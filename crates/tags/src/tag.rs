//! Tag records shared by the stack, the queues and the diagnostics.

/// Kind of a bracketed token, as decided by [`crate::classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `<?xml ... ?>`; never reaches the engine.
    ProcessingInstruction,
    /// `<name ... />`; opens and closes nothing.
    SelfClosing,
    Start,
    End,
}

/// A classified start or end tag.
///
/// `name` is the matching key; `raw` and `line` only feed diagnostics.
/// There is no `PartialEq`: compare through [`SameTag`].
#[derive(Clone, Debug)]
pub struct TagRecord {
    name: Box<str>,
    raw: Box<str>,
    line: usize,
}

impl TagRecord {
    pub fn new(name: &str, raw: &str, line: usize) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
            line,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Original token text, used verbatim in diagnostics.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// 1-based line the tag appeared on.
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Name-only tag identity.
///
/// Two records with the same name are "the same tag" for matching even when
/// their attributes or lines differ.
pub trait SameTag<Rhs: ?Sized = Self> {
    fn same_tag(&self, other: &Rhs) -> bool;
}

impl SameTag for TagRecord {
    fn same_tag(&self, other: &TagRecord) -> bool {
        self.name == other.name
    }
}

impl SameTag<str> for TagRecord {
    fn same_tag(&self, other: &str) -> bool {
        &*self.name == other
    }
}
