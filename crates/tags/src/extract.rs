//! Bracketed token extraction from a single line of markup.

use memchr::memchr;

/// Iterator over every `<...>` token of a line, left to right.
///
/// A token runs from a `<` to the next `>` and holds at least one byte in
/// between. A `<` met inside a token belongs to it (`<a<b>` is one token); a
/// `<` with no closing `>` later on the line yields nothing.
#[derive(Clone, Debug)]
pub struct TagTokens<'a> {
    line: &'a str,
    pos: usize,
}

pub fn extract_tags(line: &str) -> TagTokens<'_> {
    TagTokens { line, pos: 0 }
}

impl<'a> Iterator for TagTokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.line.as_bytes();
        // Slices are cut at ASCII `<` and after ASCII `>`, so both ends stay
        // on UTF-8 char boundaries.
        loop {
            let open = self.pos + memchr(b'<', &bytes[self.pos..])?;
            let body = open + 1;
            let Some(rel) = memchr(b'>', &bytes[body..]) else {
                self.pos = bytes.len();
                return None;
            };
            let close = body + rel;
            if close == body {
                // `<>` is not a token; rescan from the `>`.
                self.pos = close;
                continue;
            }
            self.pos = close + 1;
            debug_assert!(self.line.is_char_boundary(open));
            debug_assert!(self.line.is_char_boundary(self.pos));
            return Some(&self.line[open..self.pos]);
        }
    }
}
