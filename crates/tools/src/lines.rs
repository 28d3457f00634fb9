//! Line splitting for whole texts and streaming byte sources.
//!
//! A line ends at `\n`, at `\r`, or at a `\r\n` pair. Both terminators are
//! ASCII and never occur inside a multi-byte UTF-8 sequence, so a line is
//! always decoded as a whole and chunk boundaries cannot split a character.
//! Invalid sequences become U+FFFD.

use memchr::memchr2;

/// Incremental line assembly over arbitrary byte chunks.
#[derive(Debug, Default)]
pub struct LineAssembler {
    pending: Vec<u8>,
    scanned: usize,
    /// The previous chunk ended in `\r`; a leading `\n` belongs to it.
    after_cr: bool,
}

impl LineAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `bytes` and hand every line completed by them to `sink`, in order.
    pub fn push_chunk(&mut self, bytes: &[u8], mut sink: impl FnMut(&str)) {
        let mut bytes = bytes;
        if self.after_cr && !bytes.is_empty() {
            self.after_cr = false;
            if bytes[0] == b'\n' {
                bytes = &bytes[1..];
            }
        }
        if bytes.is_empty() {
            return;
        }
        self.pending.extend_from_slice(bytes);

        let mut line_start = 0;
        // Bytes before `scanned` were already searched by an earlier call.
        let mut cursor = self.scanned;
        while let Some(rel) = memchr2(b'\n', b'\r', &self.pending[cursor..]) {
            let end = cursor + rel;
            emit_line(&self.pending[line_start..end], &mut sink);
            let mut next = end + 1;
            if self.pending[end] == b'\r' {
                match self.pending.get(next) {
                    Some(b'\n') => next += 1,
                    Some(_) => {}
                    None => self.after_cr = true,
                }
            }
            line_start = next;
            cursor = next;
        }

        if line_start > 0 {
            self.pending.drain(..line_start);
        }
        self.scanned = self.pending.len();
    }

    /// Flush the final unterminated line, if any.
    ///
    /// A stream ending in a terminator produces no extra empty line.
    pub fn finish(&mut self, mut sink: impl FnMut(&str)) {
        self.after_cr = false;
        if self.pending.is_empty() {
            return;
        }
        emit_line(&self.pending, &mut sink);
        self.pending.clear();
        self.scanned = 0;
    }
}

fn emit_line(raw: &[u8], sink: &mut impl FnMut(&str)) {
    sink(&String::from_utf8_lossy(raw));
}

/// Lines of an in-memory text, split by the same rules as [`LineAssembler`].
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

#[derive(Clone, Debug)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let bytes = self.rest.as_bytes();
        let Some(end) = memchr2(b'\n', b'\r', bytes) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };
        let mut next = end + 1;
        if bytes[end] == b'\r' && bytes.get(next) == Some(&b'\n') {
            next += 1;
        }
        let line = &self.rest[..end];
        self.rest = &self.rest[next..];
        Some(line)
    }
}
