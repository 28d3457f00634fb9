//! Input failures. Malformed markup is never an error: it ends up as
//! diagnostics.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// `line` is the number of the last line fully read before the failure.
    #[error("read failed after line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}
