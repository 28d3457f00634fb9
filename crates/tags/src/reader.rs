//! Streaming front-end: bytes in, validation out.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tools::lines::LineAssembler;

use crate::error::ValidateError;
use crate::validator::{Validation, Validator};

pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

#[derive(Clone, Debug)]
pub struct ReaderConfig {
    /// Read buffer size in bytes; values below 1 are treated as 1.
    pub chunk_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

pub fn validate_reader<R: Read>(reader: R) -> Result<Validation, ValidateError> {
    validate_reader_with(reader, &ReaderConfig::default())
}

pub fn validate_reader_with<R: Read>(
    mut reader: R,
    config: &ReaderConfig,
) -> Result<Validation, ValidateError> {
    let mut validator = Validator::new();
    let mut assembler = LineAssembler::new();
    let mut buf = vec![0u8; config.chunk_size.max(1)];
    let mut line_number = 0usize;

    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(ValidateError::Read {
                    line: line_number,
                    source,
                });
            }
        };
        assembler.push_chunk(&buf[..read], |line| {
            line_number += 1;
            validator.push_line(line, line_number);
        });
    }
    assembler.finish(|line| {
        line_number += 1;
        validator.push_line(line, line_number);
    });

    log::debug!(target: "tags.reader", "read {line_number} lines");
    Ok(validator.finish())
}

/// Opens and validates the file at `path`. The file is closed on every path
/// out of this function.
pub fn validate_path(path: impl AsRef<Path>) -> Result<Validation, ValidateError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ValidateError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(target: "tags.reader", "validating {}", path.display());
    validate_reader(file)
}
