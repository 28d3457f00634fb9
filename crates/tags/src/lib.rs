//! Well-formedness checking of tag nesting in markup documents.
//!
//! Only tags are looked at: text, attributes, entities, comments and DOCTYPE
//! declarations are never analysed. The output is a yes/no verdict plus an
//! ordered list of diagnostics pointing at the offending tags.

pub mod perf_fixtures;

mod classify;
mod diagnostics;
mod error;
mod extract;
mod queue;
mod reader;
mod stack;
mod tag;
mod validator;

pub use crate::classify::{classify, extract_name};
pub use crate::diagnostics::{Diagnostic, Diagnostics, SUCCESS_MESSAGE};
pub use crate::error::ValidateError;
pub use crate::extract::{TagTokens, extract_tags};
pub use crate::queue::TagQueue;
pub use crate::reader::{
    DEFAULT_CHUNK_SIZE, ReaderConfig, validate_path, validate_reader, validate_reader_with,
};
pub use crate::stack::{SearchOutcome, TagStack};
pub use crate::tag::{SameTag, TagKind, TagRecord};
pub use crate::validator::{Validation, Validator, ValidatorStats, validate, validate_str};
