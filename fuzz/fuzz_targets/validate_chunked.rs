#![no_main]

use libfuzzer_sys::fuzz_target;
use tags::{ReaderConfig, validate_reader, validate_reader_with};

fuzz_target!(|input: (u8, &[u8])| {
    let (chunk_size, data) = input;
    let whole = validate_reader(data).ok();
    let config = ReaderConfig {
        chunk_size: usize::from(chunk_size),
    };
    let chunked = validate_reader_with(data, &config).ok();
    assert_eq!(whole, chunked);
});
