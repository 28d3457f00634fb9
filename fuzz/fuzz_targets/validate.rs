#![no_main]

use libfuzzer_sys::fuzz_target;
use tags::{Validator, validate_reader};

fuzz_target!(|data: &[u8]| {
    let Ok(first) = validate_reader(data) else {
        return;
    };
    assert_eq!(first.well_formed, first.diagnostics.is_empty());
    assert!(!first.report().is_empty());

    let text = String::from_utf8_lossy(data);
    let mut validator = Validator::new();
    let again = validator.run(text.lines());
    let once_more = validator.run(text.lines());
    assert_eq!(again, once_more);
});
