use std::fmt::Write;

pub mod fixtures;

pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    let max = expected.len().max(actual.len());
    let missing = "<missing>";
    let mut out = String::new();
    let mismatch = (0..max).find(|&i| expected.get(i) != actual.get(i));
    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(
            &mut out,
            "first mismatch at diagnostic {} (showing {}..={}):",
            i + 1,
            start + 1,
            end
        );
        for idx in start..end {
            let left = expected.get(idx).map(String::as_str).unwrap_or(missing);
            let right = actual.get(idx).map(String::as_str).unwrap_or(missing);
            let marker = if idx == i { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {left}", idx + 1);
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {right}", idx + 1);
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} diagnostics, actual {} diagnostics",
        expected.len(),
        actual.len()
    );
    out
}
