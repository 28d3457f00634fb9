use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("crates/tags/tests/fixtures")
        .join(name)
}

fn tagnest(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tagnest"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn tagnest")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn well_formed_file_prints_success_sentence() {
    let path = fixture("well_formed_note.xml");
    let output = tagnest(&[path.to_str().expect("utf-8 path")]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with(&format!("Parsing XML file: {}\n", path.display())));
    assert!(out.contains("XML document is constructed correctly.\n"));
}

#[test]
fn malformed_file_prints_diagnostics_and_still_succeeds() {
    let path = fixture("intercrossed.xml");
    let output = tagnest(&[path.to_str().expect("utf-8 path")]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.ends_with("Error at line: 2 <i> is not constructed correctly.\n"));
    assert!(!out.contains("<b>"));
    assert!(!out.contains("XML document is constructed correctly."));
}

#[test]
fn strict_mode_fails_on_malformed_file() {
    let path = fixture("stray_end_tag.xml");
    let output = tagnest(&["--strict", path.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Error at line: 3 </root>"));

    let clean = fixture("text_only.xml");
    let output = tagnest(&["--strict", clean.to_str().expect("utf-8 path")]);
    assert!(output.status.success());
}

#[test]
fn missing_or_extra_arguments_print_usage() {
    let none = tagnest(&[]);
    assert!(!none.status.success());
    assert!(String::from_utf8_lossy(&none.stderr).contains("Usage"));

    let extra = tagnest(&["a.xml", "b.xml"]);
    assert!(!extra.status.success());
    assert!(String::from_utf8_lossy(&extra.stderr).contains("Usage"));
}

#[test]
fn unreadable_file_fails_with_message() {
    let output = tagnest(&["/definitely/not/here.xml"]);
    assert_eq!(output.status.code(), Some(1));
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("error reading file /definitely/not/here.xml"), "{err}");
}
