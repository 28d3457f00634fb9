//! Golden fixtures: `<name>.xml` documents next to `<name>.toml` expectations.
//!
//! ```toml
//! status = "active"   # or "xfail" / "skip"
//! reason = "..."      # required unless active
//! well_formed = false
//! diagnostics = [
//!   "Error at line: 2 <b> is not constructed correctly.",
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FixtureStatus {
    Active,
    Xfail,
    Skip,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expected {
    pub status: FixtureStatus,
    #[serde(default)]
    pub reason: Option<String>,
    pub well_formed: bool,
    #[serde(default)]
    pub diagnostics: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct Fixture {
    pub name: String,
    pub path: PathBuf,
    pub input: String,
    pub expected: Expected,
}

/// Loads every fixture in `dir`, sorted by name.
///
/// Panics on unreadable files, malformed expectations or an `.xml` without
/// its `.toml`, so a broken corpus fails loudly.
pub fn load_fixtures(dir: &Path) -> Vec<Fixture> {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|err| panic!("failed to read fixture dir {dir:?}: {err}"));
    let mut fixtures = Vec::new();
    for entry in entries {
        let path = entry
            .unwrap_or_else(|err| panic!("failed to list fixture dir {dir:?}: {err}"))
            .path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("xml") {
            continue;
        }
        fixtures.push(load_fixture(&path));
    }
    fixtures.sort_by(|a, b| a.name.cmp(&b.name));
    fixtures
}

fn load_fixture(path: &Path) -> Fixture {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_else(|| panic!("fixture file name is not UTF-8: {path:?}"))
        .to_string();
    let input = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture {path:?}: {err}"));
    let toml_path = path.with_extension("toml");
    let content = fs::read_to_string(&toml_path)
        .unwrap_or_else(|err| panic!("failed to read expectations {toml_path:?}: {err}"));
    let expected: Expected = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse expectations {toml_path:?}: {err}"));
    validate_expected(&name, &expected);
    Fixture {
        name,
        path: path.to_path_buf(),
        input,
        expected,
    }
}

fn validate_expected(name: &str, expected: &Expected) {
    if expected.status != FixtureStatus::Active {
        assert!(
            expected.reason.as_deref().is_some_and(|r| !r.trim().is_empty()),
            "fixture '{name}' is {:?} without a reason",
            expected.status
        );
    }
    assert_eq!(
        expected.well_formed,
        expected.diagnostics.is_empty(),
        "fixture '{name}': well_formed must agree with the diagnostics list"
    );
}

/// Substring filter from `TAGNEST_FIXTURE_FILTER`, for running one fixture.
pub struct FixtureFilter(Option<String>);

impl FixtureFilter {
    pub fn from_env() -> Self {
        Self(
            std::env::var("TAGNEST_FIXTURE_FILTER")
                .ok()
                .filter(|value| !value.trim().is_empty()),
        )
    }

    pub fn matches(&self, name: &str) -> bool {
        self.0.as_deref().is_none_or(|needle| name.contains(needle))
    }
}
