//! Shared test utilities.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let entries = catalog::scan(tmp.path()).unwrap();
//! let classic = find_theme(&entries, "classic");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::catalog::ThemeEntry;

/// Copy `fixtures/themes/` into a fresh temp directory.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/themes");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

/// Find a catalog entry by name. Panics with the available names on miss.
pub fn find_theme<'a>(entries: &'a [ThemeEntry], name: &str) -> &'a ThemeEntry {
    entries.iter().find(|e| e.name == name).unwrap_or_else(|| {
        let names = theme_names(entries);
        panic!("theme '{name}' not found. Available: {names:?}")
    })
}

/// All theme names in catalog order.
pub fn theme_names(entries: &[ThemeEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}
