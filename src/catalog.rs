//! Theme file discovery.
//!
//! A themes directory holds one stylesheet per theme. Files follow an
//! `NNN-name` convention for ordering:
//!
//! ```text
//! themes/
//! ├── 010-classic.scss      # number 10, name "classic", title "classic"
//! ├── 020-ocean-breeze.css  # number 20, name "ocean-breeze", title "ocean breeze"
//! └── draft-neon.scss       # unnumbered, name "draft-neon"
//! ```
//!
//! Numbered themes sort by number and are what `compile` picks up by
//! default. Unnumbered themes sort after them by name and are only compiled
//! when named explicitly. Only `.css` and `.scss` files directly inside the
//! directory count; subdirectories are not searched.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot read themes directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Theme '{name}' not found in {dir}")]
    NotFound { name: String, dir: PathBuf },
}

const THEME_EXTENSIONS: &[&str] = &["css", "scss"];

/// A theme file found in the themes directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeEntry {
    /// File stem with the number prefix removed.
    pub name: String,
    /// Name with dashes turned into spaces.
    pub title: String,
    /// Ordering prefix, if the file has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    pub path: PathBuf,
}

impl ThemeEntry {
    fn from_path(path: PathBuf) -> Option<Self> {
        let stem = path.file_stem()?.to_string_lossy().into_owned();
        let (number, name) = split_number_prefix(&stem);
        if name.is_empty() {
            return None;
        }
        Some(Self {
            title: name.replace('-', " "),
            name: name.to_string(),
            number,
            path,
        })
    }

    /// The file stem as written on disk, prefix included.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Split `020-ocean` into `(Some(20), "ocean")`.
///
/// A stem without a numeric prefix comes back whole: `draft-neon` gives
/// `(None, "draft-neon")`.
fn split_number_prefix(stem: &str) -> (Option<u32>, &str) {
    match stem.split_once('-') {
        Some((prefix, rest))
            if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            match prefix.parse() {
                Ok(number) => (Some(number), rest),
                Err(_) => (None, stem),
            }
        }
        _ => (None, stem),
    }
}

fn is_theme_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            THEME_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// List the themes in a directory: numbered first by number, then the rest
/// by name.
pub fn scan(themes_dir: &Path) -> Result<Vec<ThemeEntry>, CatalogError> {
    let mut entries = Vec::new();
    for dir_entry in WalkDir::new(themes_dir).min_depth(1).max_depth(1) {
        let dir_entry = dir_entry?;
        if !dir_entry.file_type().is_file() || !is_theme_file(dir_entry.path()) {
            continue;
        }
        match ThemeEntry::from_path(dir_entry.into_path()) {
            Some(entry) => entries.push(entry),
            None => tracing::debug!("skipping theme file without a name"),
        }
    }

    entries.sort_by(|a, b| {
        (a.number.unwrap_or(u32::MAX), &a.name).cmp(&(b.number.unwrap_or(u32::MAX), &b.name))
    });
    tracing::debug!(dir = %themes_dir.display(), count = entries.len(), "scanned themes");
    Ok(entries)
}

/// Look up a theme by name (`ocean`) or by full stem (`020-ocean`).
pub fn find<'a>(
    entries: &'a [ThemeEntry],
    name: &str,
    themes_dir: &Path,
) -> Result<&'a ThemeEntry, CatalogError> {
    entries
        .iter()
        .find(|e| e.name == name)
        .or_else(|| entries.iter().find(|e| e.stem() == name))
        .ok_or_else(|| CatalogError::NotFound {
            name: name.to_string(),
            dir: themes_dir.to_path_buf(),
        })
}

/// Numbered themes, in order. These are compiled when no list is configured.
pub fn numbered(entries: &[ThemeEntry]) -> impl Iterator<Item = &ThemeEntry> {
    entries.iter().filter(|e| e.number.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn split_numbered_stem() {
        assert_eq!(split_number_prefix("020-ocean-breeze"), (Some(20), "ocean-breeze"));
        assert_eq!(split_number_prefix("000-first"), (Some(0), "first"));
    }

    #[test]
    fn split_unnumbered_stem() {
        assert_eq!(split_number_prefix("draft-neon"), (None, "draft-neon"));
        assert_eq!(split_number_prefix("classic"), (None, "classic"));
        assert_eq!(split_number_prefix("-odd"), (None, "-odd"));
    }

    #[test]
    fn number_only_stem_has_no_name() {
        assert_eq!(split_number_prefix("010-"), (Some(10), ""));
        assert!(ThemeEntry::from_path(PathBuf::from("010-.css")).is_none());
    }

    #[test]
    fn scan_finds_fixture_themes_in_order() {
        let tmp = setup_fixtures();
        let entries = scan(tmp.path()).unwrap();
        assert_eq!(theme_names(&entries), vec!["classic", "ocean-breeze", "draft-neon"]);
    }

    #[test]
    fn scan_derives_titles_and_numbers() {
        let tmp = setup_fixtures();
        let entries = scan(tmp.path()).unwrap();
        let ocean = find_theme(&entries, "ocean-breeze");
        assert_eq!(ocean.number, Some(20));
        assert_eq!(ocean.title, "ocean breeze");
        assert_eq!(ocean.stem(), "020-ocean-breeze");
    }

    #[test]
    fn scan_ignores_other_files_and_subdirectories() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("010-a.css"), ":root {}").unwrap();
        fs::write(tmp.path().join("notes.md"), "# notes").unwrap();
        fs::write(tmp.path().join("config.toml"), "").unwrap();
        fs::create_dir(tmp.path().join("020-nested.css")).unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/030-b.css"), ":root {}").unwrap();

        let entries = scan(tmp.path()).unwrap();
        assert_eq!(theme_names(&entries), vec!["a"]);
    }

    #[test]
    fn scan_accepts_uppercase_extension() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("010-loud.SCSS"), ":root {}").unwrap();
        assert_eq!(theme_names(&scan(tmp.path()).unwrap()), vec!["loud"]);
    }

    #[test]
    fn scan_missing_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = scan(&tmp.path().join("nope"));
        assert!(matches!(result, Err(CatalogError::Walk(_))));
    }

    #[test]
    fn find_by_name_or_stem() {
        let tmp = setup_fixtures();
        let entries = scan(tmp.path()).unwrap();
        assert_eq!(find(&entries, "classic", tmp.path()).unwrap().number, Some(10));
        assert_eq!(find(&entries, "010-classic", tmp.path()).unwrap().name, "classic");
    }

    #[test]
    fn find_missing_theme_is_not_found() {
        let tmp = setup_fixtures();
        let entries = scan(tmp.path()).unwrap();
        let err = find(&entries, "sunset", tmp.path()).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
        assert!(err.to_string().contains("sunset"));
    }

    #[test]
    fn numbered_skips_drafts() {
        let tmp = setup_fixtures();
        let entries = scan(tmp.path()).unwrap();
        let names: Vec<&str> = numbered(&entries).map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["classic", "ocean-breeze"]);
    }
}
