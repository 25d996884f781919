//! Build-time theme compilation.
//!
//! Resolves the configured themes from the catalog, parses each one and
//! concatenates their canonical CSS into a single stylesheet:
//!
//! ```text
//! /* theme: classic */
//! :root {
//!   ...
//! }
//!
//! /* theme: ocean-breeze */
//! :root {
//!   ...
//! }
//! ```
//!
//! Parsing itself never fails. The hard failure here is a configured theme
//! that has no file, which propagates as [`CatalogError::NotFound`].

use crate::catalog::{self, CatalogError, ThemeEntry};
use crate::config::BuildConfig;
use crate::document::ThemeDocument;
use crate::generate::generate;
use crate::parse::parse;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// One theme that went into the stylesheet.
#[derive(Debug)]
pub struct CompiledTheme {
    pub entry: ThemeEntry,
    pub document: ThemeDocument,
}

#[derive(Debug)]
pub struct CompiledThemes {
    pub themes: Vec<CompiledTheme>,
    pub css: String,
}

/// Read and parse one theme file.
pub fn load_theme(path: &Path) -> Result<ThemeDocument, CompileError> {
    let text = fs::read_to_string(path)?;
    Ok(parse(&text))
}

/// Compile the configured themes from `themes_dir` into one stylesheet.
pub fn compile(themes_dir: &Path, config: &BuildConfig) -> Result<CompiledThemes, CompileError> {
    let entries = catalog::scan(themes_dir)?;
    compile_entries(&entries, themes_dir, config)
}

/// Compile from an already scanned catalog of `themes_dir`.
pub fn compile_entries(
    entries: &[ThemeEntry],
    themes_dir: &Path,
    config: &BuildConfig,
) -> Result<CompiledThemes, CompileError> {
    let selected = select(entries, &config.compile.include, themes_dir)?;

    let mut themes = Vec::with_capacity(selected.len());
    let mut parts = Vec::with_capacity(selected.len());
    for entry in selected {
        let document = load_theme(&entry.path)?;
        tracing::debug!(
            theme = %entry.name,
            variables = document.root.len(),
            overrides = document.override_count(),
            "compiled theme"
        );
        let css = generate(&document);
        parts.push(if config.compile.header_comments {
            format!("/* theme: {} */\n{}", entry.name, css)
        } else {
            css
        });
        themes.push(CompiledTheme {
            entry: entry.clone(),
            document,
        });
    }

    Ok(CompiledThemes {
        themes,
        css: parts.join("\n"),
    })
}

/// Pick the themes to compile: the named list in order, or every numbered
/// theme when the list is empty.
fn select<'a>(
    entries: &'a [ThemeEntry],
    include: &[String],
    themes_dir: &Path,
) -> Result<Vec<&'a ThemeEntry>, CatalogError> {
    if include.is_empty() {
        return Ok(catalog::numbered(entries).collect());
    }
    include
        .iter()
        .map(|name| catalog::find(entries, name.trim(), themes_dir))
        .collect()
}
