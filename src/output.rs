//! CLI output formatting.
//!
//! Every command has a `format_*` function returning display lines and a
//! `print_*` wrapper that writes them to stdout. Format functions are pure,
//! so tests assert on lines instead of capturing stdout.
//!
//! ## List
//!
//! ```text
//! Themes
//! 001 classic
//!     Source: 010-classic.scss
//! 002 ocean breeze
//!     Source: 020-ocean-breeze.css
//!     draft neon (unlisted)
//!         Source: draft-neon.scss
//! ```
//!
//! ## Parse summary
//!
//! ```text
//! Root (3 variables)
//!     --color-bg: #ffffff
//! header (1 override)
//!     --color-text: #ff0000
//! Body classes
//!     classic, centered
//! ```
//!
//! ## Compile
//!
//! ```text
//! 001 classic (5 variables, 3 overrides)
//! 002 ocean-breeze (4 variables, 3 overrides)
//! Wrote themes.css (2 themes)
//! ```

use crate::catalog::ThemeEntry;
use crate::compile::CompiledThemes;
use crate::document::ThemeDocument;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// list
// ============================================================================

/// Format the theme catalog: numbered themes with a position, unnumbered
/// ones indented and marked unlisted.
pub fn format_catalog(entries: &[ThemeEntry]) -> Vec<String> {
    let mut lines = vec!["Themes".to_string()];
    let mut position = 0;
    for entry in entries {
        let source = file_name(&entry.path);
        if entry.number.is_some() {
            position += 1;
            lines.push(format!("{} {}", format_index(position), entry.title));
            lines.push(format!("    Source: {}", source));
        } else {
            lines.push(format!("    {} (unlisted)", entry.title));
            lines.push(format!("        Source: {}", source));
        }
    }
    if entries.is_empty() {
        lines.push("    (none)".to_string());
    }
    lines
}

pub fn print_catalog(entries: &[ThemeEntry]) {
    for line in format_catalog(entries) {
        println!("{}", line);
    }
}

// ============================================================================
// parse
// ============================================================================

/// Format a human-readable summary of a parsed theme.
pub fn format_document(doc: &ThemeDocument) -> Vec<String> {
    let mut lines = vec![format!(
        "Root ({})",
        plural(doc.root.len(), "variable", "variables")
    )];
    for (name, value) in &doc.root {
        lines.push(format!("    {}: {}", name, value));
    }

    for (scope, vars) in doc.active_scopes() {
        lines.push(format!(
            "{} ({})",
            scope,
            plural(vars.len(), "override", "overrides")
        ));
        for (name, value) in vars {
            lines.push(format!("    {}: {}", name, value));
        }
    }

    if !doc.body_classes.is_empty() {
        let classes: Vec<&str> = doc.body_classes.iter().map(String::as_str).collect();
        lines.push("Body classes".to_string());
        lines.push(format!("    {}", classes.join(", ")));
    }
    lines
}

pub fn print_document(doc: &ThemeDocument) {
    for line in format_document(doc) {
        println!("{}", line);
    }
}

// ============================================================================
// compile
// ============================================================================

/// Format the result of compiling themes into `output`.
pub fn format_compile_output(result: &CompiledThemes, output: &Path) -> Vec<String> {
    let mut lines: Vec<String> = result
        .themes
        .iter()
        .enumerate()
        .map(|(i, theme)| {
            format!(
                "{} {} ({}, {})",
                format_index(i + 1),
                theme.entry.name,
                plural(theme.document.root.len(), "variable", "variables"),
                plural(theme.document.override_count(), "override", "overrides"),
            )
        })
        .collect();
    lines.push(format!(
        "Wrote {} ({})",
        output.display(),
        plural(result.themes.len(), "theme", "themes")
    ));
    lines
}

pub fn print_compile_output(result: &CompiledThemes, output: &Path) {
    for line in format_compile_output(result, output) {
        println!("{}", line);
    }
}
