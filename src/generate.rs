//! Canonical theme stylesheet generation.
//!
//! The inverse of [`crate::parse`]. Output always has the same shape:
//!
//! ```text
//! :root {
//!   --color-bg: #ffffff;
//!   --color-text: #000000;
//! }
//!
//! header {
//!   --color-text: #ff0000;
//! }
//!
//! button,
//! .button,
//! input[type="submit"] {
//!   --color-bg: #000000;
//! }
//!
//! /* body_classes: dark-mode, wide */
//! ```
//!
//! - `:root` comes first and is always present, even when empty.
//! - Scope blocks follow in [`Scope::ALL`] order. Scoped values that fail
//!   [`should_include`] are dropped, and a scope left with nothing is omitted.
//! - Two-space indentation, one declaration per line, a blank line between
//!   blocks.
//! - The body class marker is appended only when there are classes.
//! - Names the parser would not read back (see [`is_var_name`]) are skipped.
//!
//! For any document whose values contain no `;` or `}` and whose scoped
//! values differ from root, `parse(generate(doc)) == doc`.

use crate::cascade::should_include;
use crate::document::{ThemeDocument, VarMap, is_var_name};
use crate::scope::Scope;
use indexmap::IndexSet;
use std::collections::BTreeMap;

/// Render a document as canonical CSS.
pub fn generate(doc: &ThemeDocument) -> String {
    generate_from_parts(&doc.root, &doc.scopes, &doc.body_classes)
}

/// Render root variables, scope overrides and body classes as canonical CSS.
pub fn generate_from_parts(
    root: &VarMap,
    scopes: &BTreeMap<Scope, VarMap>,
    body_classes: &IndexSet<String>,
) -> String {
    let mut blocks = vec![render_block(":root", root.iter())];

    for scope in Scope::ALL {
        let Some(vars) = scopes.get(&scope) else {
            continue;
        };
        let mut included = vars
            .iter()
            .filter(|(name, value)| {
                is_var_name(name)
                    && should_include(Some(value.as_str()), root.get(*name).map(String::as_str))
            })
            .peekable();
        if included.peek().is_some() {
            blocks.push(render_block(scope.selector(), included));
        }
    }

    if !body_classes.is_empty() {
        blocks.push(body_classes_comment(body_classes));
    }

    blocks.join("\n")
}

fn render_block<'a>(
    selector: &str,
    vars: impl Iterator<Item = (&'a String, &'a String)>,
) -> String {
    let mut block = format!("{} {{\n", selector);
    for (name, value) in vars.filter(|(name, value)| is_var_name(name) && !value.is_empty()) {
        block.push_str(&format!("  {}: {};\n", name, value));
    }
    block.push_str("}\n");
    block
}

/// The trailing `/* body_classes: ... */` marker.
pub fn body_classes_comment(classes: &IndexSet<String>) -> String {
    let list: Vec<&str> = classes.iter().map(String::as_str).collect();
    format!("/* body_classes: {} */\n", list.join(", "))
}
