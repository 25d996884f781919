//! Theme stylesheet parsing.
//!
//! Extracts the custom properties of a theme file into a [`ThemeDocument`].
//! This is a best-effort, single-pass extraction, not a CSS parser:
//!
//! ```text
//! :root {                    → doc.root
//!   --color-text: #9a9996;
//! }
//!
//! header {                   → doc.scopes[header]
//!   --color-text: #ff0000;
//! }
//!
//! button,                    → doc.scopes[button]
//! .button,
//! input[type="submit"] {
//!   --color-bg: #000000;
//! }
//!
//! /* body_classes: dark, wide */   → doc.body_classes
//! ```
//!
//! The editor feeds this function whatever the user has typed so far, so it
//! never fails. A missing block yields an empty map, a missing marker an
//! empty class list, and a declaration that does not look like
//! `--name: value` is skipped. Braces do not nest and comments inside a
//! block are not stripped.

use crate::document::{ThemeDocument, VarMap, is_var_name};
use crate::scope::Scope;
use regex::Regex;
use std::sync::LazyLock;

static ROOT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":root\s*\{([^}]*)\}").expect("root block pattern"));

static BODY_CLASSES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\*\s*body_classes:([^*]*)\*/").expect("body classes pattern")
});

/// One block pattern per scope, anchored at the start of a line so that
/// `nav` does not match inside `.site-nav {`.
static SCOPE_BLOCKS: LazyLock<Vec<(Scope, Regex)>> = LazyLock::new(|| {
    Scope::ALL
        .into_iter()
        .map(|scope| {
            let pattern = format!(
                r"(?m)^[ \t]*{}[ \t]*\{{([^}}]*)\}}",
                regex::escape(scope.selector())
            );
            (scope, Regex::new(&pattern).expect("scope block pattern"))
        })
        .collect()
});

/// Parse theme text into a document.
pub fn parse(text: &str) -> ThemeDocument {
    let mut doc = ThemeDocument::new();

    if let Some(body) = first_block(&ROOT_BLOCK, text) {
        doc.root = parse_declarations(body);
    }

    for (scope, pattern) in SCOPE_BLOCKS.iter() {
        if let Some(body) = first_block(pattern, text) {
            let vars = parse_declarations(body);
            if !vars.is_empty() {
                doc.scopes.insert(*scope, vars);
            }
        }
    }

    if let Some(list) = first_block(&BODY_CLASSES, text) {
        doc.body_classes = parse_class_list(list).collect();
    }

    doc
}

fn first_block<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse the inside of a `{ ... }` block into variables.
///
/// Later declarations of the same name replace earlier ones but keep the
/// first position.
pub fn parse_declarations(body: &str) -> VarMap {
    let mut vars = VarMap::new();
    for piece in body.split(';') {
        match parse_declaration(piece) {
            Some((name, value)) => {
                vars.insert(name.to_string(), value.to_string());
            }
            None if !piece.trim().is_empty() => {
                tracing::trace!(declaration = piece.trim(), "skipping malformed declaration");
            }
            None => {}
        }
    }
    vars
}

/// Split a single `--name: value` declaration, trimming both halves.
fn parse_declaration(piece: &str) -> Option<(&str, &str)> {
    let (name, value) = piece.trim().split_once(':')?;
    let name = name.trim();
    let value = value.trim();
    (is_var_name(name) && !value.is_empty()).then_some((name, value))
}

/// Split a comma-separated class list, dropping empty items.
pub fn parse_class_list(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split(',')
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#":root {
  --color-bg: #ffffff;
  --color-text: #9a9996;
  --border: 1px solid #cccccc;
}

header {
  --color-text: #ff0000;
}

nav {
  --color-bg: #222222;
}

button,
.button,
input[type="submit"] {
  --color-bg: #000000;
  --color-text: #ffffff;
}

/* body_classes: dark-mode, wide */
"#;

    #[test]
    fn parses_root_block() {
        let doc = parse(SAMPLE);
        assert_eq!(doc.root.len(), 3);
        assert_eq!(doc.root_value("--color-bg"), Some("#ffffff"));
        assert_eq!(doc.root_value("--border"), Some("1px solid #cccccc"));
    }

    #[test]
    fn root_preserves_declaration_order() {
        let doc = parse(SAMPLE);
        let names: Vec<&str> = doc.root.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["--color-bg", "--color-text", "--border"]);
    }

    #[test]
    fn parses_scope_blocks() {
        let doc = parse(SAMPLE);
        assert_eq!(
            doc.scoped_value(Scope::Header, "--color-text"),
            Some("#ff0000")
        );
        assert_eq!(doc.scoped_value(Scope::Nav, "--color-bg"), Some("#222222"));
        assert_eq!(doc.scoped_value(Scope::Button, "--color-bg"), Some("#000000"));
        assert!(doc.scope(Scope::Article).is_none());
        assert!(doc.scope(Scope::Form).is_none());
    }

    #[test]
    fn parses_body_classes() {
        let doc = parse(SAMPLE);
        let classes: Vec<&str> = doc.body_classes.iter().map(String::as_str).collect();
        assert_eq!(classes, vec!["dark-mode", "wide"]);
    }

    #[test]
    fn empty_input_is_empty_document() {
        let doc = parse("");
        assert!(doc.root.is_empty());
        assert!(doc.scopes.is_empty());
        assert!(doc.body_classes.is_empty());
    }

    #[test]
    fn missing_root_block_gives_empty_root() {
        let doc = parse("header {\n  --color-text: red;\n}\n");
        assert!(doc.root.is_empty());
        assert_eq!(doc.scoped_value(Scope::Header, "--color-text"), Some("red"));
    }

    #[test]
    fn malformed_declarations_are_dropped() {
        let doc = parse(":root {\n  --ok: 1;\n  color: red;\n  --empty: ;\n  garbage;\n  --Upper: 2;\n}\n");
        assert_eq!(doc.root.len(), 1);
        assert_eq!(doc.root_value("--ok"), Some("1"));
    }

    #[test]
    fn whitespace_around_names_and_values_is_trimmed() {
        let doc = parse(":root {   --a   :    10px   ;--b:2}");
        assert_eq!(doc.root_value("--a"), Some("10px"));
        assert_eq!(doc.root_value("--b"), Some("2"));
    }

    #[test]
    fn values_may_contain_colons() {
        let doc = parse(":root { --font-url: url(https://example.com/font.woff2); }");
        assert_eq!(
            doc.root_value("--font-url"),
            Some("url(https://example.com/font.woff2)")
        );
    }

    #[test]
    fn duplicate_declaration_last_value_wins() {
        let doc = parse(":root { --a: 1; --b: 2; --a: 3; }");
        let pairs: Vec<(&str, &str)> = doc
            .root
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("--a", "3"), ("--b", "2")]);
    }

    #[test]
    fn only_first_root_block_is_used() {
        let doc = parse(":root { --a: 1; }\n:root { --b: 2; }\n");
        assert_eq!(doc.root.len(), 1);
        assert_eq!(doc.root_value("--a"), Some("1"));
    }

    #[test]
    fn scope_names_inside_other_selectors_do_not_match() {
        let doc = parse(".site-nav {\n  --color-bg: red;\n}\n.page-header {\n  --x: 1;\n}\n");
        assert!(doc.scope(Scope::Nav).is_none());
        assert!(doc.scope(Scope::Header).is_none());
    }

    #[test]
    fn button_scope_requires_full_selector_group() {
        let doc = parse("button {\n  --color-bg: red;\n}\n");
        assert!(doc.scope(Scope::Button).is_none());

        let doc = parse("button, .button {\n  --color-bg: red;\n}\n");
        assert!(doc.scope(Scope::Button).is_none());

        let doc = parse("button,\n.button,\ninput[type=\"submit\"] {\n  --color-bg: red;\n}\n");
        assert_eq!(doc.scoped_value(Scope::Button, "--color-bg"), Some("red"));
    }

    #[test]
    fn empty_scope_block_is_not_recorded() {
        let doc = parse("article {\n}\n");
        assert!(doc.scopes.is_empty());
    }

    #[test]
    fn body_classes_drop_empty_items() {
        let doc = parse("/* body_classes: a, , b ,*/");
        let classes: Vec<&str> = doc.body_classes.iter().map(String::as_str).collect();
        assert_eq!(classes, vec!["a", "b"]);
    }

    #[test]
    fn body_classes_are_deduplicated_in_order() {
        let doc = parse("/* body_classes: b, a, b */");
        let classes: Vec<&str> = doc.body_classes.iter().map(String::as_str).collect();
        assert_eq!(classes, vec!["b", "a"]);
    }

    #[test]
    fn unclosed_block_is_ignored() {
        let doc = parse(":root {\n  --a: 1;\n");
        assert!(doc.root.is_empty());
    }

    #[test]
    fn parse_declarations_directly() {
        let vars = parse_declarations("--a: 1; --b: 2");
        assert_eq!(vars.get("--a").map(String::as_str), Some("1"));
        assert_eq!(vars.get("--b").map(String::as_str), Some("2"));
    }
}
