//! Property tests for the parse/generate pair.

use indexmap::{IndexMap, IndexSet};
use proptest::prelude::*;
use site_theme::{Scope, ThemeDocument, VarMap, generate, parse};

fn var_name() -> impl Strategy<Value = String> {
    "--[a-z][a-z0-9-]{0,10}"
}

fn var_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9#(),.%-]{1,12}"
}

fn var_map() -> impl Strategy<Value = VarMap> {
    prop::collection::vec((var_name(), var_value()), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect::<IndexMap<_, _>>())
}

fn body_classes() -> impl Strategy<Value = IndexSet<String>> {
    prop::collection::vec("[a-z][a-z0-9-]{0,8}", 0..4)
        .prop_map(|classes| classes.into_iter().collect())
}

/// Documents with no redundant scoped values.
fn well_formed_document() -> impl Strategy<Value = ThemeDocument> {
    (
        var_map(),
        prop::collection::vec(var_map(), 5),
        body_classes(),
    )
        .prop_map(|(root, scope_maps, body_classes)| {
            let mut doc = ThemeDocument {
                root,
                body_classes,
                ..ThemeDocument::default()
            };
            for (scope, vars) in Scope::ALL.into_iter().zip(scope_maps) {
                for (name, value) in vars {
                    if doc.root_value(&name) != Some(value.as_str()) {
                        doc.set_scoped(scope, name, value);
                    }
                }
            }
            doc
        })
}

proptest! {
    #[test]
    fn parse_inverts_generate(doc in well_formed_document()) {
        prop_assert_eq!(parse(&generate(&doc)), doc);
    }

    #[test]
    fn generate_is_stable(doc in well_formed_document()) {
        let css = generate(&doc);
        prop_assert_eq!(generate(&parse(&css)), css);
    }

    #[test]
    fn empty_scopes_never_appear(root in var_map()) {
        let mut doc = ThemeDocument { root, ..ThemeDocument::default() };
        for scope in Scope::ALL {
            doc.scope_mut(scope);
        }
        let css = generate(&doc);
        for scope in Scope::ALL {
            let opener = format!("\n{} {{", scope.selector());
            prop_assert!(!css.contains(&opener));
        }
    }

    #[test]
    fn parse_never_panics(text in "\\PC{0,200}") {
        let _ = parse(&text);
    }
}
