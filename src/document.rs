//! The theme data model shared by the parser, generator and editor.
//!
//! A [`ThemeDocument`] is built fresh from text on every parse. It has no
//! identity beyond its values: two documents are equal when their root
//! variables, scoped overrides and body classes match.

use crate::scope::Scope;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Variable name → value, in declaration order.
pub type VarMap = IndexMap<String, String>;

/// A parsed theme: root defaults, per-scope overrides and body classes.
///
/// Scopes are keyed by [`Scope`], so iteration follows generation order.
/// A scope that is missing from `scopes` and a scope mapped to an empty
/// [`VarMap`] are the same thing; equality treats them alike.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeDocument {
    pub root: VarMap,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scopes: BTreeMap<Scope, VarMap>,
    #[serde(skip_serializing_if = "IndexSet::is_empty")]
    pub body_classes: IndexSet<String>,
}

impl ThemeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variables overridden in `scope`, or `None` when it has none.
    pub fn scope(&self, scope: Scope) -> Option<&VarMap> {
        self.scopes.get(&scope).filter(|vars| !vars.is_empty())
    }

    pub fn scope_mut(&mut self, scope: Scope) -> &mut VarMap {
        self.scopes.entry(scope).or_default()
    }

    pub fn root_value(&self, name: &str) -> Option<&str> {
        self.root.get(name).map(String::as_str)
    }

    pub fn scoped_value(&self, scope: Scope, name: &str) -> Option<&str> {
        self.scope(scope)
            .and_then(|vars| vars.get(name))
            .map(String::as_str)
    }

    pub fn set_root(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.root.insert(name.into(), value.into());
    }

    pub fn set_scoped(&mut self, scope: Scope, name: impl Into<String>, value: impl Into<String>) {
        self.scope_mut(scope).insert(name.into(), value.into());
    }

    /// Number of scoped overrides across all scopes.
    pub fn override_count(&self) -> usize {
        self.scopes.values().map(IndexMap::len).sum()
    }

    /// Scopes that carry at least one override, in generation order.
    pub fn active_scopes(&self) -> impl Iterator<Item = (Scope, &VarMap)> {
        Scope::ALL
            .into_iter()
            .filter_map(|scope| self.scope(scope).map(|vars| (scope, vars)))
    }
}

impl PartialEq for ThemeDocument {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
            && Scope::ALL
                .into_iter()
                .all(|scope| self.scope(scope) == other.scope(scope))
            && self.body_classes.iter().eq(other.body_classes.iter())
    }
}

impl Eq for ThemeDocument {}

/// Whether `name` is a custom property name the parser recognises:
/// `--` followed by a lowercase letter, then lowercase letters, digits or dashes.
pub fn is_var_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix("--") else {
        return false;
    };
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
