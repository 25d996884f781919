//! In-memory model of a live theme editing session.
//!
//! The editor shows one control per root variable in the global panel and
//! one control per root variable in each scope panel. A scope control starts
//! out mirroring its global; typing into it makes it an override. Changing
//! a global cascades to every scope control that was still mirroring it.
//!
//! ```text
//! global  --color-text  #9a9996 → #000000
//! header  --color-text  #9a9996 → #000000   (mirrored, follows)
//! nav     --color-text  #ff0000              (override, untouched)
//! ```
//!
//! [`ThemeEditor::document`] turns the panels back into a [`ThemeDocument`]
//! holding only real overrides, ready for [`generate`].
//!
//! Names that are not `--[a-z][a-z0-9-]*` are ignored by the setters, and
//! `--border` values are kept in canonical `<width> <style> <color>` form so
//! two borders with the same fields always compare equal.

use crate::border::{BORDER_VAR, Border};
use crate::cascade::{cascade_scopes, included_overrides};
use crate::document::{ThemeDocument, VarMap, is_var_name};
use crate::generate::generate;
use crate::scope::Scope;
use indexmap::IndexSet;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct ThemeEditor {
    globals: VarMap,
    controls: BTreeMap<Scope, VarMap>,
    body_classes: IndexSet<String>,
}

impl ThemeEditor {
    /// Open an editing session on a parsed theme.
    pub fn from_document(doc: &ThemeDocument) -> Self {
        let globals = normalized(&doc.root);
        let controls = Scope::ALL
            .into_iter()
            .map(|scope| {
                let mut panel = globals.clone();
                if let Some(overrides) = doc.scope(scope) {
                    panel.extend(normalized(overrides));
                }
                (scope, panel)
            })
            .collect();
        Self {
            globals,
            controls,
            body_classes: doc.body_classes.clone(),
        }
    }

    pub fn global(&self, name: &str) -> Option<&str> {
        self.globals.get(name).map(String::as_str)
    }

    /// The value a scope control currently displays.
    pub fn scoped(&self, scope: Scope, name: &str) -> Option<&str> {
        self.controls
            .get(&scope)
            .and_then(|panel| panel.get(name))
            .map(String::as_str)
    }

    /// Change a global and cascade it into mirroring scope controls.
    ///
    /// A variable that did not exist before appears in every scope panel,
    /// mirroring the new value. Returns how many scope controls moved.
    pub fn set_global(&mut self, name: &str, value: impl Into<String>) -> usize {
        if !is_var_name(name) {
            tracing::debug!(var = name, "ignoring invalid variable name");
            return 0;
        }
        let value = normalize_value(name, value.into());
        let old = self.globals.clone();
        self.globals.insert(name.to_string(), value.clone());
        let moved = cascade_scopes(&old, &self.globals, &mut self.controls);
        for panel in self.controls.values_mut() {
            panel
                .entry(name.to_string())
                .or_insert_with(|| value.clone());
        }
        tracing::debug!(var = name, value = %value, moved, "global changed");
        moved
    }

    /// Remove a global. Scope controls that mirrored it are cleared;
    /// overrides stay and become scope-only variables.
    pub fn remove_global(&mut self, name: &str) -> usize {
        let old = self.globals.clone();
        if self.globals.shift_remove(name).is_none() {
            return 0;
        }
        cascade_scopes(&old, &self.globals, &mut self.controls)
    }

    /// Type a value into a scope control.
    pub fn set_scoped(&mut self, scope: Scope, name: &str, value: impl Into<String>) {
        if !is_var_name(name) {
            tracing::debug!(var = name, %scope, "ignoring invalid variable name");
            return;
        }
        let value = normalize_value(name, value.into());
        self.controls
            .entry(scope)
            .or_default()
            .insert(name.to_string(), value);
    }

    /// Reset a scope control to mirror its global again.
    pub fn reset_scoped(&mut self, scope: Scope, name: &str) {
        let panel = self.controls.entry(scope).or_default();
        match self.globals.get(name) {
            Some(global) => {
                panel.insert(name.to_string(), global.clone());
            }
            None => {
                panel.shift_remove(name);
            }
        }
    }

    pub fn global_border(&self) -> Border {
        Border::parse(self.global(BORDER_VAR).unwrap_or_default())
    }

    pub fn scoped_border(&self, scope: Scope) -> Border {
        Border::parse(self.scoped(scope, BORDER_VAR).unwrap_or_default())
    }

    /// Set the global border from its three fields, cascading as one value.
    pub fn set_global_border(&mut self, border: &Border) -> usize {
        self.set_global(BORDER_VAR, border.to_string())
    }

    pub fn set_scoped_border(&mut self, scope: Scope, border: &Border) {
        self.set_scoped(scope, BORDER_VAR, border.to_string());
    }

    /// Flip a body class on or off. Returns whether it is now on.
    pub fn toggle_body_class(&mut self, class: &str) -> bool {
        let class = class.trim();
        if class.is_empty() {
            return false;
        }
        if self.body_classes.shift_remove(class) {
            false
        } else {
            self.body_classes.insert(class.to_string());
            true
        }
    }

    pub fn body_classes(&self) -> &IndexSet<String> {
        &self.body_classes
    }

    /// The theme as it would be saved: globals plus real overrides only.
    pub fn document(&self) -> ThemeDocument {
        let scopes = self
            .controls
            .iter()
            .map(|(scope, panel)| (*scope, included_overrides(&self.globals, panel)))
            .filter(|(_, overrides)| !overrides.is_empty())
            .collect();
        ThemeDocument {
            root: self.globals.clone(),
            scopes,
            body_classes: self.body_classes.clone(),
        }
    }

    pub fn css(&self) -> String {
        generate(&self.document())
    }
}

/// Canonical form of a value: borders are rewritten from their fields.
fn normalize_value(name: &str, value: String) -> String {
    if name == BORDER_VAR {
        Border::parse(&value).to_string()
    } else {
        value
    }
}

fn normalized(vars: &VarMap) -> VarMap {
    vars.iter()
        .filter(|(name, _)| is_var_name(name))
        .map(|(name, value)| (name.clone(), normalize_value(name, value.clone())))
        .collect()
}
