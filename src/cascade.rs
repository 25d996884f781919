//! Rules that decide which scoped values are real overrides.
//!
//! Every scope control in the editor displays a value for every root
//! variable. Until the user touches it, a control simply mirrors the global
//! value. Two rules follow from that:
//!
//! - **Inclusion**: a scoped value is written to the stylesheet only when it
//!   is non-empty and differs from the global value ([`should_include`]).
//! - **Cascade**: when a global changes, controls still showing the old
//!   global follow it to the new one; anything else is an intentional
//!   override and stays put ([`cascade_action`], [`cascade_scopes`]).
//!
//! Comparison is exact string equality. A scoped `#000000` under a root
//! `#ffffff` is an override like any other; black is not "unset".

use crate::document::VarMap;
use crate::scope::Scope;
use std::collections::BTreeMap;

/// Whether a scoped value should appear in generated output.
pub fn should_include(scoped: Option<&str>, global: Option<&str>) -> bool {
    match scoped {
        None | Some("") => false,
        Some(value) => global != Some(value),
    }
}

/// What a scoped control should do after its global changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeAction<'a> {
    /// The control holds an override; leave it.
    Keep,
    /// The control mirrored the old global; show the new one.
    Set(&'a str),
    /// The control mirrored a global that no longer exists.
    Clear,
}

/// Decide how one scoped control reacts to a global change.
pub fn cascade_action<'a>(
    current: &str,
    old_global: Option<&str>,
    new_global: Option<&'a str>,
) -> CascadeAction<'a> {
    if old_global != Some(current) {
        return CascadeAction::Keep;
    }
    match new_global {
        Some(value) => CascadeAction::Set(value),
        None => CascadeAction::Clear,
    }
}

/// Apply a global change to one scope's controls.
///
/// Returns the number of controls that moved.
pub fn cascade_controls(
    old_globals: &VarMap,
    new_globals: &VarMap,
    controls: &mut VarMap,
) -> usize {
    let mut moved = 0;
    controls.retain(|name, current| {
        let action = cascade_action(
            current,
            old_globals.get(name).map(String::as_str),
            new_globals.get(name).map(String::as_str),
        );
        match action {
            CascadeAction::Keep => true,
            CascadeAction::Set(value) => {
                if current.as_str() != value {
                    *current = value.to_string();
                    moved += 1;
                }
                true
            }
            CascadeAction::Clear => {
                moved += 1;
                false
            }
        }
    });
    moved
}

/// Apply a global change to every scope independently.
pub fn cascade_scopes(
    old_globals: &VarMap,
    new_globals: &VarMap,
    scopes: &mut BTreeMap<Scope, VarMap>,
) -> usize {
    scopes
        .iter_mut()
        .map(|(scope, controls)| {
            let moved = cascade_controls(old_globals, new_globals, controls);
            if moved > 0 {
                tracing::debug!(%scope, moved, "cascaded global change");
            }
            moved
        })
        .sum()
}

/// Keep only the scoped values that pass [`should_include`] against `root`.
pub fn included_overrides(root: &VarMap, scoped: &VarMap) -> VarMap {
    scoped
        .iter()
        .filter(|(name, value)| {
            should_include(Some(value.as_str()), root.get(*name).map(String::as_str))
        })
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
