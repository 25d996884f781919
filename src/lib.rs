//! # Site Theme
//!
//! Theme stylesheets for a small-business static site. A theme is a plain
//! CSS file of custom properties: defaults in `:root`, optional overrides
//! for five page regions, and a marker listing classes to put on `<body>`.
//!
//! ```css
//! :root {
//!   --color-bg: #ffffff;
//!   --color-text: #9a9996;
//! }
//!
//! header {
//!   --color-text: #ff0000;
//! }
//!
//! /* body_classes: dark-mode */
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`parse`](mod@parse) | Theme text → [`ThemeDocument`], best effort, never fails |
//! | [`generate`](mod@generate) | [`ThemeDocument`] → canonical theme text |
//! | [`cascade`] | Inclusion rule for scoped values and the global-change cascade |
//! | [`editor`] | Live editing session: global/scope controls, border, body classes |
//! | [`border`] | The composite `--border` width/style/color control |
//! | [`scope`] | The closed set of overridable regions and their selectors |
//! | [`document`] | The shared data model |
//! | [`catalog`] | `NNN-name` theme file discovery |
//! | [`compile`] | Concatenates configured themes into one stylesheet |
//! | [`preview`] | Renders a sample page styled by a theme, using Maud |
//! | [`config`] | `config.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Permissive Parsing
//!
//! The editor re-parses on every keystroke, so half-typed input is normal.
//! Missing blocks become empty maps and malformed declarations are skipped;
//! the parser has no error type at all. Only file access can fail.
//!
//! ## Canonical Output
//!
//! Generation always produces the same layout (fixed scope order, two-space
//! indent, one declaration per line), so `generate(parse(generate(d)))` is
//! byte-identical to `generate(d)` and saved themes diff cleanly.
//!
//! ## Overrides Are Differences
//!
//! A scoped value is only written when it differs from the root value. The
//! editor keeps every scope control filled in, mirroring globals, and the
//! cascade moves mirrored controls along when a global changes. Saving then
//! drops everything that still mirrors, leaving only deliberate overrides.

pub mod border;
pub mod cascade;
pub mod catalog;
pub mod compile;
pub mod config;
pub mod document;
pub mod editor;
pub mod generate;
pub mod output;
pub mod parse;
pub mod preview;
pub mod scope;

pub use cascade::should_include;
pub use document::{ThemeDocument, VarMap};
pub use editor::ThemeEditor;
pub use generate::generate;
pub use parse::parse;
pub use scope::Scope;

#[cfg(test)]
pub(crate) mod test_helpers;
