//! The composite border control.
//!
//! The editor shows a border as three inputs (width, style, color) but the
//! theme stores it as a single `--border` shorthand. For the cascade the
//! three fields count as one value: a scoped border follows the global only
//! when all three still match it.

use std::fmt;

/// Variable that holds the border shorthand.
pub const BORDER_VAR: &str = "--border";

/// A `<width> <style> <color>` border shorthand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Border {
    pub width: String,
    pub style: String,
    pub color: String,
}

impl Border {
    pub fn new(
        width: impl Into<String>,
        style: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            width: width.into(),
            style: style.into(),
            color: color.into(),
        }
    }

    /// Split a shorthand value into its fields.
    ///
    /// The first two whitespace-separated tokens are width and style;
    /// everything after is the color, so `rgb(0, 0, 0)` survives intact.
    /// Missing fields are left empty.
    pub fn parse(value: &str) -> Self {
        let (width, rest) = split_token(value);
        let (style, rest) = split_token(rest);
        Self::new(width, style, rest.trim())
    }
}

fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], &s[end..]),
        None => (s, ""),
    }
}

impl fmt::Display for Border {
    /// Joins the non-empty fields with single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [&self.width, &self.style, &self.color];
        let mut first = true;
        for field in fields.into_iter().filter(|s| !s.is_empty()) {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(field)?;
            first = false;
        }
        Ok(())
    }
}
