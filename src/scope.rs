//! The fixed set of selector contexts a theme can override.
//!
//! A theme stylesheet declares its defaults in `:root` and may override any
//! of them inside five scope blocks. The set is closed: the editor exposes a
//! control group per scope and the generator emits them in declaration order
//! of [`Scope::ALL`].
//!
//! | Scope | Selector |
//! |-------|----------|
//! | header | `header` |
//! | nav | `nav` |
//! | article | `article` |
//! | form | `form` |
//! | button | `button,\n.button,\ninput[type="submit"]` |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A selector context that may override root variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Header,
    Nav,
    Article,
    Form,
    Button,
}

impl Scope {
    /// Every scope, in generation order.
    pub const ALL: [Scope; 5] = [
        Scope::Header,
        Scope::Nav,
        Scope::Article,
        Scope::Form,
        Scope::Button,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scope::Header => "header",
            Scope::Nav => "nav",
            Scope::Article => "article",
            Scope::Form => "form",
            Scope::Button => "button",
        }
    }

    /// The selector text written in front of this scope's block.
    ///
    /// Only `button` differs from its name: it covers the element, the
    /// `.button` class and submit inputs, one selector per line.
    pub fn selector(self) -> &'static str {
        match self {
            Scope::Button => "button,\n.button,\ninput[type=\"submit\"]",
            other => other.name(),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scope '{0}' (expected one of header, nav, article, form, button)")]
pub struct UnknownScope(pub String);

impl FromStr for Scope {
    type Err = UnknownScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .into_iter()
            .find(|scope| scope.name() == s)
            .ok_or_else(|| UnknownScope(s.to_string()))
    }
}
