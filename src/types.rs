//! Query and result types for color resolution.

use std::fmt;

use crate::hex::trim;

/// Name reported when the input matches no palette entry.
pub const UNKNOWN: &str = "Unknown";

/// A single color query: the raw input plus its trimmed, lowercased token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorQuery<'a> {
    raw: &'a str,
    token: String,
}

impl<'a> ColorQuery<'a> {
    pub fn new(raw: &'a str) -> Self {
        ColorQuery {
            raw,
            token: trim(raw).to_lowercase(),
        }
    }

    /// The input exactly as received.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The trimmed, lowercased token used for matching.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether the token should be treated as a hex code candidate.
    ///
    /// True when it starts with `#` or is exactly 3 or 6 characters long.
    /// A 3- or 6-letter word that is not a palette name counts as hex-like.
    pub fn is_hex_like(&self) -> bool {
        self.token.starts_with('#') || matches!(self.token.chars().count(), 3 | 6)
    }
}

/// Outcome of resolving a [`ColorQuery`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Normalized hex for known or hex-like inputs, the raw input otherwise.
    pub hex: String,
    /// A palette name, or [`UNKNOWN`].
    pub name: &'static str,
}

impl Resolution {
    pub(crate) fn known(hex: impl Into<String>, name: &'static str) -> Self {
        Resolution {
            hex: hex.into(),
            name,
        }
    }

    pub(crate) fn unknown(hex: impl Into<String>) -> Self {
        Resolution {
            hex: hex.into(),
            name: UNKNOWN,
        }
    }

    /// True if the name came from the palette.
    pub fn is_known(&self) -> bool {
        self.name != UNKNOWN
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.hex, self.name)
    }
}
