//! The two-valued display mode and its storage literals.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::fmt;
use std::str::FromStr;

/// Storage key under which the preference is persisted.
pub const STORAGE_KEY: &str = "theme";

/// Light or dark display mode. There is no third state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// Literal persisted to storage and used as the root style marker.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored value that is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode: {0:?}")]
pub struct ThemeParseError(pub String);

impl FromStr for ThemeMode {
    type Err = ThemeParseError;

    /// Exact match only; stored values are written by this crate verbatim.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}
