//! Theme modes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Active color scheme. Only the color token table is keyed by mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Stable id for config/serialization and `data-theme` attributes
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn all() -> &'static [ThemeMode] {
        const MODES: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];
        &MODES
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
