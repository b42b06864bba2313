//! TOML-based token overrides
//!
//! Designers can overlay individual color entries per mode without
//! rebuilding (the stylesheet path re-emits the variables sheet instead):
//!
//! ```toml
//! [colors.light]
//! primary = "#1e66f5"
//!
//! [colors.dark]
//! primary = "#89b4fa"
//! ```
//!
//! Overlays produce a new owned [`TokenTables`]; the built-in tables are
//! never mutated.

use crate::tables::TokenTables;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TokenOverrides {
    #[serde(default)]
    pub colors: ColorOverrides,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ColorOverrides {
    #[serde(default)]
    pub light: BTreeMap<String, String>,
    #[serde(default)]
    pub dark: BTreeMap<String, String>,
}

impl TokenOverrides {
    /// Parse overrides from a TOML document
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    pub fn is_empty(&self) -> bool {
        self.colors.light.is_empty() && self.colors.dark.is_empty()
    }

    /// Overlay these overrides on a base table set, producing a new one
    pub fn apply(&self, base: &TokenTables) -> TokenTables {
        let mut tables = base.clone();
        for (name, hex) in &self.colors.light {
            tables.colors_light.insert(name.clone(), hex.clone());
        }
        for (name, hex) in &self.colors.dark {
            tables.colors_dark.insert(name.clone(), hex.clone());
        }
        tables
    }
}
