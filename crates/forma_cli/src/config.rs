//! Forma configuration file handling

use anyhow::{Context, Result};
use forma_theme::TokenOverrides;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level Forma configuration (forma.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FormaConfig {
    #[serde(default)]
    pub emit: EmitConfig,
    /// Token overlays applied on the built-in tables before emission
    #[serde(default)]
    pub tokens: TokenOverrides,
}

/// Emission configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct EmitConfig {
    /// Output directory for generated stylesheets
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_output() -> String {
    "dist/css".to_string()
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

impl FormaConfig {
    /// Load the config file, or the defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(FormaConfig::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_is_absent() {
        let config = FormaConfig::load_or_default(Path::new("/nonexistent/forma.toml")).unwrap();
        assert_eq!(config.emit.output, "dist/css");
        assert!(config.tokens.is_empty());
    }

    #[test]
    fn parses_emit_and_token_sections() {
        let config: FormaConfig = toml::from_str(
            r##"
            [emit]
            output = "build/styles"

            [tokens.colors.light]
            primary = "#1e66f5"
            "##,
        )
        .unwrap();
        assert_eq!(config.emit.output, "build/styles");
        assert_eq!(config.tokens.colors.light["primary"], "#1e66f5");
    }
}
