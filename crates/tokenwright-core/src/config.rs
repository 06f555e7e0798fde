use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::TokenwrightError;
use crate::export::ExportFormat;
use crate::fonts::font_stack;
use crate::tokens::TokenConfig;

/// Commented template written by `init`; parses to `AppConfig::default()`.
pub const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

const CONFIG_FILE: &str = "config.toml";
const FALLBACK_CONFIG_FILE: &str = "tokenwright.toml";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub design: DesignConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Designer inputs, as edited by a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    pub primary_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    pub base_spacing: f64,
    /// Bare family name, e.g. `"Inter"`.
    pub font_family: String,
    /// Append the system fallback stack to `font_family`.
    pub fallback_stack: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub formats: Vec<ExportFormat>,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            primary_color: "#6366f1".into(),
            secondary_color: Some("#8b5cf6".into()),
            base_spacing: 4.0,
            font_family: "Inter".into(),
            fallback_stack: true,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            formats: ExportFormat::ALL.to_vec(),
        }
    }
}

impl DesignConfig {
    /// Engine input for these settings.
    pub fn to_token_config(&self) -> TokenConfig {
        let font_family = if self.fallback_stack {
            font_stack(&self.font_family)
        } else {
            self.font_family.clone()
        };
        TokenConfig {
            primary_color: self.primary_color.clone(),
            secondary_color: self.secondary_color.clone(),
            base_spacing: Some(self.base_spacing),
            font_family: Some(font_family),
        }
    }
}

impl AppConfig {
    /// Load the user config file if it exists, otherwise built-in defaults.
    pub fn load() -> Result<Self, TokenwrightError> {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from an explicit path. Missing sections and keys take defaults.
    pub fn load_from(path: &Path) -> Result<Self, TokenwrightError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TokenwrightError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| TokenwrightError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), TokenwrightError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| TokenwrightError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Write the commented default template to `path`.
    pub fn write_template(path: &Path) -> Result<(), TokenwrightError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, DEFAULT_CONFIG)?;
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    ///
    /// Falls back to `tokenwright.toml` in the working directory when no home
    /// directory can be resolved.
    pub fn config_path() -> PathBuf {
        config_path_in(ProjectDirs::from("", "", "tokenwright"))
    }
}

fn config_path_in(dirs: Option<ProjectDirs>) -> PathBuf {
    match dirs {
        Some(dirs) => dirs.config_dir().join(CONFIG_FILE),
        None => {
            tracing::warn!(
                fallback = FALLBACK_CONFIG_FILE,
                "No home directory, using config from working directory"
            );
            PathBuf::from(FALLBACK_CONFIG_FILE)
        }
    }
}
