//! User configuration for pathmark (stored in ~/.config/pathmark/config.toml)
//!
//! ```toml
//! [highlight]
//! color = "green"
//! font_color = "green"
//! line_width = 3.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{PathmarkError, Result};
use crate::graph::HighlightMarker;

const CONFIG_DIR: &str = "pathmark";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PATHMARK_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PathmarkConfig {
    /// Marker applied to the vertices and edges of the found path
    #[serde(default)]
    pub highlight: HighlightMarker,
}

impl PathmarkConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    PathmarkError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user configuration, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_path(&path)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathmarkError::io_operation("read config", path.display(), e))?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let width = self.highlight.line_width;
        if !width.is_finite() || width <= 0.0 {
            bail_invalid!("highlight line width", width);
        }
        if self.highlight.color.trim().is_empty() {
            bail_invalid!("highlight color", "(empty)");
        }
        if self.highlight.font_color.trim().is_empty() {
            bail_invalid!("highlight font color", "(empty)");
        }
        Ok(())
    }

    /// Returns the source description for display purposes
    pub fn source_display() -> String {
        if std::env::var(CONFIG_DIR_ENV_VAR).is_ok() {
            "custom config directory".to_string()
        } else {
            "~/.config/pathmark/config.toml".to_string()
        }
    }
}
