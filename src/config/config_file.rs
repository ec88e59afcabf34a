use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The config file
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Dmenu-style command used to present choices.
    /// The per-category prompt is appended as the final argument.
    pub selector: String,
    /// Prefix under which the system-wide applications directory lives
    pub prefix: PathBuf,
}

impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile {
            selector: "rofi -dmenu -i -p".into(),
            prefix: "/usr/local".into(),
        }
    }
}

impl ConfigFile {
    /// Load ~/.config/defaultr/defaultr.toml
    #[mutants::skip] // Cannot test directly, depends on system state
    pub fn load() -> Result<Self> {
        Ok(confy::load("defaultr")?)
    }
}
