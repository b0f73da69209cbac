//! Configuration handling for the TUI

use crate::state::{View, DEFAULT_INTERACTION_MILESTONE, DEFAULT_MOUSE_MILESTONE};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Start in dark mode
    pub dark_mode: Option<bool>,
    /// View shown on startup: "events", "widgets" or "form"
    pub start_view: Option<String>,
    /// Clicks between "interactions" milestone messages
    pub interaction_milestone: Option<u64>,
    /// Mouse movements between milestone messages
    pub mouse_milestone: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "signup-tui", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode.unwrap_or(false)
    }

    /// Startup view; unknown names fall back to the default view
    pub fn start_view(&self) -> View {
        self.start_view
            .as_deref()
            .and_then(View::from_config)
            .unwrap_or_default()
    }

    pub fn interaction_milestone(&self) -> u64 {
        self.interaction_milestone
            .unwrap_or(DEFAULT_INTERACTION_MILESTONE)
    }

    pub fn mouse_milestone(&self) -> u64 {
        self.mouse_milestone.unwrap_or(DEFAULT_MOUSE_MILESTONE)
    }
}
