use crate::config::types::{Config, SaverSettings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

pub const SETTINGS_FILE: &str = "settings.json";

impl Config {
    /// 載入設定；settings.json 不存在或無法解析時使用預設值
    #[must_use]
    pub fn new() -> Self {
        let settings = match Self::load_settings(Path::new(SETTINGS_FILE)) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Falling back to default settings: {e:#}");
                SaverSettings::default()
            }
        };

        Self { settings }
    }

    pub fn load_settings(path: &Path) -> Result<SaverSettings> {
        if !path.exists() {
            return Ok(SaverSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}
