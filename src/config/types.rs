use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "logs";
pub const DEFAULT_FILE_PREFIX: &str = "screenshot";
pub const DEFAULT_EXTENSION: &str = "png";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// 截圖儲存設定，對應 settings.json
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SaverSettings {
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub extension: String,
    pub timestamp_format: String,
}

impl Default for SaverSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: SaverSettings,
}
