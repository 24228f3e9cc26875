use crate::config::{DEFAULT_TIMESTAMP_FORMAT, SaverSettings};
use chrono::{DateTime, Local};
use log::warn;
use std::fmt::Write as _;

/// 依時間產生檔名，例如 `screenshot_20240101_120000.png`
///
/// 只精確到秒，同一秒內產生的檔名相同。
#[must_use]
pub fn screenshot_file_name(settings: &SaverSettings, timestamp: &DateTime<Local>) -> String {
    let mut stamp = String::new();
    if write!(stamp, "{}", timestamp.format(&settings.timestamp_format)).is_err() {
        warn!(
            "Invalid timestamp format {:?}, using {DEFAULT_TIMESTAMP_FORMAT}",
            settings.timestamp_format
        );
        stamp = timestamp.format(DEFAULT_TIMESTAMP_FORMAT).to_string();
    }

    format!("{}_{stamp}.{}", settings.file_prefix, settings.extension)
}
