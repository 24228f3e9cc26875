use crate::config::SaverSettings;
use crate::error::{SaveError, SaveResult};
use crate::tools::{DataUrl, ensure_directory_exists, screenshot_file_name};
use chrono::{DateTime, Local};
use console::style;
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

/// 截圖儲存元件
pub struct ScreenshotSaver {
    settings: SaverSettings,
}

impl ScreenshotSaver {
    pub const fn new(settings: SaverSettings) -> Self {
        Self { settings }
    }

    /// 儲存截圖；任何步驟失敗都只輸出說明並回傳 `None`
    #[must_use]
    pub fn save(&self, image_data_url: Option<&str>) -> Option<PathBuf> {
        println!("{}", style("開始解析圖片資料...").dim());

        match self.try_save(image_data_url) {
            Ok(path) => {
                println!(
                    "{} {}",
                    style("成功將圖片儲存到:").green(),
                    path.display()
                );
                Some(path)
            }
            Err(e) => {
                warn!("Screenshot save failed ({}): {e}", e.kind());
                println!("{} {}", style("錯誤:").red().bold(), e);
                None
            }
        }
    }

    pub fn try_save(&self, image_data_url: Option<&str>) -> SaveResult<PathBuf> {
        self.try_save_at(image_data_url, Local::now())
    }

    /// 以指定時間產生檔名；同一秒內重複呼叫會覆寫前一個檔案
    pub fn try_save_at(
        &self,
        image_data_url: Option<&str>,
        now: DateTime<Local>,
    ) -> SaveResult<PathBuf> {
        let input = match image_data_url {
            None => return Err(SaveError::InvalidInput("未提供資料")),
            Some("") => return Err(SaveError::InvalidInput("資料為空字串")),
            Some(input) => input,
        };

        let data_url = DataUrl::parse(input)?;
        println!("成功提取 base64 資料，標頭資訊: {}", data_url.header());
        if !data_url.is_base64() {
            debug!(
                "Header {:?} does not declare base64, decoding anyway",
                data_url.header()
            );
        }

        let image_data = data_url.decode()?;
        println!("成功解碼 base64 資料，長度: {} 位元組", image_data.len());

        let output_dir = &self.settings.output_dir;
        let created =
            ensure_directory_exists(output_dir).map_err(|source| SaveError::DirectoryCreation {
                path: output_dir.clone(),
                source,
            })?;
        if created {
            println!("建立 {} 目錄成功", output_dir.display());
        }

        let file_path = output_dir.join(screenshot_file_name(&self.settings, &now));
        if file_path.exists() {
            debug!("Overwriting existing file {}", file_path.display());
        }

        fs::write(&file_path, &image_data).map_err(|source| SaveError::FileWrite {
            path: file_path.clone(),
            source,
        })?;

        info!(
            "Saved {} ({}, {} bytes) to {}",
            data_url.mime_type(),
            data_url.header(),
            image_data.len(),
            file_path.display()
        );
        Ok(file_path)
    }
}
