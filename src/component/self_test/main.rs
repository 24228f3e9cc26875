use crate::component::{DirectoryDiagnostic, ScreenshotSaver};
use crate::config::Config;
use crate::tools::{DirectoryStatus, ListedFile, inspect_directory, list_directory_files};
use console::style;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// 1x1 像素的紅色 PNG（解碼後 70 位元組）
pub const SAMPLE_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

#[must_use]
pub fn sample_data_url() -> String {
    format!("data:image/png;base64,{SAMPLE_PNG_BASE64}")
}

#[derive(Debug, Default)]
pub struct SelfTestReport {
    pub saved: Option<PathBuf>,
    pub listed: Vec<ListedFile>,
}

pub struct SelfTest {
    config: Config,
}

impl SelfTest {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> SelfTestReport {
        DirectoryDiagnostic::new(self.config.settings.clone()).run();

        let saved = self.save_sample();
        let listed = self.list_output();

        println!("{}", style("測試完成").cyan().bold());
        info!("Self test finished, saved: {saved:?}");

        SelfTestReport { saved, listed }
    }

    fn save_sample(&self) -> Option<PathBuf> {
        println!("{}", style("=== 開始測試截圖儲存功能 ===").cyan().bold());

        let data_url = sample_data_url();
        println!("建立測試圖片資料，長度: {}", SAMPLE_PNG_BASE64.len());
        println!("嘗試儲存截圖...");

        let saver = ScreenshotSaver::new(self.config.settings.clone());
        let Some(path) = saver.save(Some(&data_url)) else {
            println!("{}", style("錯誤：截圖儲存失敗，回傳路徑為空").red());
            return None;
        };

        println!("截圖儲存成功: {}", path.display());
        Self::verify_saved(&path);
        Some(path)
    }

    fn verify_saved(path: &Path) {
        match fs::metadata(path) {
            Ok(meta) => println!("檔案確實存在，大小: {} 位元組", meta.len()),
            Err(e) => println!(
                "{} 儲存路徑回傳成功，但檔案不存在: {} ({e})",
                style("錯誤：").red(),
                path.display()
            ),
        }
    }

    fn list_output(&self) -> Vec<ListedFile> {
        let dir = self.config.settings.output_dir.as_path();

        if !matches!(inspect_directory(dir), DirectoryStatus::Directory { .. }) {
            println!("\n{} 目錄不存在或不是資料夾", dir.display());
            return Vec::new();
        }

        let files = list_directory_files(dir);
        println!("\n{} 目錄下的檔案:", dir.display());
        for file in &files {
            println!("  - {} ({} 位元組)", file.name, file.size);
        }
        files
    }
}
