use crate::config::SaverSettings;
use crate::tools::{DirectoryStatus, ensure_directory_exists, inspect_directory};
use console::style;
use log::{info, warn};
use std::env;
use std::path::Path;

pub struct DirectoryDiagnostic {
    settings: SaverSettings,
}

impl DirectoryDiagnostic {
    pub const fn new(settings: SaverSettings) -> Self {
        Self { settings }
    }

    /// 輸出診斷訊息，回傳檢查時（建立之前）的目錄狀態
    pub fn run(&self) -> DirectoryStatus {
        let dir = self.settings.output_dir.as_path();
        Self::print_location(dir);

        let status = inspect_directory(dir);
        match status {
            DirectoryStatus::Directory { writable } => {
                println!("{} 目錄已存在", dir.display());
                println!("{} 是一個資料夾", dir.display());
                Self::print_writable(dir, writable);
            }
            DirectoryStatus::NotDirectory { writable } => {
                println!("{} 目錄已存在", dir.display());
                println!(
                    "{} {} 存在但不是一個資料夾",
                    style("錯誤:").red().bold(),
                    dir.display()
                );
                Self::print_writable(dir, writable);
            }
            DirectoryStatus::Missing => {
                println!("{} 目錄不存在，嘗試建立", dir.display());
                match ensure_directory_exists(dir) {
                    Ok(_) => {
                        info!("Created output directory {}", dir.display());
                        println!("{}", style(format!("{} 目錄建立成功", dir.display())).green());
                    }
                    Err(e) => {
                        warn!("Failed to create {}: {e:#}", dir.display());
                        println!(
                            "{} 建立 {} 目錄失敗: {e}",
                            style("錯誤:").red().bold(),
                            dir.display()
                        );
                    }
                }
            }
        }

        status
    }

    fn print_writable(dir: &Path, writable: bool) {
        if writable {
            println!("{} 目錄有寫入權限", dir.display());
        } else {
            println!(
                "{} {} 目錄沒有寫入權限",
                style("錯誤:").red().bold(),
                dir.display()
            );
        }
    }

    fn print_location(dir: &Path) {
        match env::current_dir() {
            Ok(cwd) => {
                println!("目前工作目錄: {}", cwd.display());
                println!("{} 目錄絕對路徑: {}", dir.display(), cwd.join(dir).display());
            }
            Err(e) => warn!("Cannot resolve current directory: {e}"),
        }
    }
}
