use anyhow::{Context, Result, bail};
use std::fs::OpenOptions;
use std::path::Path;

/// 目錄檢查結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
    Missing,
    NotDirectory { writable: bool },
    Directory { writable: bool },
}

/// 目錄不存在時建立；回傳是否由本次呼叫建立
pub fn ensure_directory_exists(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    if path.exists() {
        bail!("路徑已存在但不是資料夾: {}", path.display());
    }
    std::fs::create_dir_all(path)
        .with_context(|| format!("無法建立資料夾: {}", path.display()))?;
    Ok(true)
}

#[must_use]
pub fn inspect_directory(path: &Path) -> DirectoryStatus {
    if !path.exists() {
        return DirectoryStatus::Missing;
    }
    if !path.is_dir() {
        return DirectoryStatus::NotDirectory {
            writable: is_file_writable(path),
        };
    }
    DirectoryStatus::Directory {
        writable: is_dir_writable(path),
    }
}

// 實際建立一個暫存檔確認寫入權限，離開作用域即刪除
fn is_dir_writable(dir: &Path) -> bool {
    tempfile::Builder::new()
        .prefix(".write_probe")
        .tempfile_in(dir)
        .is_ok()
}

// 以附加模式開啟，不寫入任何內容
fn is_file_writable(file: &Path) -> bool {
    OpenOptions::new().append(true).open(file).is_ok()
}
