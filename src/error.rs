use std::io;
use std::path::PathBuf;

/// 截圖儲存流程中各步驟的失敗種類
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("圖片資料無效: {0}")]
    InvalidInput(&'static str),

    #[error("圖片資料不是 data URL 格式: {0}")]
    MalformedDataUrl(&'static str),

    #[error("解碼 base64 資料失敗: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("建立目錄 {} 失敗: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("寫入檔案 {} 失敗: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SaveError {
    /// 失敗種類名稱，供日誌使用
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "InvalidInput",
            Self::MalformedDataUrl(_) => "MalformedDataURL",
            Self::Base64Decode(_) => "Base64DecodeError",
            Self::DirectoryCreation { .. } => "DirectoryCreationError",
            Self::FileWrite { .. } => "FileWriteError",
        }
    }
}

pub type SaveResult<T> = Result<T, SaveError>;
