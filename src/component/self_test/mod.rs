//! 截圖儲存自我測試
//!
//! 依序執行目錄診斷、儲存內建測試圖片並列出輸出目錄內容

mod main;

pub use main::{SAMPLE_PNG_BASE64, SelfTest, SelfTestReport, sample_data_url};
