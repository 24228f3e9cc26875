//! 截圖儲存元件
//!
//! 解析 base64 data URL，將解碼後的位元組寫入輸出目錄下以時間命名的檔案

mod main;

pub use main::ScreenshotSaver;
