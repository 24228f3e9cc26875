//! 輸出目錄診斷元件
//!
//! 檢查輸出目錄是否存在、是否為資料夾以及是否可寫入；不存在時嘗試建立

mod main;

pub use main::DirectoryDiagnostic;
