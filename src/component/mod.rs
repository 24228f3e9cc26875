//! 功能元件模組
//!
//! 每個子模組實現一個獨立的功能

pub mod directory_diagnostic;
pub mod screenshot_saver;
pub mod self_test;

pub use directory_diagnostic::DirectoryDiagnostic;
pub use screenshot_saver::ScreenshotSaver;
pub use self_test::{SelfTest, SelfTestReport};
