//! 整合測試 - 驗證截圖儲存流程
//!
//! 所有測試都在獨立的暫存目錄中執行

use std::fs;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use screenshot_saver::SaveError;
use screenshot_saver::component::ScreenshotSaver;
use screenshot_saver::component::self_test::{SAMPLE_PNG_BASE64, sample_data_url};
use screenshot_saver::config::SaverSettings;
use tempfile::TempDir;

fn saver_in(dir: &Path) -> ScreenshotSaver {
    ScreenshotSaver::new(SaverSettings {
        output_dir: dir.join("logs"),
        ..SaverSettings::default()
    })
}

fn file_count(dir: &Path) -> usize {
    if !dir.exists() {
        return 0;
    }
    fs::read_dir(dir).unwrap().count()
}

/// 測試 1: 儲存內建 PNG，檔案大小等於解碼長度
#[test]
fn test_save_sample_png() {
    let temp_dir = TempDir::new().unwrap();
    let saver = saver_in(temp_dir.path());

    let path = saver.save(Some(&sample_data_url())).expect("應該回傳儲存路徑");

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("screenshot_"), "檔名應該以 screenshot_ 開頭");
    assert!(name.ends_with(".png"), "副檔名應該是 png");
    assert_eq!(name.len(), "screenshot_20240101_120000.png".len());
    assert_eq!(path.parent().unwrap(), temp_dir.path().join("logs"));

    let expected = BASE64.decode(SAMPLE_PNG_BASE64).unwrap();
    assert_eq!(fs::read(&path).unwrap(), expected);
    assert_eq!(fs::metadata(&path).unwrap().len(), 70);
}

/// 測試 2: 任意位元組都能原樣寫回
#[test]
fn test_arbitrary_bytes_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let saver = saver_in(temp_dir.path());

    for len in [0usize, 1, 2, 3, 255, 4096] {
        let bytes: Vec<u8> = (0..len).map(|i| (i * 31 % 256) as u8).collect();
        let url = format!("data:application/octet-stream;base64,{}", BASE64.encode(&bytes));

        let path = saver.try_save(Some(&url)).unwrap();
        assert_eq!(fs::read(&path).unwrap(), bytes, "長度 {len} 的資料應該相同");
    }
}

/// 測試 3: 各種錯誤輸入都回傳 None 且不建立檔案
#[test]
fn test_invalid_inputs_create_no_files() {
    let temp_dir = TempDir::new().unwrap();
    let saver = saver_in(temp_dir.path());
    let logs = temp_dir.path().join("logs");

    assert_eq!(saver.save(None), None);
    assert_eq!(saver.save(Some("")), None);
    assert_eq!(saver.save(Some("not-a-data-url")), None);
    assert_eq!(saver.save(Some("image/png;base64,AAAA")), None);
    assert_eq!(saver.save(Some("data:image/png;base64")), None);
    assert_eq!(saver.save(Some("data:image/png;base64,AAA")), None);
    assert_eq!(saver.save(Some("data:image/png;base64,AA=A")), None);

    assert!(!logs.exists(), "失敗時不應該建立目錄");
    assert_eq!(file_count(&logs), 0);
}

/// 測試 4: 錯誤種類對應驗證步驟
#[test]
fn test_error_kinds_follow_validation_order() {
    let temp_dir = TempDir::new().unwrap();
    let saver = saver_in(temp_dir.path());

    assert!(matches!(saver.try_save(None), Err(SaveError::InvalidInput(_))));
    assert!(matches!(
        saver.try_save(Some("http://example.com/a.png")),
        Err(SaveError::MalformedDataUrl(_))
    ));
    assert!(matches!(
        saver.try_save(Some("data:image/png;base64")),
        Err(SaveError::MalformedDataUrl(_))
    ));
    assert!(matches!(
        saver.try_save(Some("data:image/png;base64,%%%%")),
        Err(SaveError::Base64Decode(_))
    ));

    // 目錄位置被檔案佔用時，解碼成功後才回報目錄錯誤
    fs::write(temp_dir.path().join("logs"), "occupied").unwrap();
    let err = saver.try_save(Some(&sample_data_url())).unwrap_err();
    assert_eq!(err.kind(), "DirectoryCreationError");
    assert!(err.to_string().contains("logs"));
}

/// 測試 5: 已存在的輸出目錄與其內容保持不變
#[test]
fn test_existing_output_directory_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let logs = temp_dir.path().join("logs");
    fs::create_dir(&logs).unwrap();
    fs::write(logs.join("app.log"), "existing log").unwrap();

    let saver = saver_in(temp_dir.path());
    saver.try_save(Some(&sample_data_url())).unwrap();

    assert_eq!(fs::read_to_string(logs.join("app.log")).unwrap(), "existing log");
    assert_eq!(file_count(&logs), 2);
}

/// 測試 6: 巢狀輸出目錄會一併建立
#[test]
fn test_nested_output_directory_created() {
    let temp_dir = TempDir::new().unwrap();
    let saver = ScreenshotSaver::new(SaverSettings {
        output_dir: temp_dir.path().join("a").join("b").join("logs"),
        ..SaverSettings::default()
    });

    let path = saver.try_save(Some(&sample_data_url())).unwrap();
    assert!(path.exists());
}
