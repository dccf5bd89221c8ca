//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use beauty_ai_rust::acquisition;
use beauty_ai_rust::error::BeautyAiError;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_load_nonexistent_file() {
    let result = acquisition::load_image_file(Path::new("/nonexistent/path/photo.jpg"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, BeautyAiError::FileNotFound(_)));
}

/// 対応外の画像形式を読み込んだ場合
#[test]
fn test_load_unsupported_format() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("animation.gif");
    std::fs::write(&path, b"GIF89a").unwrap();

    let result = acquisition::load_image_file(&path);
    assert!(matches!(result, Err(BeautyAiError::UnsupportedFormat(_))));
}

/// 拡張子なしファイルを読み込んだ場合
#[test]
fn test_load_no_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("photo");
    std::fs::write(&path, b"bytes").unwrap();

    let result = acquisition::load_image_file(&path);
    assert!(matches!(result, Err(BeautyAiError::UnsupportedFormat(_))));
}

/// BeautyAiErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        BeautyAiError::Config("テスト設定エラー".to_string()),
        BeautyAiError::FileNotFound("test.jpg".to_string()),
        BeautyAiError::UnsupportedFormat("test.gif".to_string()),
        BeautyAiError::ImageLoad("読み込み失敗".to_string()),
        BeautyAiError::ApiCall("API呼び出し失敗".to_string()),
        BeautyAiError::ApiParse("パース失敗".to_string()),
        BeautyAiError::Camera("デバイスなし".to_string()),
        BeautyAiError::Transition("home以外".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingApiKeyエラーのメッセージ確認
#[test]
fn test_missing_api_key_message() {
    let err = BeautyAiError::MissingApiKey;
    let display = format!("{}", err);

    assert!(display.contains("APIキー"));
    assert!(display.contains("beauty-ai config"));
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = BeautyAiError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: BeautyAiError = io_err.into();

    assert!(matches!(err, BeautyAiError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: BeautyAiError = json_err.into();

    assert!(matches!(err, BeautyAiError::JsonParse(_)));
}
