//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use scout_chat::batch;
use scout_chat::config::Config;
use scout_chat::error::ScoutError;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない入力ファイル
#[test]
fn test_batch_nonexistent_file() {
    let result = batch::read_requirements(Path::new("/nonexistent/path/12345.txt"));
    assert!(matches!(result.unwrap_err(), ScoutError::FileNotFound(_)));
}

/// 空の入力ファイルはエラーではなく空のVec
#[test]
fn test_batch_empty_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "\n   \n").unwrap();

    let result = batch::read_requirements(&path);
    assert!(result.unwrap().is_empty());
}

/// 不正な正規表現を含む辞書
#[test]
fn test_invalid_age_pattern() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("mappings.json");
    std::fs::write(&path, r#"{"agePatterns": ["([0-9]{1,2}代"]}"#).unwrap();

    let err = Config::default().build_extractor(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ScoutError::Common(scout_chat_common::Error::Pattern(_))));
}

/// 空の同義語を含む辞書
#[test]
fn test_empty_synonym_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("mappings.json");
    std::fs::write(&path, r#"{"jobCategories": [{"code": "any", "synonyms": [""]}]}"#).unwrap();

    let err = Config::default().resolve_mappings(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ScoutError::InvalidMappings(_)));
    assert!(format!("{}", err).contains("キーワード辞書"));
}

/// ScoutErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ScoutError::Config("テスト設定エラー".to_string()),
        ScoutError::FileNotFound("requirements.txt".to_string()),
        ScoutError::InvalidMappings("不正な辞書".to_string()),
        ScoutError::Prompt("入力が中断されました".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: ScoutError = io_err.into();

    assert!(matches!(err, ScoutError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: ScoutError = json_err.into();

    assert!(matches!(err, ScoutError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let common_err = scout_chat_common::Error::Config("設定エラー".to_string());
    let err: ScoutError = common_err.into();

    assert!(matches!(err, ScoutError::Common(_)));
    assert_eq!(format!("{}", err), "Config error: 設定エラー");
}
