//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use std::path::Path;

use tempfile::tempdir;
use welfare_portal::error::PortalError;
use welfare_portal::form_input;
use welfare_portal::file_store::FileStore;
use welfare_portal_common::session::SessionGate;
use welfare_portal_common::{ApplicationForm, KeyValueStore, LocalRecordStore, RecordStore};

/// 存在しないフォームファイル
#[test]
fn test_form_file_not_found() {
    let result = form_input::read_form_file(Path::new("/nonexistent/path/form.json"));
    assert!(matches!(result, Err(PortalError::FormNotFound(_))));
}

/// 壊れたフォームファイル
#[test]
fn test_form_file_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("form.json");
    std::fs::write(&path, "{ name: ").unwrap();

    let result = form_input::read_form_file(&path);
    assert!(matches!(result, Err(PortalError::JsonParse(_))));
}

/// 未入力項目のあるフォーム
#[test]
fn test_incomplete_form_message() {
    let err = form_input::ensure_complete(&ApplicationForm::new()).unwrap_err();
    let display = format!("{}", err);

    assert!(display.contains("必須項目"));
    assert!(display.contains("email"));
    assert!(!display.contains("additionalInfo"));
}

/// 壊れたストアファイルはエラーにせず空として読む
#[test]
fn test_corrupted_store_file_loads_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("storage.json"), "[[[").unwrap();

    let backend = FileStore::in_dir(dir.path());
    assert!(LocalRecordStore::new(&backend).load().is_empty());
    assert!(!SessionGate::new(&backend).is_active());
}

/// ストアのキーに配列以外が入っている
#[test]
fn test_non_array_records_load_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let backend = FileStore::in_dir(dir.path());
    backend.set("schemeApplications", "\"hello\"").unwrap();

    assert!(LocalRecordStore::new(&backend).load().is_empty());
}

/// PortalErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PortalError::Config("テスト設定エラー".to_string()),
        PortalError::FormNotFound("form.json".to_string()),
        PortalError::IncompleteForm(vec!["pincode".to_string()]),
        PortalError::LoginRequired,
        PortalError::Prompt("中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// LoginRequiredエラーのメッセージ確認
#[test]
fn test_login_required_message() {
    let display = format!("{}", PortalError::LoginRequired);
    assert!(display.contains("portal login"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: PortalError = io_err.into();

    assert!(matches!(err, PortalError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let common_err = welfare_portal_common::Error::Storage("書き込み失敗".to_string());
    let err: PortalError = common_err.into();

    assert!(matches!(err, PortalError::Store(_)));
    assert!(format!("{}", err).contains("書き込み失敗"));
}
