use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ストアエラー: {0}")]
    Store(#[from] welfare_portal_common::Error),

    #[error("フォームファイルが見つかりません: {0}")]
    FormNotFound(String),

    #[error("必須項目が未入力です: {}", .0.join(", "))]
    IncompleteForm(Vec<String>),

    #[error("ログインが必要です。`portal login` を実行してください")]
    LoginRequired,

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PortalError>;
