//! 申請レコードの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ApplicationStatus: 申請ステータス
//! - ApplicationRecord: ストアに保存される申請1件分

use serde::{Deserialize, Serialize};

/// 申請フォームの入力値 (キー名 → 値)
///
/// 中身は解釈せずにそのまま保持する。
pub type FormData = serde_json::Map<String, serde_json::Value>;

/// 申請ステータス
///
/// 保存データに想定外の値が入っていても読み込みは失敗させず、
/// `Other` に元の文字列を保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    InReview,
    Approved,
    Rejected,
    Other(String),
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::InReview => "in-review",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Other(raw) => raw,
        }
    }

    /// 集計上「処理中」として数えるか (pending / in-review)
    pub fn is_open(&self) -> bool {
        matches!(self, ApplicationStatus::Pending | ApplicationStatus::InReview)
    }
}

impl From<String> for ApplicationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => ApplicationStatus::Pending,
            "in-review" => ApplicationStatus::InReview,
            "approved" => ApplicationStatus::Approved,
            "rejected" => ApplicationStatus::Rejected,
            _ => ApplicationStatus::Other(value),
        }
    }
}

impl From<ApplicationStatus> for String {
    fn from(status: ApplicationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 申請レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    /// 申請ID (APP + 西暦4桁 + 4桁)
    pub id: String,

    #[serde(default)]
    pub scheme_id: String,

    /// 申請時点のスキーム表示名
    #[serde(alias = "scheme")]
    pub scheme_name: String,

    pub status: ApplicationStatus,

    /// YYYY-MM-DD
    pub applied_date: String,

    /// 通貨表記の金額、または "N/A"
    pub amount: String,

    #[serde(default)]
    pub form_data: FormData,

    /// 上記以外のキー (読み込んだまま保持)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
