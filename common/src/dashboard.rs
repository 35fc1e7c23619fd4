//! 市民ダッシュボード集計
//!
//! 固定のデモ用レコード3件とストアのレコードをIDで重複排除して結合し、
//! 件数・承認数・処理中数・受給額合計を毎回その場で計算する。

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::AMOUNT_NOT_AVAILABLE;
use crate::session::{Gated, SessionGate};
use crate::store::{KeyValueStore, RecordStore};
use crate::types::{ApplicationRecord, ApplicationStatus};

/// デモ用レコード
pub fn seed_records() -> Vec<ApplicationRecord> {
    let seed = |id: &str, scheme_id: &str, name: &str, status, date: &str, amount: &str| ApplicationRecord {
        id: id.to_string(),
        scheme_id: scheme_id.to_string(),
        scheme_name: name.to_string(),
        status,
        applied_date: date.to_string(),
        amount: amount.to_string(),
        form_data: Default::default(),
        extra: Default::default(),
    };

    vec![
        seed("APP2024001", "post-matric", "Post-Matric Scholarship", ApplicationStatus::Approved, "2024-01-15", "₹25,000"),
        seed("APP2024002", "self-employment", "Self-Employment Scheme", ApplicationStatus::Pending, "2024-02-01", "₹2,50,000"),
        seed("APP2024003", "assistive-devices", "Assistive Devices", ApplicationStatus::InReview, "2024-01-20", AMOUNT_NOT_AVAILABLE),
    ]
}

/// 先勝ちでIDの重複を除いて結合する (seed → stored の順に走査)
pub fn merge_records(
    seed: Vec<ApplicationRecord>,
    stored: Vec<ApplicationRecord>,
) -> Vec<ApplicationRecord> {
    let mut seen = HashSet::new();
    seed.into_iter()
        .chain(stored)
        .filter(|record| seen.insert(record.id.clone()))
        .collect()
}

/// 金額文字列を整数に変換 ("₹2,50,000" → 250000)。変換できなければ0
pub fn parse_amount(amount: &str) -> u64 {
    let digits: String = amount
        .chars()
        .filter(|c| *c != '₹' && *c != ',')
        .collect();
    digits.trim().parse().unwrap_or(0)
}

/// インド式の桁区切りで金額を表記 (250000 → "₹2,50,000")
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}

/// ダッシュボードの統計値
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_applications: usize,
    pub approved_count: usize,
    /// pending + in-review
    pub pending_count: usize,
    pub benefits_received: u64,
}

impl DashboardStats {
    pub fn from_records(records: &[ApplicationRecord]) -> Self {
        let approved = || records.iter().filter(|r| r.status == ApplicationStatus::Approved);

        Self {
            total_applications: records.len(),
            approved_count: approved().count(),
            pending_count: records.iter().filter(|r| r.status.is_open()).count(),
            benefits_received: approved()
                .filter(|r| r.amount != AMOUNT_NOT_AVAILABLE)
                .map(|r| parse_amount(&r.amount))
                .fold(0u64, u64::saturating_add),
        }
    }

    pub fn benefits_display(&self) -> String {
        format_rupees(self.benefits_received)
    }
}

/// 結合済みレコード一覧。統計値は参照のたびに計算する
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub records: Vec<ApplicationRecord>,
}

impl DashboardView {
    pub fn new(records: Vec<ApplicationRecord>) -> Self {
        Self { records }
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_records(&self.records)
    }
}

/// ゲートを確認してからストアを読み、ダッシュボードを構築する
pub fn load_dashboard<B, S>(gate: &SessionGate<B>, store: &S) -> Gated<DashboardView>
where
    B: KeyValueStore,
    S: RecordStore,
{
    gate.check()
        .map(|()| DashboardView::new(merge_records(seed_records(), store.load())))
}

/// ステータス表示のバッジ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusIcon {
    CheckCircle,
    Clock,
    Eye,
    XCircle,
}

impl StatusIcon {
    /// テキスト表示用の記号
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusIcon::CheckCircle => "✔",
            StatusIcon::Clock => "⏱",
            StatusIcon::Eye => "👁",
            StatusIcon::XCircle => "✖",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub icon: StatusIcon,
    pub variant: BadgeVariant,
    pub class: &'static str,
}

/// ステータス → 表示。未知のステータスは pending と同じ表示
pub fn status_badge(status: &ApplicationStatus) -> StatusBadge {
    match status {
        ApplicationStatus::Approved => StatusBadge {
            label: "Approved",
            icon: StatusIcon::CheckCircle,
            variant: BadgeVariant::Default,
            class: "status-approved",
        },
        ApplicationStatus::InReview => StatusBadge {
            label: "In Review",
            icon: StatusIcon::Eye,
            variant: BadgeVariant::Outline,
            class: "status-in-review",
        },
        ApplicationStatus::Rejected => StatusBadge {
            label: "Rejected",
            icon: StatusIcon::XCircle,
            variant: BadgeVariant::Destructive,
            class: "status-rejected",
        },
        ApplicationStatus::Pending | ApplicationStatus::Other(_) => StatusBadge {
            label: "Pending",
            icon: StatusIcon::Clock,
            variant: BadgeVariant::Secondary,
            class: "status-pending",
        },
    }
}

/// 一覧の各行に出す操作 (表示のみ)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationAction {
    ViewDetails,
    Download,
}

impl ApplicationAction {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationAction::ViewDetails => "View Details",
            ApplicationAction::Download => "Download",
        }
    }
}

/// ダウンロードは承認済みのみ
pub fn actions_for(record: &ApplicationRecord) -> Vec<ApplicationAction> {
    let mut actions = vec![ApplicationAction::ViewDetails];
    if record.status == ApplicationStatus::Approved {
        actions.push(ApplicationAction::Download);
    }
    actions
}
