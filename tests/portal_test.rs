//! ポータル操作テスト
//!
//! ファイル版ストアを使って申請 → ダッシュボードの流れを検証

use std::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDate};
use regex::Regex;
use tempfile::tempdir;
use welfare_portal::portal::Portal;
use welfare_portal_common::dashboard::seed_records;
use welfare_portal_common::store::APPLICATIONS_KEY;
use welfare_portal_common::{
    ApplicationForm, ApplicationStatus, Gated, KeyValueStore, PortalSettings, Route,
};
use welfare_portal::file_store::FileStore;

/// 待ち時間なしの設定
fn no_delay() -> PortalSettings {
    PortalSettings {
        submit_delay: Duration::ZERO,
        redirect_delay: Duration::ZERO,
    }
}

fn form() -> ApplicationForm {
    ApplicationForm {
        name: "Sunita Kale".to_string(),
        email: "sunita@example.in".to_string(),
        mobile: "9822012345".to_string(),
        date_of_birth: "1988-11-02".to_string(),
        disability_type: "visual".to_string(),
        disability_percentage: "60-79".to_string(),
        address: "Flat 4, Shivaji Nagar".to_string(),
        city: "Kolhapur".to_string(),
        pincode: "416001".to_string(),
        income: "90000".to_string(),
        bank_account: "112233445566".to_string(),
        ifsc_code: "MAHB0000123".to_string(),
        additional_info: "Needs braille correspondence".to_string(),
        ..ApplicationForm::new()
    }
}

/// UTC+5:30 の正午
fn date(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("不正なオフセット");
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|day| day.and_hms_opt(12, 0, 0))
        .and_then(|at| at.and_local_timezone(offset).single())
        .expect("不正な日時")
}

/// 申請したレコードがダッシュボードに出る
#[tokio::test]
async fn test_apply_then_dashboard_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let portal = Portal::open(dir.path(), no_delay());
    portal.login().expect("ログイン失敗");

    let receipt = portal
        .apply("disability-pension", form(), date(2024, 9, 12))
        .await
        .expect("申請失敗")
        .open()
        .expect("リダイレクトされた");

    assert_eq!(receipt.redirect, Route::Dashboard);

    let view = portal.dashboard().open().expect("リダイレクトされた");
    assert_eq!(view.records.len(), 4);

    let stored = view
        .records
        .iter()
        .find(|r| r.id == receipt.application_id)
        .expect("申請が見つからない");
    assert_eq!(stored, &receipt.record);
    assert_eq!(stored.scheme_name, "Disability Pension");
    assert_eq!(stored.amount, "₹500-1000 per month");
    assert_eq!(stored.applied_date, "2024-09-12");
    assert_eq!(stored.form_data["city"], "Kolhapur");
    assert_eq!(stored.form_data["additionalInfo"], "Needs braille correspondence");

    let stats = view.stats();
    assert_eq!(stats.total_applications, 4);
    assert_eq!(stats.pending_count, 3);
    assert_eq!(stats.benefits_received, 25000);
}

/// 申請IDの形式
#[tokio::test]
async fn test_application_id_format() {
    let dir = tempdir().expect("Failed to create temp dir");
    let portal = Portal::open(dir.path(), no_delay());
    portal.login().expect("ログイン失敗");

    let pattern = Regex::new(r"^APP2024\d{4}$").unwrap();
    for _ in 0..5 {
        let receipt = portal
            .apply("hearing-aids", form(), date(2024, 3, 1))
            .await
            .unwrap()
            .open()
            .unwrap();
        assert!(pattern.is_match(&receipt.application_id), "不正なID: {}", receipt.application_id);
    }
}

/// カタログに無いスキームでも申請できる
#[tokio::test]
async fn test_unknown_scheme_submission() {
    let dir = tempdir().expect("Failed to create temp dir");
    let portal = Portal::open(dir.path(), no_delay());
    portal.login().expect("ログイン失敗");

    let receipt = portal
        .apply("not-a-real-scheme", form(), date(2025, 6, 30))
        .await
        .unwrap()
        .open()
        .unwrap();

    assert_eq!(receipt.record.scheme_name, "Unknown Scheme");
    assert_eq!(receipt.record.amount, "N/A");
    assert_eq!(receipt.record.status, ApplicationStatus::Pending);
}

/// 未ログインではストアに触れない
#[tokio::test]
async fn test_gate_blocks_without_login() {
    let dir = tempdir().expect("Failed to create temp dir");
    let portal = Portal::open(dir.path(), no_delay());

    let outcome = portal.apply("pre-matric", form(), date(2024, 1, 1)).await.unwrap();
    assert_eq!(outcome, Gated::Redirect(Route::Login));
    assert!(portal.dashboard().is_redirect());

    // ストアファイル自体が作られていない
    assert!(!portal.store_path().exists());
}

/// ログアウト後はダッシュボードに入れない
#[test]
fn test_logout_closes_gate() {
    let dir = tempdir().expect("Failed to create temp dir");
    let portal = Portal::open(dir.path(), no_delay());

    portal.login().unwrap();
    assert!(portal.dashboard().open().is_some());

    portal.logout().unwrap();
    assert!(!portal.is_logged_in());
    assert_eq!(portal.dashboard().open(), None);
}

/// 保存済みレコードがデモ用レコードとIDで衝突したらデモ側が残る
#[test]
fn test_seed_precedence_on_id_collision() {
    let dir = tempdir().expect("Failed to create temp dir");
    let portal = Portal::open(dir.path(), no_delay());
    portal.login().unwrap();

    let backend = FileStore::in_dir(dir.path());
    let json = r#"[
        {"id":"APP2024002","schemeName":"Hijacked","status":"rejected","appliedDate":"2023-01-01","amount":"₹1"},
        {"id":"APP20241234","schemeName":"Hearing Aids","status":"approved","appliedDate":"2024-04-01","amount":"₹3,000"}
    ]"#;
    backend.set(APPLICATIONS_KEY, json).unwrap();

    let view = portal.dashboard().open().unwrap();
    assert_eq!(view.records.len(), 4);
    assert_eq!(view.records[1], seed_records()[1]);
    assert_eq!(view.records[3].id, "APP20241234");

    let stats = view.stats();
    assert_eq!(stats.approved_count, 2);
    assert_eq!(stats.benefits_received, 28000);
    assert_eq!(stats.benefits_display(), "₹28,000");
}

/// ストアの値が配列でなければ空として扱い、次の申請で上書きされる
#[tokio::test]
async fn test_malformed_store_recovers_on_append() {
    let dir = tempdir().expect("Failed to create temp dir");
    let portal = Portal::open(dir.path(), no_delay());
    portal.login().unwrap();

    let backend = FileStore::in_dir(dir.path());
    backend.set(APPLICATIONS_KEY, r#"{"not": "an array"}"#).unwrap();

    let view = portal.dashboard().open().unwrap();
    assert_eq!(view.records, seed_records());

    portal.apply("free-typo", form(), date(2024, 12, 31)).await.unwrap();

    let raw = backend.get(APPLICATIONS_KEY).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.as_array().map(|a| a.len()), Some(1));
}

/// 送信待ち時間が反映される
#[tokio::test(start_paused = true)]
async fn test_submit_waits_for_delay() {
    let dir = tempdir().expect("Failed to create temp dir");
    let portal = Portal::open(dir.path(), PortalSettings::default());
    portal.login().unwrap();

    let started = tokio::time::Instant::now();
    portal.apply("pre-matric", form(), date(2024, 1, 1)).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(1500));
}

/// 旧形式のレコードは申請後も保存時の内容のまま残る
#[tokio::test]
async fn test_apply_leaves_legacy_records_untouched() {
    let dir = tempdir().expect("Failed to create temp dir");
    let legacy = r#"[{"id":"APP20230007","scheme":"Pre-Matric Scholarship","status":"approved","appliedDate":"2023-11-02","amount":"₹10,000","formData":{"fullName":"Asha","udid":"MH2024X","income":120000}}]"#;
    FileStore::in_dir(dir.path())
        .set(APPLICATIONS_KEY, legacy)
        .expect("書き込み失敗");

    let portal = Portal::open(dir.path(), no_delay());
    portal.login().expect("ログイン失敗");
    portal.apply("hearing-aids", form(), date(2024, 5, 2)).await.expect("申請失敗");

    let raw = FileStore::in_dir(dir.path()).get(APPLICATIONS_KEY).expect("保存されていない");
    let stored: Vec<serde_json::Value> = serde_json::from_str(&raw).expect("配列でない");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0]["scheme"], "Pre-Matric Scholarship");
    assert_eq!(stored[0]["formData"]["fullName"], "Asha");
    assert_eq!(stored[0]["formData"]["udid"], "MH2024X");
    assert_eq!(stored[0]["formData"]["income"], 120000);
    assert!(stored[0].get("schemeName").is_none());

    let view = portal.dashboard().open().expect("リダイレクトされた");
    assert!(view.records.iter().any(|r| r.id == "APP20230007"));
}
