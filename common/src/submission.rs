//! スキーム申請フロー
//!
//! フォーム入力とスキームIDから申請レコードを作り、ストアに追記する。
//! 通信の代わりに一定時間待つ (`Timer`)。待機はキャンセルされず、
//! 開始したら必ず追記まで進む。

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};
use rand::Rng;

use crate::catalog;
use crate::error::Result;
use crate::form::ApplicationForm;
use crate::session::{Gated, Route, SessionGate};
use crate::store::{KeyValueStore, RecordStore};
use crate::types::{ApplicationRecord, ApplicationStatus};

/// 申請IDの接頭辞
pub const APPLICATION_ID_PREFIX: &str = "APP";

/// 非同期の待機
///
/// ブラウザでは setTimeout、CLIでは tokio のタイマーを使う。
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<T: Timer + ?Sized> Timer for &T {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).sleep(duration)
    }
}

/// 待ち時間の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalSettings {
    /// 送信時の疑似通信待ち
    pub submit_delay: Duration,
    /// 送信完了からダッシュボード遷移までの表示時間
    pub redirect_delay: Duration,
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            redirect_delay: Duration::from_millis(2000),
        }
    }
}

/// 送信完了の通知内容
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub application_id: String,
    pub record: ApplicationRecord,
    /// 次の遷移先 (ダッシュボード)
    pub redirect: Route,
    /// 遷移までの待ち時間
    pub redirect_after: Duration,
}

/// 申請IDを生成 (APP + 西暦4桁 + 0埋め4桁乱数)
///
/// 既存IDとの重複は確認しない。
pub fn generate_application_id<R: Rng + ?Sized>(year: i32, rng: &mut R) -> String {
    let suffix: u16 = rng.gen_range(0..10_000);
    format!("{}{:04}{:04}", APPLICATION_ID_PREFIX, year, suffix)
}

/// 申請レコードを組み立てる (ステータスは pending 固定)
pub fn build_record(
    application_id: String,
    scheme_id: &str,
    form: &ApplicationForm,
    applied_on: NaiveDate,
) -> ApplicationRecord {
    let scheme = catalog::resolve(scheme_id);
    ApplicationRecord {
        id: application_id,
        scheme_id: scheme_id.to_string(),
        scheme_name: scheme.name,
        status: ApplicationStatus::Pending,
        applied_date: applied_on.format("%Y-%m-%d").to_string(),
        amount: scheme.amount,
        form_data: form.to_form_data(),
        extra: Default::default(),
    }
}

pub struct SubmissionFlow<S, B, T> {
    store: S,
    gate: SessionGate<B>,
    timer: T,
    settings: PortalSettings,
}

impl<S, B, T> SubmissionFlow<S, B, T>
where
    S: RecordStore,
    B: KeyValueStore,
    T: Timer,
{
    pub fn new(store: S, gate: SessionGate<B>, timer: T) -> Self {
        Self {
            store,
            gate,
            timer,
            settings: PortalSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: PortalSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &PortalSettings {
        &self.settings
    }

    /// 申請を送信する
    ///
    /// 未ログインならストアに触れずにログイン画面へのリダイレクトを返す。
    /// 必須項目のチェックは呼び出し側 (フォーム描画層) で済ませておくこと。
    ///
    /// `now` は利用者の現地時刻。IDの西暦は現地の年、申請日はUTCの日付を使う。
    pub async fn submit(
        &self,
        scheme_id: &str,
        form: ApplicationForm,
        now: DateTime<FixedOffset>,
    ) -> Result<Gated<SubmissionReceipt>> {
        if let Gated::Redirect(route) = self.gate.check() {
            return Ok(Gated::Redirect(route));
        }

        // 疑似通信待ち
        self.timer.sleep(self.settings.submit_delay).await;

        let application_id = generate_application_id(now.year(), &mut rand::thread_rng());
        let record = build_record(application_id.clone(), scheme_id, &form, now.naive_utc().date());
        self.store.append(record.clone())?;

        tracing::info!(
            id = %application_id,
            scheme = %record.scheme_name,
            "application submitted"
        );

        Ok(Gated::Open(SubmissionReceipt {
            application_id,
            record,
            redirect: Route::Dashboard,
            redirect_after: self.settings.redirect_delay,
        }))
    }
}
