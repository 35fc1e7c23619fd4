//! CLI用のポータル操作
//!
//! ファイル版ストアと tokio タイマーを共通ライブラリのフローに渡す。

use std::path::Path;

use chrono::{DateTime, FixedOffset};
use welfare_portal_common::session::{self, Gated, SessionGate};
use welfare_portal_common::{
    load_dashboard, ApplicationForm, DashboardView, LocalRecordStore, PortalSettings,
    SubmissionFlow, SubmissionReceipt,
};

use crate::error::Result;
use crate::file_store::FileStore;
use crate::timer::TokioTimer;

pub struct Portal {
    backend: FileStore,
    settings: PortalSettings,
}

impl Portal {
    pub fn open(data_dir: &Path, settings: PortalSettings) -> Self {
        Self {
            backend: FileStore::in_dir(data_dir),
            settings,
        }
    }

    pub fn store_path(&self) -> &Path {
        self.backend.path()
    }

    pub fn is_logged_in(&self) -> bool {
        SessionGate::new(&self.backend).is_active()
    }

    pub fn login(&self) -> Result<()> {
        session::sign_in(&self.backend)?;
        tracing::debug!(path = %self.backend.path().display(), "session flag set");
        Ok(())
    }

    pub fn logout(&self) -> Result<()> {
        session::sign_out(&self.backend)?;
        Ok(())
    }

    /// 申請を送信（送信待ち時間を含む）
    pub async fn apply(
        &self,
        scheme_id: &str,
        form: ApplicationForm,
        now: DateTime<FixedOffset>,
    ) -> Result<Gated<SubmissionReceipt>> {
        let flow = SubmissionFlow::new(
            LocalRecordStore::new(&self.backend),
            SessionGate::new(&self.backend),
            TokioTimer,
        )
        .with_settings(self.settings);

        Ok(flow.submit(scheme_id, form, now).await?)
    }

    pub fn dashboard(&self) -> Gated<DashboardView> {
        load_dashboard(
            &SessionGate::new(&self.backend),
            &LocalRecordStore::new(&self.backend),
        )
    }
}
