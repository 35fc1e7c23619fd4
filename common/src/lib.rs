//! Welfare Portal Common Library
//!
//! CLIとWeb(WASM)で共有される申請データ・ストア・ダッシュボード集計

pub mod types;
pub mod form;
pub mod catalog;
pub mod error;
pub mod store;
pub mod session;
pub mod submission;
pub mod dashboard;

pub use types::{ApplicationRecord, ApplicationStatus, FormData};
pub use form::ApplicationForm;
pub use catalog::{Scheme, SchemeCategory, ResolvedScheme};
pub use error::{Error, Result};
pub use store::{KeyValueStore, MemoryStore, RecordStore, LocalRecordStore};
pub use session::{Gated, Route, SessionGate};
pub use submission::{PortalSettings, SubmissionFlow, SubmissionReceipt, Timer};
pub use dashboard::{DashboardStats, DashboardView, StatusBadge, load_dashboard};
