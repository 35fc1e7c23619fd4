//! localStorage / setTimeout アダプタ

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use gloo::storage::{LocalStorage, Storage};
use welfare_portal_common::{Error, KeyValueStore, Result, Timer};

/// window.localStorage をそのまま使うキー/バリュー領域
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("保存失敗: {:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| Error::Storage(format!("削除失敗: {:?}", e)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo::timers::future::sleep(duration)
    }
}

/// ブラウザの現地時刻 (タイムゾーンのオフセット付き)
pub fn now() -> DateTime<FixedOffset> {
    let date = js_sys::Date::new_0();
    // getTimezoneOffset は UTC - 現地 (分)
    let offset_secs = -(date.get_timezone_offset() as i32) * 60;
    let offset = FixedOffset::east_opt(offset_secs).unwrap_or_else(|| Utc.fix());

    DateTime::<Utc>::from_timestamp_millis(date.get_time() as i64)
        .unwrap_or_default()
        .with_timezone(&offset)
}
