//! localStorage アダプタのブラウザテスト

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use welfare_portal_common::session::{sign_in, sign_out, SessionGate};
use welfare_portal_common::store::APPLICATIONS_KEY;
use welfare_portal_common::{KeyValueStore, LocalRecordStore, RecordStore};
use welfare_portal_wasm::browser_store::{now, BrowserStorage};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_malformed_local_storage_loads_empty() {
    BrowserStorage.set(APPLICATIONS_KEY, "not json").unwrap();
    assert!(LocalRecordStore::new(BrowserStorage).load().is_empty());
    BrowserStorage.remove(APPLICATIONS_KEY).unwrap();
}

#[wasm_bindgen_test]
fn test_session_flag_round_trip() {
    sign_in(&BrowserStorage).unwrap();
    assert!(SessionGate::new(BrowserStorage).is_active());

    sign_out(&BrowserStorage).unwrap();
    assert!(!SessionGate::new(BrowserStorage).is_active());
}

#[wasm_bindgen_test]
fn test_now_matches_browser_clock() {
    use chrono::Datelike;
    let at = now();
    let date = js_sys::Date::new_0();
    assert!(at.year() >= 2024);
    assert_eq!(at.naive_utc().date().year(), date.get_utc_full_year() as i32);
    assert_eq!(at.offset().local_minus_utc(), -(date.get_timezone_offset() as i32) * 60);
}
