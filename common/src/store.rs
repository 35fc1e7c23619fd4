//! ローカルレコードストア
//!
//! プラットフォームのキー/バリュー領域 (ブラウザの localStorage、
//! CLIのJSONファイル) を `KeyValueStore` として抽象化し、その上に
//! 申請レコード一覧を1キーで保存する。
//!
//! 複数タブ/プロセスからの同時追記は調停しない (後勝ち)。

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::value::RawValue;

use crate::error::Result;
use crate::types::ApplicationRecord;

/// 申請レコード一覧の保存キー
pub const APPLICATIONS_KEY: &str = "schemeApplications";

/// セッションフラグの保存キー
pub const SESSION_KEY: &str = "isLoggedIn";

/// ログイン中を表すセッションフラグの値
pub const SESSION_ACTIVE_VALUE: &str = "true";

/// 文字列キー/文字列値の永続領域
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// メモリ上のキー/バリュー領域 (テスト・組み込み用)
///
/// キーごとの読み書き回数を記録する。
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    reads: RefCell<HashMap<String, usize>>,
    writes: RefCell<HashMap<String, usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期値を入れた状態で作成 (カウンタは0)
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn reads_of(&self, key: &str) -> usize {
        self.reads.borrow().get(key).copied().unwrap_or(0)
    }

    pub fn writes_of(&self, key: &str) -> usize {
        self.writes.borrow().get(key).copied().unwrap_or(0)
    }

    /// カウンタを増やさずに生の値を覗く
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        *self.reads.borrow_mut().entry(key.to_string()).or_insert(0) += 1;
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        *self.writes.borrow_mut().entry(key.to_string()).or_insert(0) += 1;
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        *self.writes.borrow_mut().entry(key.to_string()).or_insert(0) += 1;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// 申請レコードの読み込み/追記
pub trait RecordStore {
    /// 保存済みレコードを挿入順で返す。キーが無い・壊れている場合は空
    fn load(&self) -> Vec<ApplicationRecord>;

    /// 末尾に1件追記して全体を書き戻す。既存の要素は保存されていた内容のまま
    fn append(&self, record: ApplicationRecord) -> Result<()>;
}

impl<T: RecordStore + ?Sized> RecordStore for &T {
    fn load(&self) -> Vec<ApplicationRecord> {
        (**self).load()
    }

    fn append(&self, record: ApplicationRecord) -> Result<()> {
        (**self).append(record)
    }
}

/// `KeyValueStore` 上の申請レコードストア
#[derive(Debug, Clone)]
pub struct LocalRecordStore<B> {
    backend: B,
}

impl<B: KeyValueStore> LocalRecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// 保存済みの配列を要素ごとの生JSONとして読む。配列でなければ空
    fn load_raw(&self) -> Vec<Box<RawValue>> {
        let Some(raw) = self.backend.get(APPLICATIONS_KEY) else {
            return Vec::new();
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored applications are not an array, starting over");
            Vec::new()
        })
    }
}

impl<B: KeyValueStore> RecordStore for LocalRecordStore<B> {
    fn load(&self) -> Vec<ApplicationRecord> {
        let Some(raw) = self.backend.get(APPLICATIONS_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<ApplicationRecord>>(&raw) {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded application records");
                records
            }
            Err(e) => {
                // 壊れたデータは空として扱う
                tracing::warn!(error = %e, "stored applications are malformed, treating as empty");
                Vec::new()
            }
        }
    }

    fn append(&self, record: ApplicationRecord) -> Result<()> {
        let mut entries = self.load_raw();
        tracing::debug!(id = %record.id, existing = entries.len(), "appending application record");
        entries.push(serde_json::value::to_raw_value(&record)?);

        let json = serde_json::to_string(&entries)?;
        self.backend.set(APPLICATIONS_KEY, &json)
    }
}
