//! ファイル版キー/バリュー領域
//!
//! ブラウザの localStorage と同じく「キー → 文字列値」を1つのJSON
//! ファイルに保存する。読み書きのたびにファイル全体を読み直すため、
//! 複数プロセスから使うと後勝ちになる。

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use welfare_portal_common::{Error, KeyValueStore};

const STORE_FILE_NAME: &str = "storage.json";

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// `dir/storage.json` を使うストア（ディレクトリは書き込み時に作成）
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(STORE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイル全体を読む。無い・壊れている場合は空
    fn read_all(&self) -> BTreeMap<String, String> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return BTreeMap::new(),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "store file is corrupted, starting empty");
                BTreeMap::new()
            }
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> welfare_portal_common::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), entries)
            .map_err(|e| Error::Storage(e.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> welfare_portal_common::Result<()> {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> welfare_portal_common::Result<()> {
        let mut entries = self.read_all();
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}
