//! PageSizeStore - Persisted Page-Size Preference
//!
//! Remembers the page length a user picked for a table and restores it on
//! the next visit, for as long as the entry is fresh (one day by default).
//! Entries live in a small TOML file in the local data directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::PAGE_SIZE_TTL_SECS;
use crate::domain::TableId;

/// One persisted preference
#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredEntry {
    page_size: usize,
    saved_at: DateTime<Utc>,
}

/// On-disk file layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    tables: BTreeMap<String, StoredEntry>,
}

/// TTL'd page-size preference store
#[derive(Clone, Debug)]
pub struct PageSizeStore {
    path: PathBuf,
    ttl_ms: i64,
}

impl PageSizeStore {
    /// Open the store in the local data directory
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "gridstate")
            .ok_or_else(|| anyhow::anyhow!("Could not find local data directory"))?;
        let dir = dirs.data_local_dir();
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(Self::at(dir.join("page_sizes.toml")))
    }

    /// Open a store at an explicit path (tests, embedded hosts)
    pub fn at(path: PathBuf) -> Self {
        Self {
            path,
            ttl_ms: (PAGE_SIZE_TTL_SECS as i64) * 1000,
        }
    }

    /// Override how long entries stay fresh
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl_ms = ttl.as_millis() as i64;
        self
    }

    /// Load the remembered page size for a table, if still fresh
    pub fn load(&self, table: &TableId) -> Result<Option<usize>> {
        let file = self.read_file()?;
        Ok(file
            .tables
            .get(table.as_str())
            .filter(|entry| self.is_fresh(entry))
            .map(|entry| entry.page_size))
    }

    /// Remember the page size for a table.
    ///
    /// Expired entries for other tables are pruned on the way through.
    pub fn save(&self, table: &TableId, page_size: usize) -> Result<()> {
        let mut file = self.read_file()?;
        file.tables.retain(|_, entry| self.is_fresh(entry));
        file.tables.insert(
            table.as_str().to_string(),
            StoredEntry {
                page_size,
                saved_at: Utc::now(),
            },
        );

        let content = toml::to_string_pretty(&file)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Drop the remembered page size for a table
    pub fn forget(&self, table: &TableId) -> Result<()> {
        let mut file = self.read_file()?;
        if file.tables.remove(table.as_str()).is_some() {
            let content = toml::to_string_pretty(&file)?;
            fs::write(&self.path, content)?;
        }
        Ok(())
    }

    fn is_fresh(&self, entry: &StoredEntry) -> bool {
        (Utc::now() - entry.saved_at).num_milliseconds() < self.ttl_ms
    }

    fn read_file(&self) -> Result<StoreFile> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> PageSizeStore {
        PageSizeStore::at(dir.path().join("page_sizes.toml"))
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        let table = TableId::new("samples");

        assert_eq!(store.load(&table).expect("load"), None);
        store.save(&table, 25).expect("save");
        assert_eq!(store.load(&table).expect("load"), Some(25));

        // A second store on the same path sees the entry.
        let reopened = store_in(&dir);
        assert_eq!(reopened.load(&table).expect("load"), Some(25));
    }

    #[test]
    fn test_entries_expire_after_ttl() {
        let dir = tempfile::tempdir().expect("tempdir");
        let table = TableId::new("samples");
        store_in(&dir).save(&table, 50).expect("save");

        let expired = store_in(&dir).with_ttl(Duration::ZERO);
        assert_eq!(expired.load(&table).expect("load"), None);
    }

    #[test]
    fn test_save_prunes_expired_entries() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir).with_ttl(Duration::ZERO);
        store.save(&TableId::new("old"), 10).expect("save");
        store.save(&TableId::new("new"), 20).expect("save");

        let file = store.read_file().expect("read");
        assert!(!file.tables.contains_key("old"));
        assert!(file.tables.contains_key("new"));
    }

    #[test]
    fn test_forget_removes_entry() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        let table = TableId::new("samples");
        store.save(&table, 25).expect("save");
        store.forget(&table).expect("forget");
        assert_eq!(store.load(&table).expect("load"), None);
    }
}
