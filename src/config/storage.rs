//! Local persistent key-value storage
//!
//! Holds the API token and the remote document identifier between sessions,
//! independent of the configuration document itself. Stored as a flat JSON
//! object of string keys to string values.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::constants::storage::*;

#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(FILENAME);
        path
    }

    /// Open the store at `path`; a missing file yields an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            debug!(path = ?path, "Storage file not found, starting empty");
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read storage from {:?}", path))?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", path))?;

        info!("Loaded {} stored value(s) from {:?}", entries.len(), path);
        Ok(Self { path, entries })
    }

    /// Open the store, falling back to an empty one if the file is unreadable.
    /// The broken file is left in place and overwritten on the next save.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(err) => {
                warn!(error = ?err, "Ignoring unreadable storage file");
                Self {
                    path,
                    entries: BTreeMap::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }

    pub fn token(&self) -> Option<&str> {
        self.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn gist_id(&self) -> Option<&str> {
        self.get(GIST_ID_KEY).filter(|id| !id.is_empty())
    }

    /// Write all entries to disk
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create storage directory {:?}", parent))?;
        }

        let json_string = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize storage to JSON")?;

        fs::write(&self.path, json_string)
            .with_context(|| format!("Failed to write storage to {:?}", self.path))?;

        debug!(path = ?self.path, "Saved local storage");
        Ok(())
    }

    /// Record credentials after a successful save and flush them to disk
    pub fn remember_credentials(&mut self, token: &str, gist_id: Option<&str>) -> Result<()> {
        self.set(TOKEN_KEY, token);
        if let Some(id) = gist_id {
            self.set(GIST_ID_KEY, id);
        }
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(dir.path().join("storage.json")).unwrap();

        assert!(store.token().is_none());
        assert!(store.gist_id().is_none());
    }

    #[test]
    fn test_remember_credentials_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = LocalStore::open(&path).unwrap();
        store
            .remember_credentials("ghp_secret", Some("abc123"))
            .unwrap();

        let reopened = LocalStore::open(&path).unwrap();
        assert_eq!(reopened.token(), Some("ghp_secret"));
        assert_eq!(reopened.gist_id(), Some("abc123"));
    }

    #[test]
    fn test_remember_token_only_keeps_existing_id() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = LocalStore::open(&path).unwrap();
        store.remember_credentials("old", Some("kept")).unwrap();
        store.remember_credentials("new", None).unwrap();

        let reopened = LocalStore::open(&path).unwrap();
        assert_eq!(reopened.token(), Some("new"));
        assert_eq!(reopened.gist_id(), Some("kept"));
    }

    #[test]
    fn test_empty_values_read_as_absent() {
        let mut store = LocalStore::default();
        store.set(TOKEN_KEY, "");

        assert!(store.token().is_none());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(LocalStore::open(&path).is_err());

        let store = LocalStore::open_or_empty(&path);
        assert!(store.token().is_none());
        assert_eq!(store.path(), path.as_path());
    }
}
