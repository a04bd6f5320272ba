// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent storage for visitor preferences

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key under which the selected language code is stored.
pub const LANGUAGE_KEY: &str = "language";

/// Durable string key/value storage that survives restarts.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept in process memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences in a JSON file, rewritten on every save.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// RFC 3339 time of the last save, if the file exists.
    pub fn updated_at(&self) -> Result<Option<String>> {
        Ok(self.read()?.updated_at)
    }

    fn read(&self) -> Result<PreferenceFile> {
        if !self.path.exists() {
            return Ok(PreferenceFile::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", self.path.display()))
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.entries.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        // An unreadable file is replaced rather than blocking the save.
        let mut file = self.read().unwrap_or_default();
        file.entries.insert(key.to_string(), value.to_string());
        file.updated_at = Some(Utc::now().to_rfc3339());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let payload = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, payload)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
