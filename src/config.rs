// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site configuration (`citrimex.yaml`)

use crate::i18n::TranslationCatalog;
use crate::storage::FileStore;
use crate::types::Lang;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_STORAGE_PATH: &str = ".citrimex/preferences.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Code of the language shown when no preference is stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    /// Preference file location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<PathBuf>,
    /// Directory of `<code>.json` catalog files replacing the embedded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_dir: Option<PathBuf>,
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: SiteConfig = serde_yaml::from_str(content)?;
        config.default_language()?;
        Ok(config)
    }

    /// Parsed `default_language`; unsupported codes are an error.
    pub fn default_language(&self) -> Result<Option<Lang>> {
        match self.default_language.as_deref() {
            None => Ok(None),
            Some(code) => Lang::from_code(code).map(Some).ok_or_else(|| {
                anyhow!(
                    "unsupported default_language '{}' (supported: {})",
                    code,
                    supported_codes()
                )
            }),
        }
    }

    pub fn storage_path(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH))
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.storage_path())
    }

    /// Embedded or directory catalog, with the configured primary language.
    pub fn catalog(&self) -> Result<TranslationCatalog> {
        let mut catalog = match &self.catalog_dir {
            Some(dir) => TranslationCatalog::load_dir(dir)?,
            None => TranslationCatalog::builtin()?,
        };
        if let Some(lang) = self.default_language()? {
            catalog.set_primary(lang)?;
        }
        Ok(catalog)
    }
}

/// `es, en`
pub fn supported_codes() -> String {
    Lang::all()
        .iter()
        .map(|lang| lang.code())
        .collect::<Vec<_>>()
        .join(", ")
}
