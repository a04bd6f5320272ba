// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for the Citrimex site.
//!
//! The catalog is one [`LanguageTree`] per supported [`Lang`]. The default
//! catalog is embedded at compile time from `assets/i18n/<code>.json`; a
//! directory with the same layout can replace it at runtime (see
//! [`TranslationCatalog::load_dir`]).
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`] and its code/locale arms
//! 2. Create `assets/i18n/<code>.json` with the same key layout as `es.json`
//! 3. Add it to [`EMBEDDED`]
//!
//! Keys missing from a language are tolerated: elements bound to them keep
//! their current text. Run `citrimex-i18n check` to list them.

use super::tree::{KeyPath, LanguageTree, Resolved};
use crate::types::Lang;
use anyhow::{anyhow, Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const EMBEDDED: &[(Lang, &str)] = &[
    (Lang::Es, include_str!("../../assets/i18n/es.json")),
    (Lang::En, include_str!("../../assets/i18n/en.json")),
];

/// Immutable set of language trees, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationCatalog {
    trees: BTreeMap<Lang, LanguageTree>,
    primary: Lang,
}

impl TranslationCatalog {
    /// Parse the catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        let mut trees = BTreeMap::new();
        for &(lang, source) in EMBEDDED {
            let tree = parse_tree(source)
                .with_context(|| format!("parsing embedded {} catalog", lang))?;
            trees.insert(lang, tree);
        }
        Ok(Self::from_trees(trees))
    }

    /// Load `<dir>/<code>.json` for every supported language.
    ///
    /// Languages whose file is absent are left out of the catalog; at least
    /// one language must be present.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(anyhow!("catalog directory not found: {}", dir.display()));
        }

        let mut trees = BTreeMap::new();
        for lang in Lang::all() {
            let path = dir.join(format!("{}.json", lang.code()));
            if !path.is_file() {
                continue;
            }
            let source = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let tree = parse_tree(&source).with_context(|| format!("parsing {}", path.display()))?;
            trees.insert(*lang, tree);
        }

        if trees.is_empty() {
            return Err(anyhow!(
                "no catalog files in {} (expected one of: {})",
                dir.display(),
                Lang::all()
                    .iter()
                    .map(|lang| format!("{}.json", lang.code()))
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        Ok(Self::from_trees(trees))
    }

    /// Build a catalog from already-parsed trees. The primary language is
    /// [`Lang::default`] when it has a tree, otherwise the first language
    /// present.
    pub fn from_trees(trees: BTreeMap<Lang, LanguageTree>) -> Self {
        let primary = if trees.contains_key(&Lang::default()) || trees.is_empty() {
            Lang::default()
        } else {
            *trees.keys().next().unwrap_or(&Lang::default())
        };
        Self { trees, primary }
    }

    /// Change the primary language. Rejected when the catalog has no tree
    /// for it.
    pub fn set_primary(&mut self, lang: Lang) -> Result<()> {
        if !self.trees.contains_key(&lang) {
            return Err(anyhow!("catalog has no '{}' translations", lang));
        }
        self.primary = lang;
        Ok(())
    }

    /// Language shown when no usable preference is stored.
    pub fn primary(&self) -> Lang {
        self.primary
    }

    pub fn contains(&self, lang: Lang) -> bool {
        self.trees.contains_key(&lang)
    }

    pub fn tree(&self, lang: Lang) -> Option<&LanguageTree> {
        self.trees.get(&lang)
    }

    /// Languages with a tree, in [`Lang`] order.
    pub fn languages(&self) -> impl Iterator<Item = Lang> + '_ {
        self.trees.keys().copied()
    }

    /// Resolve `key` in `lang`. A language without a tree resolves nothing.
    pub fn resolve(&self, lang: Lang, key: &KeyPath) -> Option<Resolved<'_>> {
        self.tree(lang)?.resolve(key)
    }

    /// Resolve a key that must be a single string.
    pub fn text(&self, lang: Lang, key: &str) -> Option<&str> {
        self.resolve(lang, &KeyPath::from(key))?.as_text()
    }
}

fn parse_tree(source: &str) -> Result<LanguageTree> {
    let tree: LanguageTree = serde_json::from_str(source)?;
    if !tree.is_node() {
        return Err(anyhow!(
            "catalog root must be an object, found {}",
            tree.kind()
        ));
    }
    Ok(tree)
}
