// SPDX-License-Identifier: PMPL-1.0-or-later

//! Cross-language completeness check.
//!
//! At runtime a key missing from one language is silently skipped (the bound
//! element keeps its text). This module surfaces those gaps as content issues
//! so they can be fixed before they reach the page.

use super::catalog::TranslationCatalog;
use super::tree::{KeyPath, LanguageTree};
use crate::types::Lang;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A leaf defined in some language but absent from `lang`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingKey {
    pub lang: Lang,
    pub path: String,
    pub defined_in: Vec<Lang>,
}

/// A path that is a leaf in every language but not the same kind of leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeMismatch {
    pub path: String,
    pub kinds: Vec<(Lang, String)>,
}

/// A list leaf whose item count differs between languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthMismatch {
    pub path: String,
    pub lengths: Vec<(Lang, usize)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub languages: Vec<Lang>,
    pub total_paths: usize,
    pub missing: Vec<MissingKey>,
    pub shape_mismatches: Vec<ShapeMismatch>,
    pub length_mismatches: Vec<LengthMismatch>,
    /// Leaves that no dotted key can reach, e.g. because a segment name
    /// itself contains a dot.
    pub unaddressable: Vec<String>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
            && self.shape_mismatches.is_empty()
            && self.length_mismatches.is_empty()
            && self.unaddressable.is_empty()
    }
}

/// Compare every language in `catalog` against the union of all leaf paths.
pub fn check_catalog(catalog: &TranslationCatalog) -> CompletenessReport {
    let languages: Vec<Lang> = catalog.languages().collect();
    let mut by_path: BTreeMap<String, Vec<(Lang, &LanguageTree)>> = BTreeMap::new();
    for lang in &languages {
        if let Some(tree) = catalog.tree(*lang) {
            for (path, leaf) in tree.leaves() {
                by_path.entry(path).or_default().push((*lang, leaf));
            }
        }
    }

    let mut report = CompletenessReport {
        languages: languages.clone(),
        total_paths: by_path.len(),
        ..CompletenessReport::default()
    };

    for (path, entries) in &by_path {
        let key = KeyPath::from(path.as_str());
        if entries
            .iter()
            .any(|(lang, _)| catalog.resolve(*lang, &key).is_none())
        {
            report.unaddressable.push(path.clone());
        }

        let defined_in: Vec<Lang> = entries.iter().map(|(lang, _)| *lang).collect();
        for lang in &languages {
            if !defined_in.contains(lang) {
                report.missing.push(MissingKey {
                    lang: *lang,
                    path: path.clone(),
                    defined_in: defined_in.clone(),
                });
            }
        }

        let kinds: BTreeSet<&str> = entries.iter().map(|(_, leaf)| leaf.kind()).collect();
        if kinds.len() > 1 {
            report.shape_mismatches.push(ShapeMismatch {
                path: path.clone(),
                kinds: entries
                    .iter()
                    .map(|(lang, leaf)| (*lang, leaf.kind().to_string()))
                    .collect(),
            });
            continue;
        }

        let lengths: Vec<(Lang, usize)> = entries
            .iter()
            .filter_map(|(lang, leaf)| match leaf {
                LanguageTree::List(items) => Some((*lang, items.len())),
                _ => None,
            })
            .collect();
        let distinct: BTreeSet<usize> = lengths.iter().map(|(_, len)| *len).collect();
        if distinct.len() > 1 {
            report.length_mismatches.push(LengthMismatch {
                path: path.clone(),
                lengths,
            });
        }
    }

    report
}

/// Shape of a well-formed `data-i18n` key: non-empty segments without dots
/// or whitespace.
pub fn key_pattern() -> Regex {
    Regex::new(r"^[^.\s]+(\.[^.\s]+)*$").expect("static key pattern is valid")
}
