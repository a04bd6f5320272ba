// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language trees and dotted key resolution.
//!
//! A language's strings form a tree: leaves are either a single string or an
//! ordered list of strings (recipe ingredients, preparation steps), inner
//! nodes map segment names to subtrees. Keys such as `"nav.quienes"` or
//! `"recipeModals.ceviche.ingredients"` address leaves by walking one segment
//! at a time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One language's translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguageTree {
    Scalar(String),
    List(Vec<String>),
    Node(BTreeMap<String, LanguageTree>),
}

/// A successfully resolved leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl<'a> Resolved<'a> {
    pub fn as_text(self) -> Option<&'a str> {
        match self {
            Resolved::Text(text) => Some(text),
            Resolved::List(_) => None,
        }
    }

    pub fn as_list(self) -> Option<&'a [String]> {
        match self {
            Resolved::List(items) => Some(items),
            Resolved::Text(_) => None,
        }
    }
}

/// Dot-delimited address of a leaf, e.g. `nav.quienes`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath(String);

impl KeyPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments in walk order. An empty path yields one empty segment,
    /// which never matches a catalog key.
    pub fn segments(&self) -> std::str::Split<'_, char> {
        self.0.split('.')
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for KeyPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl std::fmt::Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl LanguageTree {
    /// Walk `path` from this node.
    ///
    /// Returns `None` when a segment is absent, when a leaf is reached while
    /// segments remain, or when the walk ends on an inner node. Never panics.
    pub fn resolve(&self, path: &KeyPath) -> Option<Resolved<'_>> {
        let mut current = self;
        for segment in path.segments() {
            match current {
                LanguageTree::Node(children) => current = children.get(segment)?,
                LanguageTree::Scalar(_) | LanguageTree::List(_) => return None,
            }
        }
        match current {
            LanguageTree::Scalar(text) => Some(Resolved::Text(text)),
            LanguageTree::List(items) => Some(Resolved::List(items)),
            LanguageTree::Node(_) => None,
        }
    }

    /// Direct child of an inner node.
    pub fn child(&self, segment: &str) -> Option<&LanguageTree> {
        match self {
            LanguageTree::Node(children) => children.get(segment),
            _ => None,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, LanguageTree::Node(_))
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            LanguageTree::Scalar(_) => "text",
            LanguageTree::List(_) => "list",
            LanguageTree::Node(_) => "node",
        }
    }

    /// Every leaf with its full dotted path, in key order.
    pub fn leaves(&self) -> Vec<(String, &LanguageTree)> {
        let mut out = Vec::new();
        collect_leaves(self, &mut String::new(), &mut out);
        out
    }
}

fn collect_leaves<'a>(
    tree: &'a LanguageTree,
    prefix: &mut String,
    out: &mut Vec<(String, &'a LanguageTree)>,
) {
    match tree {
        LanguageTree::Node(children) => {
            for (key, child) in children {
                let len = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(key);
                collect_leaves(child, prefix, out);
                prefix.truncate(len);
            }
        }
        leaf => out.push((prefix.clone(), leaf)),
    }
}
