// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation data for the Citrimex site.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name | Locale tag |
//! |------|----------|-------------|------------|
//! | es   | Spanish  | Español     | es-MX      |
//! | en   | English  | English     | en         |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"nav.quienes"`,
//! `"recipeModals.ceviche.steps"`. Each language is a tree whose leaves are
//! strings or ordered string lists. A lookup that misses (absent segment,
//! descending past a leaf, stopping on an inner node) yields `None`; there is
//! no cross-language fallback at lookup time because the markup already
//! carries the primary-language text.

mod catalog;
pub mod completeness;
mod tree;

pub use catalog::TranslationCatalog;
pub use completeness::{check_catalog, CompletenessReport};
pub use tree::{KeyPath, LanguageTree, Resolved};
