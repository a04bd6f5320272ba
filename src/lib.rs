// SPDX-License-Identifier: PMPL-1.0-or-later

//! citrimex-i18n: bilingual text engine for the Citrimex site.
//!
//! Keeps a page's visible text in step with the visitor's chosen language
//! (Spanish or English).
//!
//! ENGINE PILLARS:
//! 1. **Catalog**: one nested tree of strings and string lists per language,
//!    addressed by dotted keys such as `nav.quienes`.
//! 2. **Binder**: rewrites every `data-i18n` element from the catalog and
//!    leaves elements with unresolvable keys untouched.
//! 3. **Recipe modals**: rebuilds each recipe modal (difficulty, headings,
//!    ingredient and step lists, tip) from its catalog entry in one pass.
//! 4. **Switcher**: owns the current language, persists it, and drives the
//!    binder and the modal synchronizer on every change.

pub mod binder;
pub mod config;
pub mod diagnostics;
pub mod dom;
pub mod i18n;
pub mod recipes;
pub mod report;
pub mod storage;
pub mod switcher;
pub mod types;

pub use switcher::{LanguageState, LanguageSwitcher, SwitchReport};
pub use types::{Lang, RecipeId};
