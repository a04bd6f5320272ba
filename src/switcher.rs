// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language state and the language switcher
//!
//! [`LanguageSwitcher::set_language`] and the page-load
//! [`LanguageSwitcher::initialize`] pass are the only ways the displayed
//! language changes. One call records the choice, persists it, marks the matching
//! language buttons, rebinds every text element, rebuilds every recipe modal
//! and updates the document's `lang` attribute before returning.

use crate::binder::{self, BindReport};
use crate::dom::Document;
use crate::i18n::TranslationCatalog;
use crate::recipes::{self, SyncReport};
use crate::storage::{PreferenceStore, LANGUAGE_KEY};
use crate::types::Lang;
use serde::{Deserialize, Serialize};

/// Where the initial language came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source", content = "value")]
pub enum StateOrigin {
    Stored,
    /// Nothing stored.
    Default,
    /// A stored value that is not a catalog language.
    Rejected(String),
    /// The store could not be read.
    Unreadable(String),
}

/// The currently displayed language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageState {
    current: Lang,
    origin: StateOrigin,
}

impl LanguageState {
    pub fn new(current: Lang) -> Self {
        Self {
            current,
            origin: StateOrigin::Default,
        }
    }

    /// Derive the initial language from `store`, falling back to the
    /// catalog's primary language for absent, unknown or unreadable values.
    pub fn restore<S: PreferenceStore + ?Sized>(store: &S, catalog: &TranslationCatalog) -> Self {
        let fallback = catalog.primary();
        match store.load(LANGUAGE_KEY) {
            Ok(Some(code)) => {
                match Lang::from_code(&code).filter(|lang| catalog.contains(*lang)) {
                    Some(lang) => Self {
                        current: lang,
                        origin: StateOrigin::Stored,
                    },
                    None => Self {
                        current: fallback,
                        origin: StateOrigin::Rejected(code),
                    },
                }
            }
            Ok(None) => Self::new(fallback),
            Err(err) => Self {
                current: fallback,
                origin: StateOrigin::Unreadable(format!("{:#}", err)),
            },
        }
    }

    pub fn current(&self) -> Lang {
        self.current
    }

    pub fn origin(&self) -> &StateOrigin {
        &self.origin
    }
}

/// Everything one `set_language` call did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchReport {
    pub language: Lang,
    pub locale: String,
    pub persisted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persist_error: Option<String>,
    pub active_controls: usize,
    pub text: BindReport,
    pub modals: SyncReport,
}

pub struct LanguageSwitcher<S: PreferenceStore> {
    catalog: TranslationCatalog,
    store: S,
    state: LanguageState,
}

impl<S: PreferenceStore> LanguageSwitcher<S> {
    /// Restore the language state from `store`. Nothing is written to any
    /// document until [`initialize`](Self::initialize) or
    /// [`set_language`](Self::set_language) runs.
    pub fn new(catalog: TranslationCatalog, store: S) -> Self {
        let state = LanguageState::restore(&store, &catalog);
        Self {
            catalog,
            store,
            state,
        }
    }

    pub fn current(&self) -> Lang {
        self.state.current()
    }

    pub fn state(&self) -> &LanguageState {
        &self.state
    }

    pub fn catalog(&self) -> &TranslationCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Page-load pass: apply the restored language.
    pub fn initialize<D: Document + ?Sized>(&mut self, document: &mut D) -> SwitchReport {
        // restore only ever yields catalog languages
        self.apply(self.state.current(), document)
    }

    /// Handle a click on a `data-lang` control. Codes that are not catalog
    /// languages are ignored and nothing changes.
    pub fn select<D: Document + ?Sized>(
        &mut self,
        code: &str,
        document: &mut D,
    ) -> Option<SwitchReport> {
        self.set_language(Lang::from_code(code)?, document)
    }

    /// Switch the page to `lang`. Re-selecting the current language reruns
    /// the full pass.
    ///
    /// Returns `None` without touching the state, the store or the document
    /// when the catalog has no tree for `lang`.
    pub fn set_language<D: Document + ?Sized>(
        &mut self,
        lang: Lang,
        document: &mut D,
    ) -> Option<SwitchReport> {
        if !self.catalog.contains(lang) {
            return None;
        }
        Some(self.apply(lang, document))
    }

    fn apply<D: Document + ?Sized>(&mut self, lang: Lang, document: &mut D) -> SwitchReport {
        self.state.current = lang;

        let persist_error = self
            .store
            .save(LANGUAGE_KEY, lang.code())
            .err()
            .map(|err| format!("{:#}", err));
        if let Some(err) = &persist_error {
            eprintln!("warning: language preference not saved: {}", err);
        }

        let mut active_controls = 0;
        for control in document.language_controls() {
            let active = control.lang_code() == lang.code();
            control.set_active(active);
            if active {
                active_controls += 1;
            }
        }

        let text = binder::bind(&self.catalog, lang, document);
        let modals = recipes::sync_recipe_modals(&self.catalog, lang, document);
        document.set_document_language(lang.locale_tag());

        SwitchReport {
            language: lang,
            locale: lang.locale_tag().to_string(),
            persisted: persist_error.is_none(),
            persist_error,
            active_controls,
            text,
            modals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::page::{LangButton, Page, TextElement};
    use crate::storage::MemoryStore;
    use anyhow::anyhow;
    use std::collections::BTreeMap;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Err(anyhow!("storage disabled"))
        }

        fn save(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow!("storage disabled"))
        }
    }

    fn page() -> Page {
        Page {
            lang: "es-MX".to_string(),
            elements: vec![TextElement::bound("nav.quienes", "About Us")],
            controls: vec![
                LangButton {
                    lang: "es".to_string(),
                    active: false,
                },
                LangButton {
                    lang: "en".to_string(),
                    active: true,
                },
            ],
            ..Page::default()
        }
    }

    fn catalog() -> TranslationCatalog {
        TranslationCatalog::builtin().unwrap()
    }

    #[test]
    fn empty_store_starts_in_primary_language() {
        let switcher = LanguageSwitcher::new(catalog(), MemoryStore::new());
        assert_eq!(switcher.current(), Lang::Es);
        assert_eq!(switcher.state().origin(), &StateOrigin::Default);
    }

    #[test]
    fn unknown_stored_code_is_rejected() {
        let store = MemoryStore::with_entry(LANGUAGE_KEY, "fr");
        let switcher = LanguageSwitcher::new(catalog(), store);
        assert_eq!(switcher.current(), Lang::Es);
        assert_eq!(
            switcher.state().origin(),
            &StateOrigin::Rejected("fr".to_string())
        );
    }

    #[test]
    fn unreadable_store_falls_back() {
        let switcher = LanguageSwitcher::new(catalog(), BrokenStore);
        assert_eq!(switcher.current(), Lang::Es);
        assert!(matches!(
            switcher.state().origin(),
            StateOrigin::Unreadable(_)
        ));
    }

    #[test]
    fn set_language_applies_every_step() {
        let mut switcher = LanguageSwitcher::new(catalog(), MemoryStore::new());
        let mut page = page();

        let report = switcher.set_language(Lang::Es, &mut page).unwrap();
        assert_eq!(switcher.current(), Lang::Es);
        assert!(report.persisted);
        assert_eq!(
            switcher.store().load(LANGUAGE_KEY).unwrap().as_deref(),
            Some("es")
        );
        assert_eq!(page.active_controls(), vec!["es"]);
        assert_eq!(report.active_controls, 1);
        assert_eq!(page.bound_text("nav.quienes"), Some("Quiénes Somos"));
        assert_eq!(page.lang, "es-MX");

        switcher.set_language(Lang::En, &mut page);
        assert_eq!(page.active_controls(), vec!["en"]);
        assert_eq!(page.bound_text("nav.quienes"), Some("About Us"));
        assert_eq!(page.lang, "en");
    }

    #[test]
    fn reselecting_is_idempotent() {
        let mut switcher = LanguageSwitcher::new(catalog(), MemoryStore::new());
        let mut page = page();
        let first = switcher.set_language(Lang::En, &mut page).unwrap();
        let once = page.clone();
        let second = switcher.set_language(Lang::En, &mut page).unwrap();
        assert_eq!(page, once);
        assert_eq!(first, second);
    }

    #[test]
    fn select_ignores_unknown_codes() {
        let mut switcher = LanguageSwitcher::new(catalog(), MemoryStore::new());
        let mut page = page();
        let before = page.clone();
        assert!(switcher.select("de", &mut page).is_none());
        assert_eq!(page, before);
        assert_eq!(switcher.store().load(LANGUAGE_KEY).unwrap(), None);

        assert!(switcher.select("en", &mut page).is_some());
        assert_eq!(switcher.current(), Lang::En);
    }

    #[test]
    fn set_language_ignores_languages_missing_from_catalog() {
        let spanish_only = TranslationCatalog::from_trees(BTreeMap::from([(
            Lang::Es,
            catalog().tree(Lang::Es).unwrap().clone(),
        )]));
        let mut switcher = LanguageSwitcher::new(spanish_only, MemoryStore::new());
        let mut page = page();
        switcher.initialize(&mut page);
        let before = page.clone();

        assert!(switcher.set_language(Lang::En, &mut page).is_none());
        assert!(switcher.select("en", &mut page).is_none());
        assert_eq!(switcher.current(), Lang::Es);
        assert_eq!(page, before);
        assert_eq!(page.active_controls(), vec!["es"]);
        assert_eq!(
            switcher.store().load(LANGUAGE_KEY).unwrap().as_deref(),
            Some("es")
        );

        let reloaded = LanguageState::restore(switcher.store(), switcher.catalog());
        assert_eq!(reloaded.current(), switcher.current());
    }

    #[test]
    fn failed_persist_still_switches() {
        let mut switcher = LanguageSwitcher::new(catalog(), BrokenStore);
        let mut page = page();
        let report = switcher.set_language(Lang::En, &mut page).unwrap();
        assert!(!report.persisted);
        assert!(report.persist_error.is_some());
        assert_eq!(switcher.current(), Lang::En);
        assert_eq!(page.lang, "en");
    }
}
