// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static text binder
//!
//! Writes the resolved string for every `data-i18n` element. Elements whose
//! key does not resolve to a non-empty string keep their current text.

use crate::dom::Document;
use crate::i18n::{KeyPath, Resolved, TranslationCatalog};
use crate::types::Lang;
use serde::{Deserialize, Serialize};

/// Why an element was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NotFound,
    /// The key names a list, which a plain text element cannot show.
    ListValue,
    EmptyValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedKey {
    pub key: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindReport {
    pub bound: usize,
    pub skipped: Vec<SkippedKey>,
}

/// Apply `lang` to every bound element of `document`.
pub fn bind<D: Document + ?Sized>(
    catalog: &TranslationCatalog,
    lang: Lang,
    document: &mut D,
) -> BindReport {
    let mut report = BindReport::default();

    for element in document.bound_elements() {
        let key = KeyPath::from(element.i18n_key());
        match catalog.resolve(lang, &key) {
            Some(Resolved::Text(text)) if !text.is_empty() => {
                element.set_text(text);
                report.bound += 1;
            }
            Some(Resolved::Text(_)) => report.skip(key, SkipReason::EmptyValue),
            Some(Resolved::List(_)) => report.skip(key, SkipReason::ListValue),
            None => report.skip(key, SkipReason::NotFound),
        }
    }

    report
}

impl BindReport {
    fn skip(&mut self, key: KeyPath, reason: SkipReason) {
        self.skipped.push(SkippedKey {
            key: key.to_string(),
            reason,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::page::{Page, TextElement};
    use std::collections::BTreeMap;

    fn catalog() -> TranslationCatalog {
        let mut trees = BTreeMap::new();
        trees.insert(
            Lang::Es,
            serde_json::from_str(
                r#"{"nav": {"quienes": "Quiénes Somos", "mercado": "Mercado", "vacio": ""},
                    "tips": {"lista": ["a", "b"]}}"#,
            )
            .unwrap(),
        );
        trees.insert(
            Lang::En,
            serde_json::from_str(r#"{"nav": {"quienes": "About Us"}}"#).unwrap(),
        );
        TranslationCatalog::from_trees(trees)
    }

    #[test]
    fn scalar_keys_overwrite_text() {
        let mut page = Page::default();
        page.elements.push(TextElement::bound("nav.quienes", "About Us"));

        let report = bind(&catalog(), Lang::Es, &mut page);
        assert_eq!(report.bound, 1);
        assert!(report.skipped.is_empty());
        assert_eq!(page.bound_text("nav.quienes"), Some("Quiénes Somos"));
    }

    #[test]
    fn missing_key_keeps_last_text() {
        let mut page = Page::default();
        page.elements.push(TextElement::bound("nav.mercado", "Market"));

        let catalog = catalog();
        bind(&catalog, Lang::Es, &mut page);
        assert_eq!(page.bound_text("nav.mercado"), Some("Mercado"));

        let report = bind(&catalog, Lang::En, &mut page);
        assert_eq!(page.bound_text("nav.mercado"), Some("Mercado"));
        assert_eq!(report.skipped[0].reason, SkipReason::NotFound);
    }

    #[test]
    fn list_and_empty_values_are_skipped() {
        let mut page = Page::default();
        page.elements.push(TextElement::bound("tips.lista", "keep me"));
        page.elements.push(TextElement::bound("nav.vacio", "keep me too"));

        let report = bind(&catalog(), Lang::Es, &mut page);
        assert_eq!(report.bound, 0);
        assert_eq!(
            report
                .skipped
                .iter()
                .map(|skip| skip.reason)
                .collect::<Vec<_>>(),
            vec![SkipReason::ListValue, SkipReason::EmptyValue]
        );
        assert_eq!(page.bound_text("tips.lista"), Some("keep me"));
        assert_eq!(page.bound_text("nav.vacio"), Some("keep me too"));
    }

    #[test]
    fn every_element_with_the_same_key_is_updated() {
        let mut page = Page::default();
        page.elements.push(TextElement::bound("nav.quienes", "x"));
        page.elements.push(TextElement::bound("nav.quienes", "y"));

        let report = bind(&catalog(), Lang::En, &mut page);
        assert_eq!(report.bound, 2);
        assert!(page.elements.iter().all(|element| element.text == "About Us"));
    }
}
