// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key resolution against the embedded catalog

use citrimex_i18n::i18n::{check_catalog, KeyPath, LanguageTree, Resolved, TranslationCatalog};
use citrimex_i18n::Lang;

fn catalog() -> TranslationCatalog {
    TranslationCatalog::builtin().expect("embedded catalog should parse")
}

#[test]
fn test_every_leaf_resolves_to_its_authored_value() {
    let catalog = catalog();
    for lang in catalog.languages() {
        let tree = catalog.tree(lang).unwrap();
        for (path, leaf) in tree.leaves() {
            let resolved = catalog.resolve(lang, &KeyPath::from(path.as_str()));
            match leaf {
                LanguageTree::Scalar(text) => {
                    assert_eq!(resolved, Some(Resolved::Text(text.as_str())), "{}", path)
                }
                LanguageTree::List(items) => {
                    assert_eq!(resolved, Some(Resolved::List(items.as_slice())), "{}", path)
                }
                LanguageTree::Node(_) => panic!("leaves() returned a node at {}", path),
            }
        }
    }
}

#[test]
fn test_absent_paths_are_not_found() {
    let catalog = catalog();
    for key in [
        "nav.blog",
        "recipeModals.salmon.tip",
        "recipeModals.ceviche.steps.1",
        "recipeModals.ceviche",
        "hero",
        "",
    ] {
        for lang in Lang::all() {
            assert_eq!(catalog.resolve(*lang, &KeyPath::from(key)), None, "{} {}", lang, key);
        }
    }
}

#[test]
fn test_languages_define_the_same_keys() {
    let report = check_catalog(&catalog());
    assert!(report.missing.is_empty(), "{:?}", report.missing);
    assert!(report.length_mismatches.is_empty(), "{:?}", report.length_mismatches);
}

#[test]
fn test_accented_spanish_text_is_preserved() {
    let catalog = catalog();
    assert_eq!(catalog.text(Lang::Es, "hero.title"), Some("De México para el mundo"));
    assert_eq!(catalog.text(Lang::Es, "fact.title"), Some("¿Sabías que...?"));
    assert_eq!(catalog.text(Lang::Es, "seasonal.badge"), Some("🍊 Por Temporada"));
}
