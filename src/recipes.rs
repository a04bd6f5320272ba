// SPDX-License-Identifier: PMPL-1.0-or-later

//! Recipe modal synchronizer
//!
//! Each recipe modal is rebuilt from `recipeModals.<id>` on every pass:
//! difficulty, both section headings, the full ingredient and step lists and
//! the tip. A recipe whose entry is incomplete in the requested language is
//! skipped as a whole so a modal never mixes two languages.

use crate::dom::Document;
use crate::i18n::{LanguageTree, TranslationCatalog};
use crate::types::{Lang, RecipeId};
use serde::{Deserialize, Serialize};

/// Catalog subtree holding the recipe entries.
pub const RECIPE_MODALS_KEY: &str = "recipeModals";
/// Entry under [`RECIPE_MODALS_KEY`] holding the shared section labels.
pub const COMMON_KEY: &str = "common";
/// Bold prefix of the tip block. Brand text, not translated.
pub const TIP_LABEL: &str = "Tip CITRIMEX:";

/// One recipe's translated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeEntry<'a> {
    pub difficulty: &'a str,
    pub ingredients: &'a [String],
    pub steps: &'a [String],
    pub tip: &'a str,
}

/// Section labels shared by every recipe modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeLabels<'a> {
    pub ingredients_title: &'a str,
    pub preparation_title: &'a str,
}

impl<'a> RecipeEntry<'a> {
    /// Entry for `id` in `lang`. `None` unless all four fields are present
    /// with the right shape.
    pub fn lookup(catalog: &'a TranslationCatalog, lang: Lang, id: RecipeId) -> Option<Self> {
        let entry = recipe_modals(catalog, lang)?.child(id.as_str())?;
        Some(Self {
            difficulty: text(entry, "difficulty")?,
            ingredients: list(entry, "ingredients")?,
            steps: list(entry, "steps")?,
            tip: text(entry, "tip")?,
        })
    }
}

impl<'a> RecipeLabels<'a> {
    pub fn lookup(catalog: &'a TranslationCatalog, lang: Lang) -> Option<Self> {
        let common = recipe_modals(catalog, lang)?.child(COMMON_KEY)?;
        Some(Self {
            ingredients_title: text(common, "ingredientsTitle")?,
            preparation_title: text(common, "preparationTitle")?,
        })
    }
}

fn recipe_modals(catalog: &TranslationCatalog, lang: Lang) -> Option<&LanguageTree> {
    catalog.tree(lang)?.child(RECIPE_MODALS_KEY)
}

fn text<'a>(node: &'a LanguageTree, key: &str) -> Option<&'a str> {
    match node.child(key)? {
        LanguageTree::Scalar(value) => Some(value),
        _ => None,
    }
}

fn list<'a>(node: &'a LanguageTree, key: &str) -> Option<&'a [String]> {
    match node.child(key)? {
        LanguageTree::List(items) => Some(items),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalSkipReason {
    /// The page has no `modal-recipe-<id>` container.
    NoModal,
    /// The catalog has no complete entry for the recipe.
    NoEntry,
    /// The shared section labels are missing.
    NoLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedModal {
    pub recipe: RecipeId,
    pub reason: ModalSkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub synced: Vec<RecipeId>,
    pub skipped: Vec<SkippedModal>,
}

/// Rewrite every recipe modal of `document` in `lang`.
pub fn sync_recipe_modals<D: Document + ?Sized>(
    catalog: &TranslationCatalog,
    lang: Lang,
    document: &mut D,
) -> SyncReport {
    let mut report = SyncReport::default();
    let labels = RecipeLabels::lookup(catalog, lang);

    for &recipe in RecipeId::all() {
        let Some(modal) = document.recipe_modal(&recipe.modal_id()) else {
            report.skip(recipe, ModalSkipReason::NoModal);
            continue;
        };
        let Some(entry) = RecipeEntry::lookup(catalog, lang, recipe) else {
            report.skip(recipe, ModalSkipReason::NoEntry);
            continue;
        };
        let Some(labels) = labels else {
            report.skip(recipe, ModalSkipReason::NoLabels);
            continue;
        };

        modal.set_difficulty(entry.difficulty);
        modal.set_section_heading(0, labels.ingredients_title);
        modal.replace_ingredients(entry.ingredients);
        modal.set_section_heading(1, labels.preparation_title);
        modal.replace_steps(entry.steps);
        modal.set_tip(TIP_LABEL, entry.tip);
        report.synced.push(recipe);
    }

    report
}

impl SyncReport {
    fn skip(&mut self, recipe: RecipeId, reason: ModalSkipReason) {
        self.skipped.push(SkippedModal { recipe, reason });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::page::{ModalElement, Page};
    use std::collections::BTreeMap;

    fn builtin() -> TranslationCatalog {
        TranslationCatalog::builtin().unwrap()
    }

    fn page_with(recipes: &[RecipeId]) -> Page {
        Page {
            modals: recipes
                .iter()
                .map(|recipe| ModalElement::with_all_slots(&recipe.modal_id()))
                .collect(),
            ..Page::default()
        }
    }

    #[test]
    fn every_builtin_recipe_has_an_entry() {
        let catalog = builtin();
        for lang in Lang::all() {
            for recipe in RecipeId::all() {
                assert!(
                    RecipeEntry::lookup(&catalog, *lang, *recipe).is_some(),
                    "{} has no {} entry",
                    lang,
                    recipe
                );
            }
            assert!(RecipeLabels::lookup(&catalog, *lang).is_some());
        }
    }

    #[test]
    fn ceviche_in_english() {
        let catalog = builtin();
        let mut page = page_with(&[RecipeId::Ceviche]);

        let report = sync_recipe_modals(&catalog, Lang::En, &mut page);
        assert_eq!(report.synced, vec![RecipeId::Ceviche]);

        let modal = page.modal("modal-recipe-ceviche").unwrap();
        let ingredients = modal.ingredients.as_ref().unwrap();
        assert_eq!(ingredients.len(), 10);
        assert!(ingredients[0].starts_with("500g fresh white fish"));
        assert_eq!(modal.headings, vec!["Ingredients", "Preparation"]);
        assert_eq!(modal.difficulty.as_deref(), Some("Easy"));
        assert_eq!(modal.tip.as_ref().unwrap().label, TIP_LABEL);
    }

    #[test]
    fn lists_are_fully_replaced_in_order() {
        let catalog = builtin();
        let mut page = page_with(&[RecipeId::Limonada]);
        page.modals[0].steps = Some(vec!["stale".to_string(); 12]);

        sync_recipe_modals(&catalog, Lang::Es, &mut page);
        let expected = RecipeEntry::lookup(&catalog, Lang::Es, RecipeId::Limonada).unwrap();
        let modal = page.modal("modal-recipe-limonada").unwrap();
        assert_eq!(modal.steps.as_deref(), Some(expected.steps));
        assert_eq!(modal.ingredients.as_deref(), Some(expected.ingredients));
    }

    #[test]
    fn absent_modals_are_skipped() {
        let mut page = page_with(&[RecipeId::Pay]);
        let report = sync_recipe_modals(&builtin(), Lang::En, &mut page);
        assert_eq!(report.synced, vec![RecipeId::Pay]);
        assert_eq!(report.skipped.len(), 5);
        assert!(report
            .skipped
            .iter()
            .all(|skip| skip.reason == ModalSkipReason::NoModal));
    }

    #[test]
    fn incomplete_entry_skips_whole_modal() {
        let mut trees = BTreeMap::new();
        trees.insert(
            Lang::En,
            serde_json::from_str(
                r#"{"recipeModals": {
                    "common": {"ingredientsTitle": "Ingredients", "preparationTitle": "Preparation"},
                    "tacos": {"difficulty": "Intermediate", "ingredients": ["tortillas"], "tip": "lime"},
                    "pollo": {"difficulty": "Easy", "ingredients": ["chicken"],
                              "steps": ["cook"], "tip": "rest it"}
                }}"#,
            )
            .unwrap(),
        );
        let catalog = TranslationCatalog::from_trees(trees);
        let mut page = page_with(&[RecipeId::Tacos, RecipeId::Pollo]);
        page.modals[0].difficulty = Some("Intermedio".to_string());

        let report = sync_recipe_modals(&catalog, Lang::En, &mut page);
        assert_eq!(report.synced, vec![RecipeId::Pollo]);
        assert!(report.skipped.contains(&SkippedModal {
            recipe: RecipeId::Tacos,
            reason: ModalSkipReason::NoEntry,
        }));
        assert_eq!(
            page.modal("modal-recipe-tacos").unwrap().difficulty.as_deref(),
            Some("Intermedio")
        );
        assert_eq!(
            page.modal("modal-recipe-pollo").unwrap().steps.as_deref(),
            Some(&["cook".to_string()][..])
        );
    }

    #[test]
    fn missing_labels_skip_modal() {
        let mut trees = BTreeMap::new();
        trees.insert(
            Lang::En,
            serde_json::from_str(
                r#"{"recipeModals": {"pay": {"difficulty": "Easy", "ingredients": [],
                    "steps": [], "tip": "chill"}}}"#,
            )
            .unwrap(),
        );
        let catalog = TranslationCatalog::from_trees(trees);
        let mut page = page_with(&[RecipeId::Pay]);

        let report = sync_recipe_modals(&catalog, Lang::En, &mut page);
        assert!(report.synced.is_empty());
        assert!(report.skipped.contains(&SkippedModal {
            recipe: RecipeId::Pay,
            reason: ModalSkipReason::NoLabels,
        }));
        assert_eq!(page.modal("modal-recipe-pay").unwrap().difficulty.as_deref(), Some(""));
    }

    #[test]
    fn language_without_tree_syncs_nothing() {
        let mut trees = BTreeMap::new();
        trees.insert(Lang::Es, serde_json::from_str(r#"{"nav": {}}"#).unwrap());
        let catalog = TranslationCatalog::from_trees(trees);
        let mut page = page_with(RecipeId::all());

        let report = sync_recipe_modals(&catalog, Lang::En, &mut page);
        assert!(report.synced.is_empty());
        assert_eq!(report.skipped.len(), RecipeId::all().len());
    }
}
