// SPDX-License-Identifier: PMPL-1.0-or-later

//! Document surface the translation engine writes into.
//!
//! The engine never scans markup itself: a [`Document`] hands it the
//! elements carrying a `data-i18n` key, the recipe modals by element id, and
//! the `data-lang` controls. [`page::Page`] is the in-memory implementation
//! used by the CLI and the tests; a browser binding would implement the same
//! traits over real DOM nodes.

pub mod page;

pub use page::Page;

/// An element annotated with a translation key (`data-i18n="nav.quienes"`).
pub trait BoundElement {
    fn i18n_key(&self) -> &str;
    fn set_text(&mut self, text: &str);
}

/// Structured content of one recipe modal.
///
/// Every setter overwrites its slot completely. A modal that lacks a slot
/// ignores the call.
pub trait RecipeModal {
    fn set_difficulty(&mut self, text: &str);
    /// `index` 0 is the ingredients heading, 1 the preparation heading.
    fn set_section_heading(&mut self, index: usize, text: &str);
    fn replace_ingredients(&mut self, items: &[String]);
    fn replace_steps(&mut self, items: &[String]);
    fn set_tip(&mut self, label: &str, text: &str);
}

/// A clickable language selector (`data-lang="en"`).
pub trait LanguageControl {
    fn lang_code(&self) -> &str;
    fn set_active(&mut self, active: bool);
}

pub trait Document {
    /// Every element carrying a translation key, in document order.
    fn bound_elements(&mut self) -> Vec<&mut dyn BoundElement>;

    /// Modal container with the given element id, if the page has one.
    fn recipe_modal(&mut self, element_id: &str) -> Option<&mut dyn RecipeModal>;

    fn language_controls(&mut self) -> Vec<&mut dyn LanguageControl>;

    /// Set the root element's `lang` attribute.
    fn set_document_language(&mut self, locale_tag: &str);
}
