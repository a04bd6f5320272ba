// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for citrimex-i18n
//!
//! The language and recipe enumerations are closed sets: every value the
//! site can display is listed here, and anything read from outside (stored
//! preferences, `data-lang` attributes, CLI flags) is parsed into them or
//! rejected.

use serde::{Deserialize, Serialize};

/// Languages the site is translated into.
///
/// Each variant maps to an ISO 639-1 two-letter code. Spanish is the primary
/// language: it is the text baked into the markup and the fallback whenever
/// no usable preference is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Es,
    En,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    /// Parse a language code.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive, and surrounding
    /// whitespace is not trimmed: stored values are written by us and must
    /// round-trip exactly.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "es" => Some(Lang::Es),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::Es, Lang::En]
    }

    /// Value written to the document's `lang` attribute.
    pub fn locale_tag(&self) -> &'static str {
        match self {
            Lang::Es => "es-MX",
            Lang::En => "en",
        }
    }

    /// Language name written in its own script, for language pickers.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::Es => "Español",
            Lang::En => "English",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Es
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Recipes that have a modal on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeId {
    Ceviche,
    Limonada,
    Guacamole,
    Tacos,
    Pay,
    Pollo,
}

impl RecipeId {
    /// Identifier used both as the catalog key under `recipeModals` and as
    /// the suffix of the modal's element id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ceviche => "ceviche",
            Self::Limonada => "limonada",
            Self::Guacamole => "guacamole",
            Self::Tacos => "tacos",
            Self::Pay => "pay",
            Self::Pollo => "pollo",
        }
    }

    /// Every recipe, in the order the modals are synchronized.
    pub fn all() -> &'static [RecipeId] {
        &[
            Self::Ceviche,
            Self::Limonada,
            Self::Guacamole,
            Self::Tacos,
            Self::Pay,
            Self::Pollo,
        ]
    }

    /// Element id of the recipe's modal container, e.g. `modal-recipe-pay`.
    pub fn modal_id(self) -> String {
        format!("modal-recipe-{}", self.as_str())
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
        }
    }

    #[test]
    fn unknown_codes_rejected() {
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code("EN"), None);
        assert_eq!(Lang::from_code(""), None);
        assert_eq!(Lang::from_code(" es"), None);
    }

    #[test]
    fn spanish_is_primary() {
        assert_eq!(Lang::default(), Lang::Es);
        assert_eq!(Lang::all()[0], Lang::Es);
    }

    #[test]
    fn locale_tags() {
        assert_eq!(Lang::Es.locale_tag(), "es-MX");
        assert_eq!(Lang::En.locale_tag(), "en");
    }

    #[test]
    fn recipe_modal_ids() {
        assert_eq!(RecipeId::Ceviche.modal_id(), "modal-recipe-ceviche");
        assert_eq!(RecipeId::all().len(), 6);
    }
}
