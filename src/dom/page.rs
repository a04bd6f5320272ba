// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory page snapshot.
//!
//! A [`Page`] carries only what the translation engine touches: text
//! elements (with or without a `data-i18n` key), recipe modals with their
//! six content slots, language buttons and the root `lang` attribute. It is
//! stored as JSON so a rendered page can be inspected or diffed.

use super::{BoundElement, Document, LanguageControl, RecipeModal};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Root `lang` attribute.
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub elements: Vec<TextElement>,
    #[serde(default)]
    pub modals: Vec<ModalElement>,
    #[serde(default)]
    pub controls: Vec<LangButton>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Value of the `data-i18n` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n: Option<String>,
    pub text: String,
}

impl TextElement {
    pub fn bound(key: &str, text: &str) -> Self {
        Self {
            id: None,
            i18n: Some(key.to_string()),
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalElement {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub headings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<TipBlock>,
}

impl ModalElement {
    /// A modal with every slot present and empty.
    pub fn with_all_slots(id: &str) -> Self {
        Self {
            id: id.to_string(),
            difficulty: Some(String::new()),
            headings: vec![String::new(), String::new()],
            ingredients: Some(Vec::new()),
            steps: Some(Vec::new()),
            tip: Some(TipBlock::default()),
        }
    }
}

/// `<strong>{label}</strong> {text}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipBlock {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangButton {
    /// Value of the `data-lang` attribute.
    pub lang: String,
    #[serde(default)]
    pub active: bool,
}

impl Page {
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading page {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("parsing page {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing page")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?).with_context(|| format!("writing {}", path.display()))
    }

    /// First element bound to `key`.
    pub fn bound_text(&self, key: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|element| element.i18n.as_deref() == Some(key))
            .map(|element| element.text.as_str())
    }

    pub fn modal(&self, id: &str) -> Option<&ModalElement> {
        self.modals.iter().find(|modal| modal.id == id)
    }

    /// Language codes of the buttons currently marked active.
    pub fn active_controls(&self) -> Vec<&str> {
        self.controls
            .iter()
            .filter(|control| control.active)
            .map(|control| control.lang.as_str())
            .collect()
    }
}

impl Document for Page {
    fn bound_elements(&mut self) -> Vec<&mut dyn BoundElement> {
        self.elements
            .iter_mut()
            .filter(|element| element.i18n.is_some())
            .map(|element| element as &mut dyn BoundElement)
            .collect()
    }

    fn recipe_modal(&mut self, element_id: &str) -> Option<&mut dyn RecipeModal> {
        self.modals
            .iter_mut()
            .find(|modal| modal.id == element_id)
            .map(|modal| modal as &mut dyn RecipeModal)
    }

    fn language_controls(&mut self) -> Vec<&mut dyn LanguageControl> {
        self.controls
            .iter_mut()
            .map(|control| control as &mut dyn LanguageControl)
            .collect()
    }

    fn set_document_language(&mut self, locale_tag: &str) {
        self.lang = locale_tag.to_string();
    }
}

impl BoundElement for TextElement {
    fn i18n_key(&self) -> &str {
        self.i18n.as_deref().unwrap_or_default()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl RecipeModal for ModalElement {
    fn set_difficulty(&mut self, text: &str) {
        if let Some(slot) = self.difficulty.as_mut() {
            *slot = text.to_string();
        }
    }

    fn set_section_heading(&mut self, index: usize, text: &str) {
        if let Some(slot) = self.headings.get_mut(index) {
            *slot = text.to_string();
        }
    }

    fn replace_ingredients(&mut self, items: &[String]) {
        if let Some(slot) = self.ingredients.as_mut() {
            *slot = items.to_vec();
        }
    }

    fn replace_steps(&mut self, items: &[String]) {
        if let Some(slot) = self.steps.as_mut() {
            *slot = items.to_vec();
        }
    }

    fn set_tip(&mut self, label: &str, text: &str) {
        if let Some(tip) = self.tip.as_mut() {
            tip.label = label.to_string();
            tip.text = text.to_string();
        }
    }
}

impl LanguageControl for LangButton {
    fn lang_code(&self) -> &str {
        &self.lang
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
