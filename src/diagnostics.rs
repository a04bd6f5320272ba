// SPDX-License-Identifier: PMPL-1.0-or-later

//! `check` command: configuration, catalog, preference store and page
//! coverage diagnostics.

use crate::config::SiteConfig;
use crate::dom::Page;
use crate::i18n::completeness::key_pattern;
use crate::i18n::{check_catalog, KeyPath, Resolved, TranslationCatalog};
use crate::report::ReportFormatter;
use crate::storage::{FileStore, PreferenceStore, LANGUAGE_KEY};
use crate::types::{Lang, RecipeId};
use anyhow::{anyhow, Result};
use colored::*;

pub fn run_self_diagnostics(config: &SiteConfig, page: Option<&Page>) -> Result<()> {
    println!("citrimex-i18n self-diagnostics");

    let catalog = config.catalog()?;
    let checks = collect(config, &catalog, &config.store(), page);

    println!();
    for entry in &checks {
        entry.print();
    }
    println!();
    ReportFormatter::new(false).print_completeness(&check_catalog(&catalog));

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

/// Run every check without printing.
pub fn collect(
    config: &SiteConfig,
    catalog: &TranslationCatalog,
    store: &FileStore,
    page: Option<&Page>,
) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("citrimex-i18n {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(Diagnostic::ok(
        "catalog",
        format!(
            "{} (languages: {}, primary: {})",
            match &config.catalog_dir {
                Some(dir) => dir.display().to_string(),
                None => "embedded".to_string(),
            },
            catalog
                .languages()
                .map(|lang| lang.code())
                .collect::<Vec<_>>()
                .join(", "),
            catalog.primary()
        ),
    ));
    checks.push(check_completeness(catalog));
    checks.push(check_store(store, catalog));

    if let Some(page) = page {
        checks.push(check_key_syntax(page));
        checks.push(check_key_coverage(page, catalog));
        checks.push(check_modals(page));
        checks.push(check_controls(page, catalog));
    }

    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:18} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

fn check_completeness(catalog: &TranslationCatalog) -> Diagnostic {
    let report = check_catalog(catalog);
    if report.is_complete() {
        Diagnostic::ok(
            "completeness",
            format!("{} key paths in every language", report.total_paths),
        )
    } else {
        Diagnostic::warning(
            "completeness",
            format!(
                "{} missing, {} shape, {} length, {} unreachable (affected elements keep their text)",
                report.missing.len(),
                report.shape_mismatches.len(),
                report.length_mismatches.len(),
                report.unaddressable.len()
            ),
        )
    }
}

fn check_store(store: &FileStore, catalog: &TranslationCatalog) -> Diagnostic {
    let path = store.path().display();
    match store.load(LANGUAGE_KEY) {
        Ok(None) => Diagnostic::ok(
            "preferences",
            format!("{} has no language yet ({} on load)", path, catalog.primary()),
        ),
        Ok(Some(code)) => match Lang::from_code(&code).filter(|lang| catalog.contains(*lang)) {
            Some(lang) => {
                let saved = match store.updated_at() {
                    Ok(Some(at)) => format!(", saved {}", at),
                    _ => String::new(),
                };
                Diagnostic::ok("preferences", format!("{} stores '{}'{}", path, lang, saved))
            }
            None => Diagnostic::warning(
                "preferences",
                format!(
                    "{} stores unsupported '{}' ({} used instead)",
                    path,
                    code,
                    catalog.primary()
                ),
            ),
        },
        Err(err) => Diagnostic::error("preferences", format!("{:#}", err)),
    }
}

fn check_key_syntax(page: &Page) -> Diagnostic {
    let pattern = key_pattern();
    let malformed: Vec<&str> = page
        .elements
        .iter()
        .filter_map(|element| element.i18n.as_deref())
        .filter(|key| !pattern.is_match(key))
        .collect();
    if malformed.is_empty() {
        Diagnostic::ok("key syntax", "all data-i18n keys are well formed".to_string())
    } else {
        Diagnostic::error(
            "key syntax",
            format!("malformed keys: {}", quoted(&malformed)),
        )
    }
}

fn check_key_coverage(page: &Page, catalog: &TranslationCatalog) -> Diagnostic {
    let keys: Vec<&str> = page
        .elements
        .iter()
        .filter_map(|element| element.i18n.as_deref())
        .collect();

    let mut gaps = Vec::new();
    for lang in catalog.languages() {
        let unresolved: Vec<&str> = keys
            .iter()
            .copied()
            .filter(|key| {
                !matches!(
                    catalog.resolve(lang, &KeyPath::from(*key)),
                    Some(Resolved::Text(text)) if !text.is_empty()
                )
            })
            .collect();
        if !unresolved.is_empty() {
            gaps.push(format!("{}: {}", lang, quoted(&unresolved)));
        }
    }

    if gaps.is_empty() {
        Diagnostic::ok(
            "key coverage",
            format!("{} bound elements resolve in every language", keys.len()),
        )
    } else {
        Diagnostic::warning("key coverage", gaps.join("; "))
    }
}

fn check_modals(page: &Page) -> Diagnostic {
    let missing: Vec<&str> = RecipeId::all()
        .iter()
        .filter(|recipe| page.modal(&recipe.modal_id()).is_none())
        .map(|recipe| recipe.as_str())
        .collect();
    if missing.is_empty() {
        Diagnostic::ok("recipe modals", "every recipe has a modal".to_string())
    } else {
        Diagnostic::warning(
            "recipe modals",
            format!("no modal for: {}", missing.join(", ")),
        )
    }
}

fn check_controls(page: &Page, catalog: &TranslationCatalog) -> Diagnostic {
    if page.controls.is_empty() {
        return Diagnostic::warning("language buttons", "page has none".to_string());
    }
    let unknown: Vec<&str> = page
        .controls
        .iter()
        .map(|control| control.lang.as_str())
        .filter(|code| {
            Lang::from_code(code)
                .map(|lang| !catalog.contains(lang))
                .unwrap_or(true)
        })
        .collect();
    if unknown.is_empty() {
        Diagnostic::ok(
            "language buttons",
            format!("{} buttons", page.controls.len()),
        )
    } else {
        Diagnostic::warning(
            "language buttons",
            format!("buttons select unsupported codes: {}", quoted(&unknown)),
        )
    }
}

fn quoted(values: &[&str]) -> String {
    values
        .iter()
        .map(|value| format!("'{}'", value))
        .collect::<Vec<_>>()
        .join(", ")
}
