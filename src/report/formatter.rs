// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal formatting for switch and completeness reports

use crate::binder::SkipReason;
use crate::i18n::CompletenessReport;
use crate::recipes::ModalSkipReason;
use crate::switcher::SwitchReport;
use colored::*;

pub struct ReportFormatter {
    verbose: bool,
}

impl ReportFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_switch(&self, report: &SwitchReport) {
        println!(
            "\n{} {} ({})",
            "LANGUAGE".bold().cyan(),
            report.language.native_name().bold(),
            report.locale
        );

        let persisted = if report.persisted {
            "saved".green()
        } else {
            "not saved".red()
        };
        println!("  Preference: {}", persisted);
        if let Some(err) = &report.persist_error {
            println!("    {}", err);
        }
        println!("  Active controls: {}", report.active_controls);

        println!(
            "  Text elements: {} bound, {} kept",
            report.text.bound,
            report.text.skipped.len()
        );
        if self.verbose {
            for skip in &report.text.skipped {
                let reason = match skip.reason {
                    SkipReason::NotFound => "not found",
                    SkipReason::ListValue => "list value",
                    SkipReason::EmptyValue => "empty value",
                };
                println!("    {} {} ({})", "-".yellow(), skip.key, reason);
            }
        }

        let synced: Vec<&str> = report.modals.synced.iter().map(|r| r.as_str()).collect();
        println!(
            "  Recipe modals: {}",
            if synced.is_empty() {
                "none".dimmed().to_string()
            } else {
                synced.join(", ")
            }
        );
        for skip in &report.modals.skipped {
            if skip.reason == ModalSkipReason::NoModal && !self.verbose {
                continue;
            }
            let reason = match skip.reason {
                ModalSkipReason::NoModal => "no modal on page",
                ModalSkipReason::NoEntry => "incomplete catalog entry",
                ModalSkipReason::NoLabels => "missing section labels",
            };
            println!("    {} {} ({})", "-".yellow(), skip.recipe, reason);
        }
    }

    pub fn print_completeness(&self, report: &CompletenessReport) {
        println!("{}", "CATALOG COMPLETENESS".bold().yellow());
        println!(
            "  Languages: {}",
            report
                .languages
                .iter()
                .map(|lang| lang.code())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("  Key paths: {}", report.total_paths);

        if report.is_complete() {
            println!("  {}", "every language defines every key".green());
            return;
        }

        for missing in &report.missing {
            println!(
                "  {} {} missing in {}",
                "MISSING".red(),
                missing.path,
                missing.lang
            );
        }
        for mismatch in &report.shape_mismatches {
            let kinds: Vec<String> = mismatch
                .kinds
                .iter()
                .map(|(lang, kind)| format!("{}={}", lang, kind))
                .collect();
            println!(
                "  {} {} ({})",
                "SHAPE".red(),
                mismatch.path,
                kinds.join(", ")
            );
        }
        for mismatch in &report.length_mismatches {
            let lengths: Vec<String> = mismatch
                .lengths
                .iter()
                .map(|(lang, len)| format!("{}={}", lang, len))
                .collect();
            println!(
                "  {} {} ({})",
                "LENGTH".yellow(),
                mismatch.path,
                lengths.join(", ")
            );
        }
        for path in &report.unaddressable {
            println!("  {} {}", "UNREACHABLE".yellow(), path);
        }
    }
}
