// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report output

pub mod formatter;

use crate::switcher::SwitchReport;
use anyhow::Result;

pub use formatter::ReportFormatter;

/// Print a switch summary to the console
pub fn print_switch_report(report: &SwitchReport, verbose: bool) {
    ReportFormatter::new(verbose).print_switch(report);
}

/// Pretty JSON for `--json` output
pub fn switch_report_json(report: &SwitchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
