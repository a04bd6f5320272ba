// SPDX-License-Identifier: PMPL-1.0-or-later

//! citrimex-i18n: apply the Citrimex site translations to page snapshots
//!
//! Restores the visitor's language from the preference store, switches it on
//! request, and writes the translated text and recipe modals back into the
//! page.

use anyhow::{anyhow, Result};
use citrimex_i18n::config::SiteConfig;
use citrimex_i18n::dom::Page;
use citrimex_i18n::i18n::{KeyPath, Resolved};
use citrimex_i18n::switcher::StateOrigin;
use citrimex_i18n::{diagnostics, report, Lang, LanguageSwitcher};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "citrimex-i18n")]
#[command(version)]
#[command(about = "Spanish/English text binding for the Citrimex site")]
#[command(long_about = None)]
struct Cli {
    /// Site configuration (YAML)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a page snapshot into the current or requested language
    Apply {
        /// Page snapshot (JSON)
        #[arg(short, long, value_name = "FILE")]
        page: PathBuf,

        /// Switch to this language and remember it
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        /// Write the translated page here and print a summary (default: page
        /// JSON on stdout, input left untouched)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the switch report as JSON
        #[arg(long, requires = "output")]
        json: bool,

        /// List every element and modal that was left unchanged
        #[arg(short, long, requires = "output")]
        verbose: bool,
    },

    /// Look up one dotted key
    Resolve {
        #[arg(value_name = "KEY")]
        key: String,

        /// Language to resolve in (default: current)
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,
    },

    /// Check configuration, catalog completeness and page coverage
    Check {
        /// Page snapshot to check against the catalog
        #[arg(short, long, value_name = "FILE")]
        page: Option<PathBuf>,
    },

    /// List catalog languages
    Languages,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    Es,
    En,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Es => Lang::Es,
            LangArg::En => Lang::En,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };

    match cli.command {
        Commands::Apply {
            page,
            lang,
            output,
            json,
            verbose,
        } => {
            let mut switcher = LanguageSwitcher::new(config.catalog()?, config.store());
            warn_on_origin(switcher.state().origin());

            let mut document = Page::load(&page)?;
            let report = match lang {
                Some(lang) => {
                    let lang = Lang::from(lang);
                    switcher
                        .set_language(lang, &mut document)
                        .ok_or_else(|| anyhow!("catalog has no '{}' translations", lang))?
                }
                None => switcher.initialize(&mut document),
            };

            let Some(target) = output else {
                println!("{}", document.to_json()?);
                return Ok(());
            };
            document.save(&target)?;

            if json {
                println!("{}", report::switch_report_json(&report)?);
            } else {
                report::print_switch_report(&report, verbose);
                println!("\nPage written to: {}", target.display());
            }
        }

        Commands::Resolve { key, lang } => {
            let switcher = LanguageSwitcher::new(config.catalog()?, config.store());
            let lang = lang.map(Lang::from).unwrap_or_else(|| switcher.current());

            match switcher.catalog().resolve(lang, &KeyPath::from(key.as_str())) {
                Some(Resolved::Text(text)) => println!("{}", text),
                Some(Resolved::List(items)) => {
                    for (i, item) in items.iter().enumerate() {
                        println!("{}. {}", i + 1, item);
                    }
                }
                None => return Err(anyhow!("key '{}' not found in {}", key, lang)),
            }
        }

        Commands::Check { page } => {
            let page = page.map(|path| Page::load(&path)).transpose()?;
            diagnostics::run_self_diagnostics(&config, page.as_ref())?;
        }

        Commands::Languages => {
            let switcher = LanguageSwitcher::new(config.catalog()?, config.store());
            for lang in switcher.catalog().languages() {
                let marker = if lang == switcher.current() {
                    "*".green().bold()
                } else {
                    " ".normal()
                };
                let primary = if lang == switcher.catalog().primary() {
                    " (primary)"
                } else {
                    ""
                };
                println!(
                    "{} {}  {:8} {}{}",
                    marker,
                    lang.code(),
                    lang.locale_tag(),
                    lang.native_name(),
                    primary
                );
            }
        }
    }

    Ok(())
}

fn warn_on_origin(origin: &StateOrigin) {
    match origin {
        StateOrigin::Rejected(code) => {
            eprintln!("warning: ignoring stored language '{}'", code);
        }
        StateOrigin::Unreadable(err) => {
            eprintln!("warning: preference store unreadable: {}", err);
        }
        StateOrigin::Stored | StateOrigin::Default => {}
    }
}
