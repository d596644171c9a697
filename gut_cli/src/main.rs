//! # GUT Matrix CLI
//!
//! Terminal front end for the GUT priority matrix. Each run starts from the
//! seed catalog, applies the `--set` edits in order, recomputes once and
//! prints or exports the result.
//!
//! ```text
//! gut rank --set 12=5,5,5
//! gut chart --locale pt-BR
//! gut export -o ranking.csv --set 3:t=1
//! ```

mod edit;
mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gut_core::export::write_export;
use gut_core::settings::load_settings;
use gut_core::{GutSettings, Locale, Worksheet};

use crate::edit::ScoreEdit;
use crate::output::{print_json, render_chart, render_ranking, render_table, render_tier_summary};

#[derive(Parser)]
#[command(
    name = "gut",
    about = "Rank actions by Gravity x Urgency x Trend",
    version,
    propagate_version = true
)]
struct Cli {
    /// Settings file (JSON)
    #[arg(long, global = true, env = "GUT_CONFIG")]
    config: Option<PathBuf>,

    /// Header and tier language (en, pt-BR); overrides the settings file
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Score edit, repeatable: ID=G,U,T or ID:CRITERION=V (values are clamped to 1-5)
    #[arg(long = "set", global = true, value_name = "EDIT")]
    edits: Vec<ScoreEdit>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log progress to stderr
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the ranked table (default)
    Rank,

    /// Show the ranking as a horizontal bar chart
    Chart,

    /// Write the ranked table as CSV
    Export {
        /// Output path (default: the settings' export file name)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Write the CSV to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// List the actions in catalog order with their current scores
    Catalog,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn resolve_settings(cli: &Cli) -> anyhow::Result<GutSettings> {
    let mut settings = match &cli.config {
        Some(path) => load_settings(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => GutSettings::default(),
    };
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }
    Ok(settings)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = resolve_settings(&cli)?;

    let mut sheet = Worksheet::from_seed();
    for edit in &cli.edits {
        edit.apply(&mut sheet)?;
    }
    tracing::info!(edits = cli.edits.len(), locale = %settings.locale, "worksheet prepared");

    let snapshot = sheet.snapshot(&settings)?;

    match cli.command.unwrap_or(Commands::Rank) {
        Commands::Rank => {
            if cli.json {
                print_json(&snapshot.rows)?;
            } else {
                print!("{}", render_ranking(&snapshot.rows, settings.locale));
                println!();
                println!("{}", render_tier_summary(&snapshot.rows, settings.locale));
            }
        }
        Commands::Chart => {
            if cli.json {
                print_json(&snapshot.chart)?;
            } else {
                print!("{}", render_chart(&snapshot.chart));
            }
        }
        Commands::Export { output, stdout } => {
            if stdout {
                let csv = String::from_utf8(snapshot.export).context("export is not UTF-8")?;
                print!("{}", csv);
            } else {
                let path = output.unwrap_or_else(|| PathBuf::from(&settings.export_file_name));
                write_export(&path, &snapshot.export)?;
                if cli.json {
                    print_json(&serde_json::json!({
                        "path": path.display().to_string(),
                        "rows": snapshot.rows.len(),
                    }))?;
                } else {
                    println!("Exported {} actions to {}", snapshot.rows.len(), path.display());
                }
            }
        }
        Commands::Catalog => {
            if cli.json {
                print_json(&sheet.actions())?;
            } else {
                let rows: Vec<Vec<String>> = sheet
                    .actions()
                    .iter()
                    .map(|a| {
                        vec![
                            a.id().to_string(),
                            a.label().to_string(),
                            a.scores.gravity.to_string(),
                            a.scores.urgency.to_string(),
                            a.scores.trend.to_string(),
                            if sheet.is_action_modified(a.id()) { "*".to_string() } else { String::new() },
                        ]
                    })
                    .collect();
                print!("{}", render_table(&["id", "label", "G", "U", "T", ""], &rows));
            }
        }
    }

    Ok(())
}
