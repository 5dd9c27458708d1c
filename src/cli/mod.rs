//! Command-line interface for rostrum.
//!
//! Provides commands for running the analysis pipeline against the
//! configured archive, deriving views from an exported table, and
//! inspecting the resolved configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::analysis::{Pipeline, RuleSet};
use crate::config::Config;
use crate::report::export::{default_metrics, read_table, write_series_files, write_table};
use crate::report::{filter_by_min_year, metric_mean_by_party, series, Metric};
use crate::source::ArchiveClient;

/// rostrum - Lexical analysis pipeline for presidential annual messages
#[derive(Parser, Debug)]
#[command(name = "rostrum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the configured catalog and build the speech table
    Analyze {
        /// Write the table as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write chart-ready series files into this directory
        #[arg(long)]
        series_dir: Option<PathBuf>,

        /// Keep only records from this year onward
        #[arg(long)]
        min_year: Option<i32>,
    },

    /// Derive views from a previously exported table
    Report {
        /// Path to a table JSON produced by `analyze --output`
        table: PathBuf,

        /// Metric to report (words, characters, avg_word_length, laughter,
        /// applause, or a keyword label)
        #[arg(short, long, default_value = "words")]
        metric: String,

        /// Average the metric per party instead of listing it per year
        #[arg(long)]
        by_party: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the parsed command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Analyze {
                output,
                series_dir,
                min_year,
            } => analyze(output, series_dir, min_year).await,
            Commands::Report {
                table,
                metric,
                by_party,
            } => report(table, metric, by_party).await,
            Commands::Config => show_config(),
        }
    }
}

async fn analyze(
    output: Option<PathBuf>,
    series_dir: Option<PathBuf>,
    min_year: Option<i32>,
) -> Result<()> {
    let config = Config::load()?;

    let rules = RuleSet::compile(&config.rules)?;
    let pipeline = Pipeline::new(rules).with_excluded_ids(config.excluded_ids.clone());
    let client = ArchiveClient::new(config.archive_url.clone());

    let records = pipeline.run(&client, &config.catalog).await?;
    let records: Vec<_> = match min_year {
        Some(min) => filter_by_min_year(&records, min).into_iter().cloned().collect(),
        None => records,
    };

    println!("{} records", records.len());
    for record in &records {
        println!(
            "  {:<6} {:<28} {:>8} words  {:>4} applause  {:>4} laughter",
            record.year,
            record.speaker_name,
            record.number_of_words,
            record.applause_count,
            record.laughter_count,
        );
    }

    if let Some(path) = output {
        write_table(&path, &records).await?;
        println!("Table written to {}", path.display());
    }

    if let Some(dir) = series_dir {
        let files = write_series_files(&dir, &records, &default_metrics(&records)).await?;
        println!("{} series files written to {}", files.len(), dir.display());
    }

    Ok(())
}

async fn report(table: PathBuf, metric: String, by_party: bool) -> Result<()> {
    let config = Config::load()?;
    let records = read_table(&table).await?;
    let metric = Metric::parse(&metric);

    if by_party {
        let means = metric_mean_by_party(&records, &config.parties, &metric);
        if means.is_empty() {
            println!("No records matched the configured party table");
            return Ok(());
        }
        for (party, mean) in means {
            println!("{:<12} {:>10.2}", party.to_string(), mean);
        }
    } else {
        let yearly = series(&records, &metric);
        for point in yearly.points {
            println!("{:<6} {:>10.2}", point.year, point.value);
        }
    }

    Ok(())
}

fn show_config() -> Result<()> {
    let config = Config::load()?;

    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none, using defaults)"),
    }
    println!("Archive URL: {}", config.archive_url);
    println!("Catalog:     {}", config.catalog);

    println!("Excluded ids ({}):", config.excluded_ids.len());
    for id in &config.excluded_ids {
        println!("  {}", id);
    }

    println!("Rules ({}):", config.rules.len());
    for rule in &config.rules {
        println!("  {:<12} {:?} {}", rule.label, rule.kind, rule.pattern);
    }

    println!("Parties ({}):", config.parties.len());
    let mut parties: Vec<_> = config.parties.iter().collect();
    parties.sort_by_key(|(name, _)| name.as_str());
    for (name, party) in parties {
        println!("  {:<24} {}", name, party);
    }

    Ok(())
}
