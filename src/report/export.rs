//! JSON export of the table and its derived series.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use tokio::fs;

use crate::domain::SpeechRecord;

use super::series::{series, Metric};

/// Write the full table as pretty JSON.
pub async fn write_table(path: &Path, records: &[SpeechRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let content = serde_json::to_string_pretty(records)?;
    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write table: {}", path.display()))?;

    Ok(())
}

/// Read a table previously written by `write_table`.
pub async fn read_table(path: &Path) -> Result<Vec<SpeechRecord>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read table: {}", path.display()))?;

    serde_json::from_str(&content).context("Failed to parse table JSON")
}

/// Write one series file per metric into `dir`, plus an index the chart
/// renderer can discover them through. Returns the written file names.
pub async fn write_series_files(
    dir: &Path,
    records: &[SpeechRecord],
    metrics: &[Metric],
) -> Result<Vec<String>> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create series directory: {}", dir.display()))?;

    let mut files = Vec::with_capacity(metrics.len());

    for metric in metrics {
        let file_name = format!("series.{}.json", metric.name());
        let content = serde_json::to_string_pretty(&series(records, metric))?;
        fs::write(dir.join(&file_name), content)
            .await
            .with_context(|| format!("Failed to write series file: {}", file_name))?;
        files.push(file_name);
    }

    let index = json!({
        "version": 1,
        "records": records.len(),
        "files": files,
    });
    fs::write(
        dir.join("series.index.json"),
        serde_json::to_string_pretty(&index)?,
    )
    .await
    .context("Failed to write series index")?;

    Ok(files)
}

/// The default export set: the fixed statistics plus every keyword label
/// found in the table.
pub fn default_metrics(records: &[SpeechRecord]) -> Vec<Metric> {
    let mut metrics = vec![
        Metric::Words,
        Metric::AverageWordLength,
        Metric::Laughter,
        Metric::Applause,
    ];

    let mut labels: Vec<String> = Vec::new();
    for record in records {
        for label in record.keyword_counts.keys() {
            if !labels.contains(label) {
                labels.push(label.clone());
            }
        }
    }
    metrics.extend(labels.into_iter().map(Metric::Keyword));

    metrics
}
