//! Reporting layer over the speech table.
//!
//! Everything here derives views from a finished table: year-range filters,
//! partisan splits, chart-ready series, JSON export. The president→party
//! table is injected (normally from configuration); the analysis core never
//! sees it.

pub mod export;
pub mod series;
pub mod views;

use serde::{Deserialize, Serialize};

// Re-export commonly used items
pub use series::{series, Metric, Series, SeriesPoint};
pub use views::{filter_by_min_year, keyword_means_by_party, metric_mean_by_party, split_by_party};

/// Political party, for the partisan comparison views.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    Democratic,
    Republican,
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Party::Democratic => write!(f, "democratic"),
            Party::Republican => write!(f, "republican"),
        }
    }
}

impl std::str::FromStr for Party {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "democratic" | "democrat" | "d" => Ok(Party::Democratic),
            "republican" | "r" => Ok(Party::Republican),
            _ => anyhow::bail!("Unknown party: {}", s),
        }
    }
}
