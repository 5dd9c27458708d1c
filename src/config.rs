//! Configuration for rostrum analysis runs.
//!
//! Configuration sources (highest priority first):
//! 1. ROSTRUM_CONFIG environment variable (explicit path to a config file)
//! 2. Config file (.rostrum/config.yaml, searched upward from the cwd,
//!    then ~/.rostrum/config.yaml)
//! 3. Built-in defaults
//!
//! The keyword rule set, the excluded catalog identifiers, and the
//! president→party table all live here so none of them end up hardcoded in
//! the analysis core.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::analysis::KeywordRule;
use crate::report::Party;
use crate::source::DocumentId;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub source: SourceSection,
    /// Replaces the default rule set entirely when present
    #[serde(default)]
    pub rules: Option<Vec<KeywordRule>>,
    /// Replaces the default party table entirely when present
    #[serde(default)]
    pub parties: Option<HashMap<String, Party>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceSection {
    /// Base URL of the archive API
    pub archive_url: Option<String>,
    /// Catalog reference to analyze
    pub catalog: Option<String>,
    /// Known-defective catalog entries to drop before fetching
    #[serde(default)]
    pub excluded_ids: Vec<String>,
}

/// Resolved configuration used by the pipeline and the reporting layer
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the archive API
    pub archive_url: String,
    /// Catalog reference to analyze
    pub catalog: String,
    /// Catalog entries excluded from every run
    pub excluded_ids: Vec<DocumentId>,
    /// Keyword rules, in registry order
    pub rules: Vec<KeywordRule>,
    /// President name → party reference table
    pub parties: HashMap<String, Party>,
    /// Path to the config file (if one was found)
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archive_url: default_archive_url(),
            catalog: default_catalog(),
            excluded_ids: Vec::new(),
            rules: default_rules(),
            parties: default_parties(),
            config_file: None,
        }
    }
}

fn default_archive_url() -> String {
    "https://www.presidency.ucsb.edu".to_string()
}

fn default_catalog() -> String {
    "annual-messages".to_string()
}

/// The stock keyword rules. Token patterns are anchored alternations so a
/// match means the whole word qualifies; the phrase rule runs over sentences.
fn default_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::token("economy", r"^[Ee]conom(y|ic|ics|ies)$"),
        KeywordRule::token("war", r"^[Ww]ars?$"),
        KeywordRule::token("freedom", r"^[Ff]reedoms?$"),
        KeywordRule::token("god", r"^God$"),
        KeywordRule::phrase("god_bless", r"God [Bb]less"),
    ]
}

/// Party reference data for the speakers the partisan views cover by
/// default. Names match the archive's title bylines.
fn default_parties() -> HashMap<String, Party> {
    [
        ("William J. Clinton", Party::Democratic),
        ("George W. Bush", Party::Republican),
        ("Barack Obama", Party::Democratic),
        ("Donald J. Trump", Party::Republican),
        ("Joseph R. Biden", Party::Democratic),
    ]
    .into_iter()
    .map(|(name, party)| (name.to_string(), party))
    .collect()
}

/// Find a config file by searching the current directory and parents, then
/// the home directory.
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".rostrum").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let home_config = dirs::home_dir()?.join(".rostrum").join("config.yaml");
    if home_config.exists() {
        return Some(home_config);
    }

    None
}

/// Load and parse a config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

impl Config {
    /// Load configuration from all sources
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("ROSTRUM_CONFIG") {
            return Self::from_file(Path::new(&path));
        }

        match find_config_file() {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = load_config_file(path)?;
        Ok(Self::resolve(file, Some(path.to_path_buf())))
    }

    /// Merge a parsed file over the defaults
    fn resolve(file: ConfigFile, config_file: Option<PathBuf>) -> Self {
        let defaults = Self::default();

        Self {
            archive_url: file.source.archive_url.unwrap_or(defaults.archive_url),
            catalog: file.source.catalog.unwrap_or(defaults.catalog),
            excluded_ids: file
                .source
                .excluded_ids
                .into_iter()
                .map(DocumentId::new)
                .collect(),
            rules: file.rules.unwrap_or(defaults.rules),
            parties: file.parties.unwrap_or(defaults.parties),
            config_file,
        }
    }
}
