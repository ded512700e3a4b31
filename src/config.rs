use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONTENT_ROOT: &str = "./content/certificates";
pub const DEFAULT_DOC_EXTENSION: &str = ".md";
pub const DEFAULT_MARKER: &str = "showInProjects: false";
pub const DEFAULT_REPLACEMENT: &str = "showInProjects: true";

pub const DEFAULT_SOURCE_DIR: &str = "certificates";
pub const DEFAULT_SOURCE_EXTENSION: &str = "pdf";
pub const DEFAULT_OUTPUT_DIR: &str = "markdown_files";
pub const DEFAULT_URL_BASE: &str = "https://github.com/ArmanGrewal007/Certificates/blob/master/";
pub const DEFAULT_COMPANY: &str = "Certificates";
pub const DEFAULT_TECH_PLACEHOLDER: &str = "xx";

/// Wie der Basis-Dateiname eines erzeugten Dokuments gebildet wird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NamingStyle {
    /// `<title>.md`
    #[default]
    Title,
    /// Original file name with the source extension swapped for `.md`
    Source,
}

/// Einstellungen für den Flag-Rewriter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    pub root: PathBuf,
    pub extension: String,
    pub marker: String,
    pub replacement: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_CONTENT_ROOT),
            extension: DEFAULT_DOC_EXTENSION.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }
}

/// Einstellungen für den Zertifikat-Indexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    pub source_dir: PathBuf,

    /// Dateiendung ohne Punkt, z.B. `pdf`
    pub extension: String,

    pub output_dir: PathBuf,
    pub url_base: String,
    pub company: String,
    pub tech_placeholder: String,
    pub naming: NamingStyle,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            url_base: DEFAULT_URL_BASE.to_string(),
            company: DEFAULT_COMPANY.to_string(),
            tech_placeholder: DEFAULT_TECH_PLACEHOLDER.to_string(),
            naming: NamingStyle::default(),
        }
    }
}

impl IndexerConfig {
    /// Lädt die Einstellungen aus einer JSON-Datei. Fehlende Felder
    /// bekommen ihren Standardwert.
    pub fn from_json_file(path: &str) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Endung mit führendem Punkt, unabhängig davon wie sie konfiguriert wurde
    pub fn dotted_extension(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }
}
