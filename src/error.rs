use thiserror::Error;

/// Fehler beim Zerlegen eines Zertifikat-Dateinamens.
///
/// Diese Fehler sind nicht fatal: der Indexer protokolliert sie und
/// überspringt die Datei.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{file}': expected 4 underscore-separated parts, found {found}")]
    TooFewSegments { file: String, found: usize },

    #[error("file name is not valid UTF-8: {0}")]
    NonUtf8Name(String),
}

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Source directory not found: {0}")]
    SourceDirNotFound(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
