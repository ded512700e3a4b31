use crate::config::IndexerConfig;
use crate::error::{FolioError, ParseError, Result};
use crate::index::document::GeneratedDocument;
use crate::index::source::SourceFile;
use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedDocument {
    pub source: String,
    pub target: PathBuf,
}

/// Zusammenfassung eines Indexer-Laufs
#[derive(Debug, Default)]
pub struct IndexReport {
    pub created: Vec<CreatedDocument>,
    pub skipped: Vec<ParseError>,
}

pub struct Indexer {
    config: IndexerConfig,
}

impl Indexer {
    pub fn new(config: IndexerConfig) -> Self {
        Self { config }
    }

    /// Passende Dateien im Quellverzeichnis, nicht rekursiv und sortiert.
    /// Versteckte Dateien werden wie bei einem Shell-Glob ignoriert.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let dir = &self.config.source_dir;
        if !dir.is_dir() {
            return Err(FolioError::SourceDirNotFound(dir.display().to_string()));
        }

        let ext = self.config.dotted_extension();
        let mut files = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // Symlinks auf Dateien zählen mit
            if !entry.path().is_file() {
                continue;
            }

            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') || !name.ends_with(ext.as_str()) {
                continue;
            }

            files.push(entry.path());
        }

        files.sort();
        debug!("Found {} *{} files in {}", files.len(), ext, dir.display());
        Ok(files)
    }

    /// Erzeugt ein Dokument pro gültiger Datei.
    ///
    /// Ungültige Dateinamen werden protokolliert und übersprungen, alle
    /// anderen Fehler brechen ab.
    pub fn run(&self) -> Result<IndexReport> {
        let files = self.scan()?;
        fs::create_dir_all(&self.config.output_dir)?;

        let mut report = IndexReport::default();

        for path in files {
            let source = match SourceFile::from_path(&self.config.source_dir, &path) {
                Ok(source) => source,
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    report.skipped.push(e);
                    continue;
                }
            };

            let doc = GeneratedDocument::new(&source, &self.config);
            doc.write()?;
            debug!("Created: {}", doc.file_name());

            report.created.push(CreatedDocument {
                source: source.file_name,
                target: doc.target,
            });
        }

        Ok(report)
    }
}
