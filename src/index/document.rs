use crate::config::{IndexerConfig, NamingStyle};
use crate::error::Result;
use crate::index::source::SourceFile;
use crate::template::{fill, FrontMatter, CERTIFICATE_TEMPLATE};
use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Basis-Dateiname für das erzeugte Dokument, noch ohne Kollisionsprüfung
pub fn base_filename(source: &SourceFile, config: &IndexerConfig) -> String {
    match config.naming {
        NamingStyle::Title => format!("{}.md", source.title),
        NamingStyle::Source => {
            let ext = config.dotted_extension();
            let stem = source
                .file_name
                .strip_suffix(ext.as_str())
                .unwrap_or(source.file_name.as_str());
            format!("{}.md", stem)
        }
    }
}

/// Freier Pfad im Ausgabeverzeichnis: `base`, sonst `<title> 2.md`, `<title> 3.md`, ...
pub fn unique_target(output_dir: &Path, base: &str, title: &str) -> PathBuf {
    let mut target = output_dir.join(base);
    let mut counter = 1;

    while target.exists() {
        counter += 1;
        target = output_dir.join(format!("{} {}.md", title, counter));
    }

    target
}

/// Ein geplantes Markdown-Dokument für eine Zertifikat-Datei
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub target: PathBuf,
    pub front_matter: FrontMatter,
}

impl GeneratedDocument {
    /// Bestimmt Ziel und Inhalt. Das Ausgabeverzeichnis wird nur gelesen.
    pub fn new(source: &SourceFile, config: &IndexerConfig) -> Self {
        let base = base_filename(source, config);
        let target = unique_target(&config.output_dir, &base, &source.title);

        let front_matter = FrontMatter {
            date: source.date.clone(),
            title: source.title.clone(),
            external: format!("{}{}", config.url_base, source.file_name),
            tech: config.tech_placeholder.clone(),
            company: config.company.clone(),
        };

        Self {
            target,
            front_matter,
        }
    }

    pub fn render(&self) -> String {
        fill(CERTIFICATE_TEMPLATE, &self.front_matter.to_replacements())
    }

    /// Schreibt das Dokument. Eine bereits vorhandene Datei wird nie überschrieben.
    pub fn write(&self) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.target)?;
        file.write_all(self.render().as_bytes())?;
        debug!("Wrote {}", self.target.display());
        Ok(())
    }

    pub fn file_name(&self) -> String {
        self.target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
