use crate::error::ParseError;
use std::path::Path;

/// Eine Zertifikat-Datei der Form `<y>_<m>_<d>_<title>.<ext>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Dateiname ohne Verzeichnis, unverändert
    pub file_name: String,
    pub date: String,
    pub title: String,
}

impl SourceFile {
    /// Zerlegt einen nackten Dateinamen.
    ///
    /// Nur die ersten drei `_` trennen; weitere Unterstriche gehören zum Titel.
    pub fn parse(file_name: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = file_name.splitn(4, '_').collect();
        if parts.len() < 4 {
            return Err(ParseError::TooFewSegments {
                file: file_name.to_string(),
                found: parts.len(),
            });
        }

        let date = parts[..3].join("-");
        let title = Path::new(parts[3])
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            file_name: file_name.to_string(),
            date,
            title,
        })
    }

    /// Entfernt das Quellverzeichnis pfadgenau und zerlegt den Rest
    pub fn from_path(dir: &Path, path: &Path) -> Result<Self, ParseError> {
        let relative = path.strip_prefix(dir).unwrap_or(path);
        let name = relative
            .to_str()
            .ok_or_else(|| ParseError::NonUtf8Name(relative.to_string_lossy().into_owned()))?;
        Self::parse(name)
    }
}
