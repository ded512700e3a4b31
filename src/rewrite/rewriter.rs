use crate::config::RewriteConfig;
use crate::error::Result;
use crate::rewrite::replacer::MarkerReplacer;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Ergebnis eines Durchlaufs
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    /// Dateien mit passender Endung, die gelesen und zurückgeschrieben wurden
    pub files_visited: usize,
    pub files_changed: usize,
    pub replacements: usize,
}

/// Schreibt einen Marker in allen passenden Dokumenten unterhalb von `root` um
pub struct FlagRewriter {
    root: PathBuf,
    extension: String,
    replacer: MarkerReplacer,
}

impl FlagRewriter {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>, replacer: MarkerReplacer) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
            replacer,
        }
    }

    pub fn from_config(config: RewriteConfig) -> Self {
        let replacer = MarkerReplacer::new(config.marker, config.replacement);
        Self::new(config.root, config.extension, replacer)
    }

    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(self.extension.as_str()))
            .unwrap_or(false)
    }

    /// Läuft rekursiv über den Baum. Jeder IO-Fehler bricht den Lauf ab.
    pub fn run(&self) -> Result<RewriteReport> {
        info!(
            "Rewriting '{}' -> '{}' in *{} under {}",
            self.replacer.marker(),
            self.replacer.replacement(),
            self.extension,
            self.root.display()
        );

        let mut report = RewriteReport::default();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            // path().is_file() folgt Symlinks auf Dateien, Verzeichnis-Links werden nicht betreten
            if !entry.path().is_file() || !self.matches(entry.path()) {
                continue;
            }

            let count = rewrite_file(entry.path(), &self.replacer)?;
            report.files_visited += 1;
            if count > 0 {
                report.files_changed += 1;
                report.replacements += count;
            }
        }

        info!(
            "Visited {} files, changed {}, {} replacements",
            report.files_visited, report.files_changed, report.replacements
        );
        Ok(report)
    }
}

/// Liest ein Dokument, ersetzt den Marker und schreibt es an dieselbe Stelle zurück.
///
/// Die Datei wird auch ohne Treffer neu geschrieben (gleicher Inhalt).
pub fn rewrite_file(path: &Path, replacer: &MarkerReplacer) -> Result<usize> {
    let content = fs::read_to_string(path)?;
    let (rewritten, count) = replacer.replace_all(&content);

    // fs::write kürzt die Datei, alte Restbytes verschwinden
    fs::write(path, rewritten)?;
    debug!("{}: {} replacements", path.display(), count);

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rewriter(root: &Path) -> FlagRewriter {
        FlagRewriter::new(
            root,
            ".md",
            MarkerReplacer::new("showInProjects: false", "showInProjects: true"),
        )
    }

    #[test]
    fn test_rewrites_nested_markdown_only() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("2023").join("aws");
        fs::create_dir_all(&nested).unwrap();

        let doc = nested.join("index.md");
        let other = temp.path().join("notes.txt");
        fs::write(&doc, "---\ntitle: 'AWS'\nshowInProjects: false\n---\n").unwrap();
        fs::write(&other, "showInProjects: false").unwrap();

        let report = rewriter(temp.path()).run().unwrap();

        assert_eq!(report.files_visited, 1);
        assert_eq!(report.files_changed, 1);
        assert_eq!(report.replacements, 1);
        assert_eq!(
            fs::read_to_string(&doc).unwrap(),
            "---\ntitle: 'AWS'\nshowInProjects: true\n---\n"
        );
        assert_eq!(fs::read_to_string(&other).unwrap(), "showInProjects: false");
    }

    #[test]
    fn test_shorter_replacement_truncates_file() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("a.md");
        fs::write(&doc, "flag: enabled-and-more").unwrap();

        let replacer = MarkerReplacer::new("enabled-and-more", "on");
        let count = rewrite_file(&doc, &replacer).unwrap();

        assert_eq!(count, 1);
        assert_eq!(fs::read_to_string(&doc).unwrap(), "flag: on");
    }

    #[test]
    fn test_occurrence_counts_shift() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("b.md");
        let original = "showInProjects: true\nx showInProjects: false y\nshowInProjects: false";
        fs::write(&doc, original).unwrap();

        rewriter(temp.path()).run().unwrap();
        let after = fs::read_to_string(&doc).unwrap();

        assert_eq!(after.matches("showInProjects: false").count(), 0);
        assert_eq!(after.matches("showInProjects: true").count(), 3);
        assert_eq!(after.len(), original.len() - 2);
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("c.md");
        fs::write(&doc, "showInProjects: false\n").unwrap();

        let rw = rewriter(temp.path());
        rw.run().unwrap();
        let first = fs::read_to_string(&doc).unwrap();
        let report = rw.run().unwrap();

        assert_eq!(report.files_visited, 1);
        assert_eq!(report.files_changed, 0);
        assert_eq!(fs::read_to_string(&doc).unwrap(), first);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_document_is_rewritten() {
        let temp = TempDir::new().unwrap();
        let real_dir = temp.path().join("real");
        let content_dir = temp.path().join("content");
        fs::create_dir_all(&real_dir).unwrap();
        fs::create_dir_all(&content_dir).unwrap();

        let target = real_dir.join("doc.txt");
        fs::write(&target, "showInProjects: false").unwrap();
        std::os::unix::fs::symlink(&target, content_dir.join("link.md")).unwrap();

        let report = rewriter(&content_dir).run().unwrap();

        assert_eq!(report.files_changed, 1);
        assert_eq!(fs::read_to_string(&target).unwrap(), "showInProjects: true");
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bad.md"), [0xff, 0xfe, 0x00]).unwrap();

        assert!(rewriter(temp.path()).run().is_err());
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let result = rewriter(&temp.path().join("nope")).run();
        assert!(matches!(result, Err(crate::error::FolioError::Walk(_))));
    }
}
