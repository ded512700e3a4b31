use std::collections::HashMap;

/// Felder des Front-Matter-Blocks eines erzeugten Dokuments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    /// `YYYY-MM-DD`, so wie es im Dateinamen steht
    pub date: String,

    pub title: String,

    /// Link auf die Original-PDF im Zertifikat-Repository
    pub external: String,

    pub tech: String,
    pub company: String,
}

impl FrontMatter {
    /// Gibt alle Platzhalter mit ihren Werten zurück
    pub fn to_replacements(&self) -> HashMap<String, String> {
        let mut replacements = HashMap::new();

        replacements.insert("DATE".to_string(), self.date.clone());
        replacements.insert("TITLE".to_string(), self.title.clone());
        replacements.insert("EXTERNAL".to_string(), self.external.clone());
        replacements.insert("TECH".to_string(), self.tech.clone());
        replacements.insert("COMPANY".to_string(), self.company.clone());

        replacements
    }
}
