use log::debug;

/// Ersetzt einen festen Marker-Text wörtlich durch einen anderen
pub struct MarkerReplacer {
    marker: String,
    replacement: String,
}

impl MarkerReplacer {
    pub fn new(marker: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            replacement: replacement.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Ersetzt alle Vorkommen und liefert den neuen Text plus Anzahl der Treffer.
    /// Alles außerhalb der Treffer bleibt byte-genau erhalten.
    pub fn replace_all(&self, content: &str) -> (String, usize) {
        // Ein leerer Marker würde zwischen jedem Zeichen matchen
        if self.marker.is_empty() {
            return (content.to_string(), 0);
        }

        let count = content.matches(self.marker.as_str()).count();
        if count == 0 {
            return (content.to_string(), 0);
        }

        debug!("Replacing {} occurrences of '{}'", count, self.marker);
        (content.replace(&self.marker, &self.replacement), count)
    }
}
