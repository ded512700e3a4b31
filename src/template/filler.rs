use log::warn;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Front-Matter-Vorlage für ein Zertifikat, gefolgt von einem leeren Body
pub const CERTIFICATE_TEMPLATE: &str = "---
date: '{{DATE}}'
title: '{{TITLE}}'
github: ''
external: '{{EXTERNAL}}'
tech:
  - {{TECH}}
company: '{{COMPANY}}'
showInProjects: false
---


";

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{([A-Z_]+)\}\}").expect("placeholder pattern is valid"))
}

/// Escaped einen Wert für einen YAML-String in einfachen Anführungszeichen
fn escape_yaml(text: &str) -> String {
    text.replace('\'', "''")
}

/// Füllt alle `{{KEY}}`-Platzhalter in einem Durchgang.
///
/// Eingesetzte Werte werden nicht erneut durchsucht. Unbekannte
/// Platzhalter bleiben stehen. Nur Platzhalter direkt hinter `'` stehen in
/// einem gequoteten YAML-String und werden escaped.
pub fn fill(template: &str, replacements: &HashMap<String, String>) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            match replacements.get(key) {
                Some(value) => {
                    let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
                    if template[..start].ends_with('\'') {
                        escape_yaml(value)
                    } else {
                        value.clone()
                    }
                }
                None => {
                    warn!("✗ No value for placeholder '{{{{{}}}}}'", key);
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}
