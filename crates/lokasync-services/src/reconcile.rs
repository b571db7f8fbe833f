use crate::paths::{ProjectLayout, STRINGS_XML};
use std::collections::BTreeSet;

/// Requested languages split against what already exists on disk.
#[derive(Debug, Clone)]
pub struct LanguagePlan {
    /// Requested codes with no translated document yet: full translation.
    pub missing: Vec<String>,
    /// Requested codes with an existing document: incremental update only.
    pub present: Vec<String>,
    /// Existing documents whose code is no longer requested: delete.
    pub stale: Vec<String>,
}

/// List language codes that currently have a `values-<code>/strings.xml`.
/// Directories without a strings file do not count as a language.
pub fn existing_languages(layout: &ProjectLayout) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    let Ok(read) = std::fs::read_dir(layout.res_dir()) else {
        return out;
    };
    for entry in read.flatten() {
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(code) = name.strip_prefix("values-") {
            if !code.is_empty() && entry.path().join(STRINGS_XML).exists() {
                out.insert(code.to_string());
            }
        }
    }
    out
}

pub fn plan_languages(layout: &ProjectLayout, requested: &[String]) -> LanguagePlan {
    let existing = existing_languages(layout);
    let requested_set: BTreeSet<&str> = requested.iter().map(|s| s.as_str()).collect();

    let mut missing = Vec::new();
    let mut present = Vec::new();
    for lang in requested {
        if existing.contains(lang) {
            present.push(lang.clone());
        } else {
            missing.push(lang.clone());
        }
    }
    let stale: Vec<String> = existing
        .into_iter()
        .filter(|code| !requested_set.contains(code.as_str()))
        .collect();

    LanguagePlan {
        missing,
        present,
        stale,
    }
}

/// Delete the strings document of each stale language. Only the file goes
/// away, never the `values-<code>` directory (it may hold other resources).
/// Failures are reported per language and do not abort the others.
pub fn remove_stale_languages(layout: &ProjectLayout, stale: &[String]) -> (usize, Vec<String>) {
    let mut removed = 0usize;
    let mut errors = Vec::new();
    for lang in stale {
        let doc = layout.language_doc(lang);
        match std::fs::remove_file(&doc) {
            Ok(()) => {
                tracing::info!(event = "stale_language_removed", lang = %lang, path = %doc.display());
                removed += 1;
            }
            Err(err) => {
                tracing::warn!(event = "stale_language_remove_failed", lang = %lang, %err);
                errors.push(format!("{lang}: {err}"));
            }
        }
    }
    (removed, errors)
}
