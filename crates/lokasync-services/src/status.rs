use crate::detect;
use crate::fingerprints::FingerprintStore;
use crate::paths::ProjectLayout;
use crate::reconcile;
use lokasync_core::Result;
use lokasync_domain::{StatusReport, SCHEMA_VERSION};
use std::collections::HashSet;

/// Read-only preview of what [`crate::sync`] would do: which languages are
/// missing or stale and which entry names drifted since the last run.
/// Touches nothing on disk.
pub fn status(
    project_root: &std::path::Path,
    requested: &[String],
    resource_root: Option<&str>,
) -> Result<StatusReport> {
    let layout = ProjectLayout::new(project_root, resource_root);
    let source_path = layout.source_doc();

    let mut report = StatusReport {
        schema_version: SCHEMA_VERSION,
        source_modified: false,
        changed_keys: Vec::new(),
        missing_languages: Vec::new(),
        stale_languages: Vec::new(),
    };

    let Some(entries) = lokasync_parsers_xml::load_source_doc(&source_path)? else {
        return Ok(report);
    };

    let store = FingerprintStore::load(&layout.hash_dir());
    report.source_modified = store.is_document_modified(&source_path)?;

    let mut changed: Vec<String> = detect::classify(&entries, &store)
        .changed
        .into_iter()
        .map(|e| e.name)
        .collect();
    changed.sort();
    report.changed_keys = changed;

    let mut seen = HashSet::new();
    let requested: Vec<String> = requested
        .iter()
        .filter(|lang| seen.insert(lang.as_str()))
        .cloned()
        .collect();
    let plan = reconcile::plan_languages(&layout, &requested);
    report.missing_languages = plan.missing;
    report.stale_languages = plan.stale;

    Ok(report)
}
