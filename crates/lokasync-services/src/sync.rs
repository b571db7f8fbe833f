use crate::detect;
use crate::fingerprints::FingerprintStore;
use crate::merge;
use crate::paths::ProjectLayout;
use crate::reconcile;
use crate::translate::{translate_entries, TranslationProvider};
use lokasync_core::{ResEntry, Result};
use lokasync_domain::{LanguageStat, RunReport};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Resource root relative to the project dir; None uses "src/main/res".
    pub resource_root: Option<String>,
    /// Master switch (mirrors the build-config flag): false is a no-op run.
    pub activate: bool,
    /// Plan only: no deletions, no provider calls, no writes.
    pub dry_run: bool,
    /// Copy an existing language document aside before merging into it.
    pub backup: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            resource_root: None,
            activate: true,
            dry_run: false,
            backup: false,
        }
    }
}

/// Synchronize translated documents for `requested` languages against the
/// source document under `project_root`.
///
/// Pipeline: load source → remove stale languages → full translation for
/// missing languages → whole-document gate → per-entry diff → incremental
/// translation for present languages → merge → persist fingerprints. The
/// fingerprint snapshot is written only when every language write succeeded,
/// so a failed language is retried on the next run.
pub fn sync(
    project_root: &std::path::Path,
    requested: &[String],
    provider: &dyn TranslationProvider,
    opts: &SyncOptions,
) -> Result<RunReport> {
    let mut report = RunReport::new(if opts.dry_run { "dry-run" } else { "sync" });

    if !opts.activate {
        tracing::info!(event = "sync_deactivated");
        return Ok(report);
    }

    // A language listed twice behaves exactly like a language listed once:
    // one pass, one translation call per entry.
    let mut seen = HashSet::new();
    let requested: Vec<String> = requested
        .iter()
        .filter(|lang| seen.insert(lang.as_str()))
        .cloned()
        .collect();

    let layout = ProjectLayout::new(project_root, opts.resource_root.as_deref());
    let source_path = layout.source_doc();
    let Some(entries) = lokasync_parsers_xml::load_source_doc(&source_path)? else {
        tracing::info!(event = "no_source_doc", path = %source_path.display());
        return Ok(report);
    };

    let store = FingerprintStore::load(&layout.hash_dir());
    let plan = reconcile::plan_languages(&layout, &requested);

    // Stale documents go first, before any translation work can fail.
    if opts.dry_run {
        for lang in &plan.stale {
            report.languages.push(LanguageStat {
                lang: lang.clone(),
                status: "planned-remove".into(),
                keys: 0,
            });
        }
    } else {
        let (removed, errors) = reconcile::remove_stale_languages(&layout, &plan.stale);
        report.removed = removed;
        for lang in &plan.stale {
            let failed = errors.iter().any(|e| e.starts_with(&format!("{lang}:")));
            report.languages.push(LanguageStat {
                lang: lang.clone(),
                status: if failed { "failed" } else { "removed" }.into(),
                keys: 0,
            });
        }
        report.errors.extend(errors);
    }

    let doc_modified = store.is_document_modified(&source_path)?;
    let changed: Vec<ResEntry> = if doc_modified {
        detect::classify(&entries, &store).changed
    } else {
        Vec::new()
    };
    tracing::info!(
        event = "change_summary",
        source_modified = doc_modified,
        changed = changed.len(),
        missing_languages = plan.missing.len(),
        stale_languages = plan.stale.len()
    );

    let mut had_failure = false;
    for lang in &requested {
        let missing = plan.missing.contains(lang);
        // A fresh document cannot be partially merged against nothing, so a
        // missing language always receives the full entry set.
        let batch: &[ResEntry] = if missing {
            &entries
        } else if !changed.is_empty() {
            &changed
        } else {
            report.skipped += 1;
            report.languages.push(LanguageStat {
                lang: lang.clone(),
                status: "skipped".into(),
                keys: 0,
            });
            continue;
        };

        if opts.dry_run {
            report.languages.push(LanguageStat {
                lang: lang.clone(),
                status: "planned".into(),
                keys: batch.len(),
            });
            continue;
        }

        let (pairs, translated) =
            translate_entries(provider, batch, lang, &mut report.errors);
        report.keys_translated += translated;

        let doc_path = layout.language_doc(lang);
        if opts.backup && doc_path.exists() {
            let _ = std::fs::copy(&doc_path, doc_path.with_extension("xml.bak"));
        }
        match merge::merge_language_doc(&doc_path, &pairs) {
            Ok(stat) => {
                let status = if stat.existed { "updated" } else { "created" };
                if stat.existed {
                    report.updated += 1;
                } else {
                    report.created += 1;
                }
                report.languages.push(LanguageStat {
                    lang: lang.clone(),
                    status: status.into(),
                    keys: stat.keys,
                });
            }
            Err(err) => {
                tracing::warn!(event = "language_write_failed", lang = %lang, %err);
                had_failure = true;
                report.failed += 1;
                report.errors.push(format!("{lang}: {err}"));
                report.languages.push(LanguageStat {
                    lang: lang.clone(),
                    status: "failed".into(),
                    keys: 0,
                });
            }
        }
    }

    if opts.dry_run {
        return Ok(report);
    }
    if had_failure {
        // Withhold the snapshot so the next run re-translates what this one
        // failed to write.
        tracing::warn!(event = "fingerprints_withheld", failed = report.failed);
    } else {
        store.save(&entries, &source_path)?;
        tracing::debug!(event = "fingerprints_saved", entries = entries.len());
    }
    Ok(report)
}
