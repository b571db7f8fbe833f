use crate::util::write_atomic;
use lokasync_core::Result;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct MergeStat {
    /// Whether a document existed at the path before this merge.
    pub existed: bool,
    /// Number of entries written from the translated batch.
    pub keys: usize,
}

/// Write a translated batch into the per-language document.
///
/// No document (or an empty/unreadable one) means a fresh document holding
/// exactly the batch. Otherwise the existing document is parsed, and the
/// batch is upserted by name: known names are replaced in place, new names
/// appended in batch order. Entries present on disk but absent from the
/// batch are preserved untouched, and no name is ever emitted twice.
///
/// Upsert-by-name diverges from the reference tool, which appended only
/// absent names and left changed entries with their stale translation.
pub fn merge_language_doc(path: &Path, translated: &[(String, String)]) -> Result<MergeStat> {
    let existed = path.exists();
    let existing = lokasync_parsers_xml::load_language_doc(path)?;
    let merged = upsert(existing, translated);

    let bytes = lokasync_parsers_xml::render_strings_xml_bytes(&merged)?;
    write_atomic(path, &bytes)?;

    tracing::debug!(
        event = "language_doc_written",
        path = %path.display(),
        existed,
        total = merged.len(),
        batch = translated.len()
    );
    Ok(MergeStat {
        existed,
        keys: translated.len(),
    })
}

fn upsert(
    existing: Vec<(String, String)>,
    batch: &[(String, String)],
) -> Vec<(String, String)> {
    let mut out = existing;
    let mut index: HashMap<String, usize> = out
        .iter()
        .enumerate()
        .map(|(i, (name, _))| (name.clone(), i))
        .collect();
    for (name, value) in batch {
        match index.get(name) {
            Some(&i) => out[i].1 = value.clone(),
            None => {
                index.insert(name.clone(), out.len());
                out.push((name.clone(), value.clone()));
            }
        }
    }
    out
}
