use crate::fingerprints::{fingerprint, FingerprintStore};
use lokasync_core::ResEntry;

/// Entries split by the per-entry diff against the previous run.
#[derive(Debug, Clone)]
pub struct Classified {
    /// New names plus names whose value fingerprint drifted.
    pub changed: Vec<ResEntry>,
    pub unchanged: Vec<ResEntry>,
}

/// Compare current entries against stored fingerprints. An entry is changed
/// when its name is absent from the store (new) or its fingerprint differs
/// (modified). Order of the input is preserved in both halves.
pub fn classify(current: &[ResEntry], store: &FingerprintStore) -> Classified {
    let mut changed = Vec::new();
    let mut unchanged = Vec::new();
    for entry in current {
        match store.get(&entry.name) {
            Some(stored) if stored == fingerprint(&entry.value) => {
                unchanged.push(entry.clone());
            }
            _ => changed.push(entry.clone()),
        }
    }
    Classified { changed, unchanged }
}
