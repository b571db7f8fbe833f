use lokasync_core::{ResEntry, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const NODES_HASH_FILE: &str = "nodes.hash";
const DOC_HASH_FILE: &str = "strings.hash";

pub type Fingerprint = u64;

/// Deterministic digest of one entry value. Pure function of content:
/// identical values always map to the same fingerprint, across runs and
/// processes. Collisions read as "unchanged" (best effort, kept as-is).
pub fn fingerprint(value: &str) -> Fingerprint {
    let hash = blake3::hash(value.as_bytes());
    let b = hash.as_bytes();
    u64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
}

/// Hex digest over the raw document bytes, the cheap "anything changed at
/// all" gate persisted separately from per-entry fingerprints.
pub fn document_hash(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}

/// Per-entry fingerprints plus the whole-document hash from the previous
/// successful run. Loaded once at run start, rewritten as a full snapshot at
/// run end; an absent or malformed store means every entry is "new".
#[derive(Debug)]
pub struct FingerprintStore {
    hash_dir: PathBuf,
    entries: HashMap<String, Fingerprint>,
    doc_hash: Option<String>,
}

impl FingerprintStore {
    pub fn load(hash_dir: &Path) -> Self {
        let entries = match std::fs::read_to_string(hash_dir.join(NODES_HASH_FILE)) {
            Ok(text) => parse_records(&text),
            Err(_) => HashMap::new(),
        };
        let doc_hash = std::fs::read_to_string(hash_dir.join(DOC_HASH_FILE))
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        tracing::debug!(
            event = "fingerprint_store_loaded",
            dir = %hash_dir.display(),
            entries = entries.len(),
            has_doc_hash = doc_hash.is_some()
        );
        Self {
            hash_dir: hash_dir.to_path_buf(),
            entries,
            doc_hash,
        }
    }

    pub fn get(&self, name: &str) -> Option<Fingerprint> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whole-document fast path: no stored hash means modified, so a first
    /// run (or a run after `clean`) does full work.
    pub fn is_document_modified(&self, source: &Path) -> Result<bool> {
        match &self.doc_hash {
            None => Ok(true),
            Some(stored) => Ok(stored != &document_hash(source)?),
        }
    }

    /// Full-snapshot rewrite: one record per current entry. Names dropped
    /// from the source document disappear from the store here.
    pub fn save(&self, entries: &[ResEntry], source: &Path) -> Result<()> {
        std::fs::create_dir_all(&self.hash_dir)?;
        let mut content = String::new();
        for entry in entries {
            content.push_str(&entry.name);
            content.push(':');
            content.push_str(&fingerprint(&entry.value).to_string());
            content.push('\n');
        }
        std::fs::write(self.hash_dir.join(NODES_HASH_FILE), content)?;
        std::fs::write(self.hash_dir.join(DOC_HASH_FILE), document_hash(source)?)?;
        Ok(())
    }
}

fn parse_records(text: &str) -> HashMap<String, Fingerprint> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() != 2 {
            continue;
        }
        if let Ok(value) = parts[1].trim().parse::<Fingerprint>() {
            map.insert(parts[0].to_string(), value);
        }
    }
    map
}
