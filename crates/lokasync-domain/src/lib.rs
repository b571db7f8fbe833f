use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Outcome of one language during a sync run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LanguageStat {
    pub lang: String,
    /// created / updated / skipped / removed / failed / planned
    pub status: String,
    /// Number of entries written for this language.
    pub keys: usize,
}

/// Result of one sync invocation. Reported to the caller, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RunReport {
    pub schema_version: u32,
    pub mode: String,
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
    pub removed: usize,
    pub failed: usize,
    /// Total provider calls that produced an entry for some language.
    pub keys_translated: usize,
    pub languages: Vec<LanguageStat>,
    /// Non-fatal errors recovered during the run (per entry / per language).
    pub errors: Vec<String>,
}

impl RunReport {
    pub fn new(mode: &str) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            mode: mode.to_string(),
            created: 0,
            updated: 0,
            skipped: 0,
            removed: 0,
            failed: 0,
            keys_translated: 0,
            languages: Vec::new(),
            errors: Vec::new(),
        }
    }
}

/// Read-only preview of what a sync run would do.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StatusReport {
    pub schema_version: u32,
    /// Whole-document gate: raw source bytes differ from the stored hash.
    pub source_modified: bool,
    /// Names of entries that are new or whose value changed since last run.
    pub changed_keys: Vec<String>,
    pub missing_languages: Vec<String>,
    pub stale_languages: Vec<String>,
}
