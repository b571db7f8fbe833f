use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LokasyncConfig {
    /// Target language codes, e.g. ["fr", "de"].
    pub languages: Option<Vec<String>>,
    /// Master switch: when false, `sync` is a no-op.
    pub activate: Option<bool>,
    /// Resource root relative to the project dir (default "src/main/res").
    pub resource_root: Option<String>,
    /// Translation provider name ("google" or "pseudo").
    pub provider: Option<String>,
    /// Bound for each outbound translation call, in seconds.
    pub timeout_secs: Option<u64>,
    pub sync: Option<SyncCfg>,
    pub status: Option<StatusCfg>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncCfg {
    pub dry_run: Option<bool>,
    pub backup: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusCfg {
    pub format: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    Other(String),
}

/// Search order: CWD/lokasync.toml, then $CONFIG_DIR/lokasync/lokasync.toml.
/// Earlier files win field by field.
pub fn load_config() -> Result<LokasyncConfig, ConfigError> {
    let mut merged = LokasyncConfig::default();
    if let Ok(p) = std::env::current_dir() {
        let path = p.join("lokasync.toml");
        if let Ok(s) = std::fs::read_to_string(&path) {
            if let Ok(cfg) = toml::from_str::<LokasyncConfig>(&s) {
                merged = merge(merged, cfg);
            }
        }
    }
    if let Some(base) = dirs::config_dir() {
        let path = base.join("lokasync").join("lokasync.toml");
        if let Ok(s) = std::fs::read_to_string(&path) {
            if let Ok(cfg) = toml::from_str::<LokasyncConfig>(&s) {
                merged = merge(merged, cfg);
            }
        }
    }
    Ok(merged)
}

fn merge(mut a: LokasyncConfig, b: LokasyncConfig) -> LokasyncConfig {
    if a.languages.is_none() {
        a.languages = b.languages;
    }
    if a.activate.is_none() {
        a.activate = b.activate;
    }
    if a.resource_root.is_none() {
        a.resource_root = b.resource_root;
    }
    if a.provider.is_none() {
        a.provider = b.provider;
    }
    if a.timeout_secs.is_none() {
        a.timeout_secs = b.timeout_secs;
    }
    a.sync = merge_opt(a.sync, b.sync, merge_sync);
    a.status = merge_opt(a.status, b.status, merge_status);
    a
}

fn merge_opt<T>(a: Option<T>, b: Option<T>, f: fn(T, T) -> T) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(f(a, b)),
        (None, Some(b)) => Some(b),
        (Some(a), None) => Some(a),
        (None, None) => None,
    }
}

fn merge_sync(mut a: SyncCfg, b: SyncCfg) -> SyncCfg {
    if a.dry_run.is_none() {
        a.dry_run = b.dry_run;
    }
    if a.backup.is_none() {
        a.backup = b.backup;
    }
    a
}

fn merge_status(mut a: StatusCfg, b: StatusCfg) -> StatusCfg {
    if a.format.is_none() {
        a.format = b.format;
    }
    a
}
