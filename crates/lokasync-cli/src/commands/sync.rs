use color_eyre::eyre::{bail, Result};
use lokasync_services::{GoogleTranslate, PseudoProvider, SyncOptions, TranslationProvider};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[allow(clippy::too_many_arguments)]
pub fn run_sync(
    root: PathBuf,
    langs: Vec<String>,
    provider: Option<String>,
    resource_root: Option<String>,
    timeout_secs: Option<u64>,
    dry_run: bool,
    backup: bool,
    format: String,
    use_color: bool,
) -> Result<()> {
    tracing::debug!(event = "sync_args", root = ?root, langs = ?langs, provider = ?provider, dry_run, backup);
    let cfg = lokasync_config::load_config().unwrap_or_default();

    let langs = if langs.is_empty() {
        cfg.languages.clone().unwrap_or_default()
    } else {
        langs
    };
    if langs.is_empty() {
        bail!("no target languages: pass --lang or set `languages` in lokasync.toml");
    }

    let opts = SyncOptions {
        resource_root: resource_root.or(cfg.resource_root.clone()),
        activate: cfg.activate.unwrap_or(true),
        dry_run: dry_run || cfg.sync.as_ref().and_then(|s| s.dry_run).unwrap_or(false),
        backup: backup || cfg.sync.as_ref().and_then(|s| s.backup).unwrap_or(false),
    };

    let provider_name = provider
        .or(cfg.provider.clone())
        .unwrap_or_else(|| "google".to_string());
    let timeout = Duration::from_secs(
        timeout_secs
            .or(cfg.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    );
    let provider: Box<dyn TranslationProvider> = match provider_name.as_str() {
        "pseudo" => Box::new(PseudoProvider),
        "google" => Box::new(GoogleTranslate::new(timeout)?),
        other => bail!("unknown provider: {other}"),
    };

    let report = lokasync_services::sync(&root, &langs, provider.as_ref(), &opts)?;

    if format == "json" {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    for stat in &report.languages {
        println!("  {}  {}  ({} keys)", stat.lang, stat.status, stat.keys);
    }
    let summary = format!(
        "sync finished: {} created, {} updated, {} skipped, {} removed, {} failed ({} keys translated)",
        report.created,
        report.updated,
        report.skipped,
        report.removed,
        report.failed,
        report.keys_translated
    );
    if use_color {
        use owo_colors::OwoColorize;
        if report.failed == 0 {
            println!("✔ {}", summary.green());
        } else {
            println!("✖ {}", summary.red());
        }
    } else {
        println!("{summary}");
    }
    for err in &report.errors {
        eprintln!("warning: {err}");
    }
    Ok(())
}
