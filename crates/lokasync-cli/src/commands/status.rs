use color_eyre::eyre::{bail, Result};
use std::path::PathBuf;

pub fn run_status(
    root: PathBuf,
    langs: Vec<String>,
    resource_root: Option<String>,
    format: String,
    use_color: bool,
) -> Result<()> {
    tracing::debug!(event = "status_args", root = ?root, langs = ?langs);
    let cfg = lokasync_config::load_config().unwrap_or_default();

    let langs = if langs.is_empty() {
        cfg.languages.clone().unwrap_or_default()
    } else {
        langs
    };
    if langs.is_empty() {
        bail!("no target languages: pass --lang or set `languages` in lokasync.toml");
    }

    let format = if format == "text" {
        cfg.status
            .as_ref()
            .and_then(|s| s.format.clone())
            .unwrap_or(format)
    } else {
        format
    };
    let resource_root = resource_root.or(cfg.resource_root);

    let report = lokasync_services::status(&root, &langs, resource_root.as_deref())?;

    if format == "json" {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    println!(
        "source modified: {}",
        if report.source_modified { "yes" } else { "no" }
    );
    print_list("changed keys", &report.changed_keys, use_color);
    print_list("missing languages", &report.missing_languages, use_color);
    print_list("stale languages", &report.stale_languages, use_color);
    Ok(())
}

fn print_list(label: &str, items: &[String], use_color: bool) {
    if items.is_empty() {
        println!("{label}: none");
        return;
    }
    if use_color {
        use owo_colors::OwoColorize;
        println!("{}: {}", label, items.join(", ").yellow());
    } else {
        println!("{}: {}", label, items.join(", "));
    }
}
