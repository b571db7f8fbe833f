use assert_cmd::prelude::*;
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

mod helpers;
use helpers::{lang_doc_path, last_json_line, run_cli, write_source, SAMPLE_SOURCE};

#[derive(Deserialize)]
struct LangStat {
    lang: String,
    status: String,
    keys: usize,
}

#[derive(Deserialize)]
struct Report {
    created: usize,
    updated: usize,
    skipped: usize,
    removed: usize,
    failed: usize,
    keys_translated: usize,
    languages: Vec<LangStat>,
    errors: Vec<String>,
}

#[derive(Deserialize)]
struct Status {
    source_modified: bool,
    changed_keys: Vec<String>,
    missing_languages: Vec<String>,
    stale_languages: Vec<String>,
}

fn sync_json(root: &Path, langs: &[&str]) -> Report {
    let root_s = root.to_str().unwrap();
    let mut args = vec![
        "--quiet", "--no-color", "sync", "--root", root_s, "--provider", "pseudo", "--format",
        "json",
    ];
    for lang in langs {
        args.push("--lang");
        args.push(lang);
    }
    let (code, stdout, stderr) = run_cli(&args);
    assert_eq!(code, 0, "sync failed.\nstdout:\n{stdout}\nstderr:\n{stderr}");
    serde_json::from_str(&last_json_line(&stdout)).expect("json report")
}

#[test]
fn first_run_creates_all_languages_with_passthrough() {
    let tmp = tempfile::tempdir().unwrap();
    write_source(tmp.path(), SAMPLE_SOURCE);

    let report = sync_json(tmp.path(), &["fr", "de"]);
    assert_eq!(report.created, 2);
    assert_eq!(report.failed, 0);
    assert!(report.errors.is_empty());
    // pseudo provider translates 2 entries per language; app_name never goes out
    assert_eq!(report.keys_translated, 4);

    for lang in ["fr", "de"] {
        let doc = lang_doc_path(tmp.path(), lang);
        let pairs = lokasync_parsers_xml::load_language_doc(&doc).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], ("app_name".to_string(), "MyAppName".to_string()));
        assert_eq!(pairs[1], ("greeting".to_string(), format!("[{lang}] Hello %s")));
        assert_eq!(pairs[2], ("bye".to_string(), format!("[{lang}] Goodbye")));
    }
}

#[test]
fn second_run_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    write_source(tmp.path(), SAMPLE_SOURCE);

    sync_json(tmp.path(), &["fr", "de"]);
    let fr_before = std::fs::read(lang_doc_path(tmp.path(), "fr")).unwrap();
    let de_before = std::fs::read(lang_doc_path(tmp.path(), "de")).unwrap();

    let report = sync_json(tmp.path(), &["fr", "de"]);
    assert_eq!(report.created, 0);
    assert_eq!(report.updated, 0);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.keys_translated, 0);
    assert!(report.languages.iter().all(|l| l.status == "skipped"));

    assert_eq!(
        std::fs::read(lang_doc_path(tmp.path(), "fr")).unwrap(),
        fr_before
    );
    assert_eq!(
        std::fs::read(lang_doc_path(tmp.path(), "de")).unwrap(),
        de_before
    );
}

#[test]
fn changed_entry_is_retranslated_and_upserted() {
    let tmp = tempfile::tempdir().unwrap();
    write_source(tmp.path(), SAMPLE_SOURCE);
    sync_json(tmp.path(), &["fr"]);

    write_source(
        tmp.path(),
        &SAMPLE_SOURCE.replace("Hello %s", "Hi there %s"),
    );
    let report = sync_json(tmp.path(), &["fr"]);
    assert_eq!(report.updated, 1);
    let lang_stat = &report.languages[0];
    assert_eq!(lang_stat.lang, "fr");
    // only the changed entry travels
    assert_eq!(lang_stat.keys, 1);

    let pairs = lokasync_parsers_xml::load_language_doc(&lang_doc_path(tmp.path(), "fr")).unwrap();
    assert_eq!(
        pairs,
        vec![
            ("app_name".to_string(), "MyAppName".to_string()),
            ("greeting".to_string(), "[fr] Hi there %s".to_string()),
            ("bye".to_string(), "[fr] Goodbye".to_string()),
        ]
    );
}

#[test]
fn new_language_without_content_change_gets_full_translation() {
    let tmp = tempfile::tempdir().unwrap();
    write_source(tmp.path(), SAMPLE_SOURCE);
    sync_json(tmp.path(), &["fr"]);

    let fr_before = std::fs::read(lang_doc_path(tmp.path(), "fr")).unwrap();
    let report = sync_json(tmp.path(), &["fr", "es"]);
    assert_eq!(report.created, 1);
    assert_eq!(report.skipped, 1);
    let es = report.languages.iter().find(|l| l.lang == "es").unwrap();
    assert_eq!(es.status, "created");
    assert_eq!(es.keys, 3);

    assert_eq!(
        std::fs::read(lang_doc_path(tmp.path(), "fr")).unwrap(),
        fr_before,
        "untouched language must not be rewritten"
    );
}

#[test]
fn dropped_language_document_is_removed() {
    let tmp = tempfile::tempdir().unwrap();
    write_source(tmp.path(), SAMPLE_SOURCE);
    sync_json(tmp.path(), &["fr", "de"]);

    let report = sync_json(tmp.path(), &["fr"]);
    assert_eq!(report.removed, 1);
    assert!(!lang_doc_path(tmp.path(), "de").exists());
    assert!(lang_doc_path(tmp.path(), "fr").exists());
}

#[test]
fn status_previews_without_writing() {
    let tmp = tempfile::tempdir().unwrap();
    write_source(tmp.path(), SAMPLE_SOURCE);
    sync_json(tmp.path(), &["fr", "de"]);
    write_source(tmp.path(), &SAMPLE_SOURCE.replace("Goodbye", "Farewell"));

    let root_s = tmp.path().to_str().unwrap();
    let (code, stdout, stderr) = run_cli(&[
        "--quiet",
        "--no-color",
        "status",
        "--root",
        root_s,
        "--lang",
        "fr",
        "--lang",
        "es",
        "--format",
        "json",
    ]);
    assert_eq!(code, 0, "status failed.\nstderr:\n{stderr}");
    let status: Status = serde_json::from_str(&last_json_line(&stdout)).expect("json status");

    assert!(status.source_modified);
    assert_eq!(status.changed_keys, vec!["bye".to_string()]);
    assert_eq!(status.missing_languages, vec!["es".to_string()]);
    assert_eq!(status.stale_languages, vec!["de".to_string()]);

    // preview only: de still on disk, es still absent
    assert!(lang_doc_path(tmp.path(), "de").exists());
    assert!(!lang_doc_path(tmp.path(), "es").exists());
}

#[test]
fn dry_run_plans_but_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    write_source(tmp.path(), SAMPLE_SOURCE);

    let root_s = tmp.path().to_str().unwrap();
    let (code, stdout, stderr) = run_cli(&[
        "--quiet",
        "--no-color",
        "sync",
        "--root",
        root_s,
        "--lang",
        "fr",
        "--provider",
        "pseudo",
        "--dry-run",
        "--format",
        "json",
    ]);
    assert_eq!(code, 0, "dry run failed.\nstderr:\n{stderr}");
    let report: Report = serde_json::from_str(&last_json_line(&stdout)).expect("json report");
    assert_eq!(report.languages.len(), 1);
    assert_eq!(report.languages[0].status, "planned");
    assert_eq!(report.languages[0].keys, 3);
    assert!(!lang_doc_path(tmp.path(), "fr").exists());
    assert!(!tmp.path().join("build").join("hashes").exists());
}

#[test]
fn unknown_provider_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    write_source(tmp.path(), SAMPLE_SOURCE);

    Command::cargo_bin("lokasync")
        .unwrap()
        .args([
            "--quiet",
            "sync",
            "--root",
            tmp.path().to_str().unwrap(),
            "--lang",
            "fr",
            "--provider",
            "nope",
        ])
        .assert()
        .failure();
}

#[test]
fn sync_without_languages_fails_with_a_hint() {
    let tmp = tempfile::tempdir().unwrap();
    write_source(tmp.path(), SAMPLE_SOURCE);

    Command::cargo_bin("lokasync")
        .unwrap()
        .args(["--quiet", "sync", "--root", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("no target languages"));
}

#[test]
fn missing_source_document_is_a_clean_noop() {
    let tmp = tempfile::tempdir().unwrap();
    let report = sync_json(tmp.path(), &["fr"]);
    assert_eq!(report.created + report.updated + report.removed, 0);
    assert!(!lang_doc_path(tmp.path(), "fr").exists());
    assert!(!tmp.path().join("build").join("hashes").exists());
}
