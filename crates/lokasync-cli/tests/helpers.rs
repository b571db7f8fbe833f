#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub fn source_path(root: &Path) -> PathBuf {
    root.join("src")
        .join("main")
        .join("res")
        .join("values")
        .join("strings.xml")
}

pub fn lang_doc_path(root: &Path, lang: &str) -> PathBuf {
    root.join("src")
        .join("main")
        .join("res")
        .join(format!("values-{lang}"))
        .join("strings.xml")
}

pub fn write_source(root: &Path, xml: &str) {
    let path = source_path(root);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, xml).unwrap();
}

pub const SAMPLE_SOURCE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="app_name" translatable="false">MyAppName</string>
    <string name="greeting">Hello %s</string>
    <string name="bye">Goodbye</string>
</resources>
"#;

pub fn run_cli(args: &[&str]) -> (i32, String, String) {
    let bin = env!("CARGO_BIN_EXE_lokasync");
    let output = std::process::Command::new(bin)
        .args(args)
        .output()
        .expect("failed to spawn lokasync");
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

/// stdout: last non-empty line is the JSON summary.
pub fn last_json_line(stdout: &str) -> String {
    stdout
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .expect("have json line")
        .to_string()
}
