use std::path::{Path, PathBuf};

pub const STRINGS_XML: &str = "strings.xml";
pub const DEFAULT_RESOURCE_ROOT: &str = "src/main/res";

/// Directory convention for one Android-style project:
/// source at `<res>/values/strings.xml`, targets at
/// `<res>/values-<lang>/strings.xml`, fingerprint cache under
/// `<root>/build/hashes` (never under version-controlled sources).
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    project_root: PathBuf,
    res_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(project_root: &Path, resource_root: Option<&str>) -> Self {
        let res_dir = project_root.join(resource_root.unwrap_or(DEFAULT_RESOURCE_ROOT));
        Self {
            project_root: project_root.to_path_buf(),
            res_dir,
        }
    }

    pub fn res_dir(&self) -> &Path {
        &self.res_dir
    }

    pub fn source_doc(&self) -> PathBuf {
        self.res_dir.join("values").join(STRINGS_XML)
    }

    pub fn language_dir(&self, lang: &str) -> PathBuf {
        self.res_dir.join(format!("values-{lang}"))
    }

    pub fn language_doc(&self, lang: &str) -> PathBuf {
        self.language_dir(lang).join(STRINGS_XML)
    }

    pub fn hash_dir(&self) -> PathBuf {
        self.project_root.join("build").join("hashes")
    }
}
