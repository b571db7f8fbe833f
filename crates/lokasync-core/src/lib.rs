use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workspace-wide result alias.
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Minimal unit used across crates to represent a single string resource
/// read from an Android `strings.xml` (or produced by the translator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResEntry {
    pub name: String,
    /// Full inner text of the resource node.
    pub value: String,
    /// `translatable="false"` entries are copied verbatim to every target
    /// document and never sent to a translation provider.
    pub translatable: bool,
}

impl ResEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            translatable: true,
        }
    }
}

/// Lightweight error type for the parser layer.
#[derive(Debug, Error)]
pub enum LokasyncError {
    #[error("xml: {0}")]
    Xml(String),
    #[error("{0}")]
    Other(String),
}
