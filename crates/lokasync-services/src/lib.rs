//! High-level orchestration layer over lower-level crates.
//! Exposes the stable `sync`/`status` entrypoints used by the CLI
//! without requiring clients to import parser or store internals.

pub use lokasync_core::{ResEntry, Result};
pub use lokasync_domain::{LanguageStat, RunReport, StatusReport};

pub mod detect;
pub mod fingerprints;
pub mod merge;
pub mod paths;
pub mod placeholders;
pub mod providers;
pub mod reconcile;
pub mod sync;
pub mod translate;
pub(crate) mod util;

mod status;

pub use paths::ProjectLayout;
pub use providers::{GoogleTranslate, PseudoProvider};
pub use status::status;
pub use sync::{sync, SyncOptions};
pub use translate::TranslationProvider;
