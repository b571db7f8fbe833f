use lokasync_core::Result;
use std::io::Write;
use std::path::Path;

/// Write through a temp file in the target directory followed by a rename,
/// so a crash mid-write never leaves a half-written document behind.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.persist(path)?;
    Ok(())
}
