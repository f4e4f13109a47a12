//! Whole-file replacement on disk.

use std::io;
use std::path::{Path, PathBuf};

/// Replaces the file at `path` with `contents`.
///
/// The data is written to a hidden sibling file first and then renamed over
/// the target, so a reader sees either the old or the new file, never a
/// truncated one. Parent directories are created when missing.
pub async fn replace_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let staging = staging_path(path);
    if let Err(e) = tokio::fs::write(&staging, contents).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(e);
    }

    if let Err(e) = tokio::fs::rename(&staging, path).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(e);
    }

    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}
