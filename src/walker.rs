use anyhow::{Context, Result};
use log::debug;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs;

/// Recursively collects all non-ignored files under `dir`, depth-first, in the
/// order the underlying directory listing returns them.
///
/// A child whose name contains any pattern as a substring is skipped entirely;
/// ignored directories are pruned, their contents never visited. Matching is
/// pure substring containment with no glob or path-segment semantics, so a
/// pattern like `src` also excludes `source.txt`. Symlinks and other special
/// entries are dropped.
pub async fn collect_files(dir: &Path, ignore_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(dir, ignore_patterns, &mut files).await?;
    Ok(files)
}

fn walk<'a>(
    dir: &'a Path,
    ignore_patterns: &'a [String],
    files: &'a mut Vec<PathBuf>,
) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
    Box::pin(async move {
        let mut entries = fs::read_dir(dir)
            .await
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("Failed to list directory: {}", dir.display()))?
        {
            let name = entry.file_name();
            let name = name.to_string_lossy();

            if is_ignored(&name, ignore_patterns) {
                debug!("Ignoring entry: {}", entry.path().display());
                continue;
            }

            let file_type = entry.file_type().await.with_context(|| {
                format!("Failed to inspect entry: {}", entry.path().display())
            })?;

            if file_type.is_dir() {
                walk(&entry.path(), ignore_patterns, files).await?;
            } else if file_type.is_file() {
                files.push(entry.path());
            }
        }

        Ok(())
    })
}

/// A name is excluded when any pattern occurs in it as a substring.
fn is_ignored(name: &str, ignore_patterns: &[String]) -> bool {
    ignore_patterns.iter().any(|pattern| name.contains(pattern))
}
