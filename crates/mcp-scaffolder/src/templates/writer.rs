//! Persisting rendered files to disk

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::templates::manifest::RenderedFile;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::task::JoinSet;
use tracing::debug;

/// Write every rendered file under `target_dir`.
///
/// Creates `target_dir` and its `src/` subdirectory, then issues all writes
/// concurrently. The first failure is returned; writes still in flight are
/// aborted and files already written stay on disk. Returns the written
/// relative paths, sorted.
pub async fn write_project(
    target_dir: &Path,
    files: Vec<RenderedFile>,
) -> ScaffoldResult<Vec<PathBuf>> {
    let src_dir = target_dir.join("src");
    fs::create_dir_all(&src_dir)
        .await
        .map_err(|source| ScaffoldError::CreateDir {
            path: src_dir.clone(),
            source,
        })?;

    let mut tasks = JoinSet::new();
    for file in files {
        let target_path = target_dir.join(&file.relative_path);
        tasks.spawn(async move {
            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|source| ScaffoldError::CreateDir {
                        path: parent.to_path_buf(),
                        source,
                    })?;
            }

            fs::write(&target_path, file.contents.as_bytes())
                .await
                .map_err(|source| ScaffoldError::WriteFile {
                    path: target_path.clone(),
                    source,
                })?;

            debug!(path = %target_path.display(), "wrote file");
            Ok::<_, ScaffoldError>(file.relative_path)
        });
    }

    let mut written = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        written.push(joined??);
    }

    written.sort();
    Ok(written)
}
