//! Flag-driven (non-interactive) runs

use crate::error::ScaffoldResult;
use crate::git::GIT_INIT_WARNING;
use crate::options::ResolvedOptions;
use crate::product::ProductConfig;
use crate::project::{existing_entries, generate_project, project_dir, GeneratedProject};
use crate::reporter;
use crate::runtime::detect_toolchain;
use std::path::Path;
use tracing::warn;

/// Generate a project from already-validated flags and print the summary.
///
/// A non-empty target directory and missing tools only produce warnings.
pub async fn run<C: ProductConfig>(
    config: &C,
    options: &ResolvedOptions,
    parent_dir: &Path,
) -> ScaffoldResult<GeneratedProject> {
    let target = project_dir(parent_dir, options);
    if let Some(count) = existing_entries(&target) {
        warn!(dir = %target.display(), count, "target directory is not empty");
        reporter::print_warning(&format!(
            "Directory {} has {} existing items; generated files will overwrite matching paths",
            target.display(),
            count
        ));
    }

    for warning in detect_toolchain(options.package_manager()).await?.warnings() {
        reporter::print_warning(&warning);
    }

    let project = generate_project(options, parent_dir).await?;

    if project.git_failed() {
        reporter::print_warning(GIT_INIT_WARNING);
    }

    reporter::print_success(config, options, &project);
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Framework, PackageManager, TemplateType};
    use crate::product::testing::TestProduct;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_writes_into_existing_directory() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().join("demo");
        std::fs::create_dir_all(&existing).unwrap();
        std::fs::write(existing.join("notes.txt"), "keep").unwrap();

        let options = ResolvedOptions::new(
            "demo",
            PackageManager::Pnpm,
            Framework::Sdk,
            TemplateType::Stateful,
            false,
            false,
        )
        .unwrap();

        let project = run(&TestProduct, &options, temp.path()).await.unwrap();

        assert!(project.path.join("src/index.ts").is_file());
        assert!(project.path.join("notes.txt").is_file());
        let dockerfile = std::fs::read_to_string(project.path.join("Dockerfile")).unwrap();
        assert!(dockerfile.contains("pnpm-lock.yaml"));
    }
}
