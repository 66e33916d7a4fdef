//! Project generation: render the manifest, write it, optionally `git init`

use crate::error::ScaffoldResult;
use crate::git::{init_repository, GitInitOutcome};
use crate::options::ResolvedOptions;
use crate::templates::{select_manifest, write_project};
use std::path::{Path, PathBuf};
use tracing::info;

/// A project written to disk
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    /// Absolute or parent-relative project root
    pub path: PathBuf,
    /// Written files, relative to `path`, sorted
    pub files: Vec<PathBuf>,
    /// `None` when git initialization was not requested
    pub git: Option<GitInitOutcome>,
}

impl GeneratedProject {
    /// Git was requested and did not succeed
    pub fn git_failed(&self) -> bool {
        self.git.as_ref().is_some_and(|outcome| !outcome.is_initialized())
    }
}

/// Where the project for `options` lives under `parent_dir`
pub fn project_dir(parent_dir: &Path, options: &ResolvedOptions) -> PathBuf {
    parent_dir.join(options.project_name())
}

/// Number of entries in `dir` when it exists and is non-empty
pub fn existing_entries(dir: &Path) -> Option<usize> {
    if !dir.is_dir() {
        return None;
    }
    let count = std::fs::read_dir(dir).ok()?.count();
    (count > 0).then_some(count)
}

/// Generate a project in `<parent_dir>/<project name>`.
///
/// Every file is rendered before the first filesystem change. A git failure
/// is recorded in [`GeneratedProject::git`] and never returned as an error.
pub async fn generate_project(
    options: &ResolvedOptions,
    parent_dir: &Path,
) -> ScaffoldResult<GeneratedProject> {
    let path = project_dir(parent_dir, options);
    let manifest = select_manifest(options);
    let rendered = manifest.render();

    info!(
        project = options.project_name(),
        framework = %options.framework(),
        template = %options.template_type(),
        oauth = options.with_oauth(),
        files = rendered.len(),
        "generating project"
    );

    let files = write_project(&path, rendered).await?;

    let git = if options.with_git_init() {
        Some(init_repository(&path).await)
    } else {
        None
    };

    Ok(GeneratedProject { path, files, git })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Framework, PackageManager, TemplateType};
    use tempfile::TempDir;

    fn options(framework: Framework, template_type: TemplateType, oauth: bool) -> ResolvedOptions {
        ResolvedOptions::new(
            "demo",
            PackageManager::Npm,
            framework,
            template_type,
            oauth,
            false,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_generates_sdk_stateful_oauth_project() {
        let temp = TempDir::new().unwrap();
        let project = generate_project(
            &options(Framework::Sdk, TemplateType::Stateful, true),
            temp.path(),
        )
        .await
        .unwrap();

        assert_eq!(project.path, temp.path().join("demo"));
        assert!(project.git.is_none());
        assert!(!project.git_failed());
        assert_eq!(project.files.len(), 10);
        assert!(project.path.join("src/auth.ts").is_file());

        let pkg = std::fs::read_to_string(project.path.join("package.json")).unwrap();
        assert!(pkg.contains("\"jose\""));
    }

    #[tokio::test]
    async fn test_generates_fastmcp_project() {
        let temp = TempDir::new().unwrap();
        let project = generate_project(
            &options(Framework::FastMcp, TemplateType::Stateless, false),
            temp.path(),
        )
        .await
        .unwrap();

        assert_eq!(project.files.len(), 9);
        assert!(!project.path.join("src/auth.ts").exists());
        let server = std::fs::read_to_string(project.path.join("src/server.ts")).unwrap();
        assert!(server.contains("name: 'demo'"));
    }

    #[tokio::test]
    async fn test_written_files_match_rendered_manifest() {
        let temp = TempDir::new().unwrap();
        let opts = options(Framework::Sdk, TemplateType::Stateless, false);
        let project = generate_project(&opts, temp.path()).await.unwrap();

        for file in select_manifest(&opts).render() {
            let on_disk = std::fs::read_to_string(project.path.join(&file.relative_path)).unwrap();
            assert_eq!(on_disk, file.contents);
        }
    }

    #[test]
    fn test_existing_entries() {
        let temp = TempDir::new().unwrap();
        assert_eq!(existing_entries(&temp.path().join("missing")), None);
        assert_eq!(existing_entries(temp.path()), None);

        std::fs::write(temp.path().join("a.txt"), "a").unwrap();
        std::fs::create_dir(temp.path().join("b")).unwrap();
        assert_eq!(existing_entries(temp.path()), Some(2));
    }

    #[test]
    fn test_git_failed_only_when_requested_and_unsuccessful() {
        let mut project = GeneratedProject {
            path: PathBuf::from("demo"),
            files: Vec::new(),
            git: None,
        };
        assert!(!project.git_failed());

        project.git = Some(GitInitOutcome::Initialized);
        assert!(!project.git_failed());

        project.git = Some(GitInitOutcome::Failed(Some(1)));
        assert!(project.git_failed());
    }
}
