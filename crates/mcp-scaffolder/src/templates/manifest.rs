//! Manifest selection: which files a project gets for a set of options

use super::{common, deployment, fastmcp, sdk};
use crate::options::{Framework, ResolvedOptions, TemplateType};
use std::path::PathBuf;

/// Every file the scaffolder knows how to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateFile {
    SdkStatelessServer,
    SdkStatelessIndex,
    SdkStatelessReadme,
    SdkStatefulServer,
    SdkStatefulIndex,
    SdkStatefulReadme,
    SdkAuth,
    FastMcpServer,
    FastMcpIndex,
    FastMcpReadme,
    PackageJson,
    Tsconfig,
    Gitignore,
    EnvExample,
    Dockerfile,
    Dockerignore,
}

/// Files present in every project whatever the framework
const COMMON_FILES: &[TemplateFile] = &[
    TemplateFile::PackageJson,
    TemplateFile::Tsconfig,
    TemplateFile::Gitignore,
    TemplateFile::EnvExample,
    TemplateFile::Dockerfile,
    TemplateFile::Dockerignore,
];

impl TemplateFile {
    /// Path relative to the project root, always `/`-separated
    pub fn relative_path(&self) -> &'static str {
        match self {
            TemplateFile::SdkStatelessServer
            | TemplateFile::SdkStatefulServer
            | TemplateFile::FastMcpServer => "src/server.ts",
            TemplateFile::SdkStatelessIndex
            | TemplateFile::SdkStatefulIndex
            | TemplateFile::FastMcpIndex => "src/index.ts",
            TemplateFile::SdkStatelessReadme
            | TemplateFile::SdkStatefulReadme
            | TemplateFile::FastMcpReadme => "README.md",
            TemplateFile::SdkAuth => "src/auth.ts",
            TemplateFile::PackageJson => "package.json",
            TemplateFile::Tsconfig => "tsconfig.json",
            TemplateFile::Gitignore => ".gitignore",
            TemplateFile::EnvExample => ".env.example",
            TemplateFile::Dockerfile => "Dockerfile",
            TemplateFile::Dockerignore => ".dockerignore",
        }
    }

    /// Produce the file contents. Pure: no clock, randomness or I/O.
    pub fn render(&self, options: &ResolvedOptions) -> String {
        let name = options.project_name();
        let pm = options.package_manager();
        let stateless = options.template_type().is_stateless();

        match self {
            TemplateFile::SdkStatelessServer => sdk::stateless_server(name),
            TemplateFile::SdkStatelessIndex => sdk::stateless_index(),
            TemplateFile::SdkStatelessReadme => sdk::stateless_readme(name, pm),
            TemplateFile::SdkStatefulServer => sdk::stateful_server(name),
            TemplateFile::SdkStatefulIndex => sdk::stateful_index(options.with_oauth()),
            TemplateFile::SdkStatefulReadme => sdk::stateful_readme(name, pm, options.with_oauth()),
            TemplateFile::SdkAuth => sdk::auth(),
            TemplateFile::FastMcpServer => fastmcp::server(name),
            TemplateFile::FastMcpIndex => fastmcp::index(stateless),
            TemplateFile::FastMcpReadme => fastmcp::readme(name, pm, stateless),
            TemplateFile::PackageJson => {
                common::package_json(name, options.framework(), options.with_oauth())
            }
            TemplateFile::Tsconfig => common::tsconfig(),
            TemplateFile::Gitignore => common::gitignore(),
            TemplateFile::EnvExample => common::env_example(options.with_oauth()),
            TemplateFile::Dockerfile => deployment::dockerfile(pm),
            TemplateFile::Dockerignore => deployment::dockerignore(),
        }
    }
}

/// A file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub relative_path: PathBuf,
    pub contents: String,
}

/// The set of files selected for one resolved configuration
#[derive(Debug, Clone)]
pub struct FileManifest {
    options: ResolvedOptions,
    files: Vec<TemplateFile>,
}

impl FileManifest {
    pub fn contains(&self, file: TemplateFile) -> bool {
        self.files.contains(&file)
    }

    /// Relative paths of every selected file, in selection order
    pub fn paths(&self) -> Vec<&'static str> {
        self.files.iter().map(TemplateFile::relative_path).collect()
    }

    /// Render every entry. Nothing touches the filesystem here.
    pub fn render(&self) -> Vec<RenderedFile> {
        self.files
            .iter()
            .map(|file| RenderedFile {
                relative_path: PathBuf::from(file.relative_path()),
                contents: file.render(&self.options),
            })
            .collect()
    }
}

/// Choose the files for a resolved configuration.
///
/// FastMCP ignores `with_oauth`; [`ResolvedOptions`] never carries OAuth for
/// it anyway.
pub fn select_manifest(options: &ResolvedOptions) -> FileManifest {
    let mut files = match (options.framework(), options.template_type()) {
        (Framework::Sdk, TemplateType::Stateless) => vec![
            TemplateFile::SdkStatelessServer,
            TemplateFile::SdkStatelessIndex,
            TemplateFile::SdkStatelessReadme,
        ],
        (Framework::Sdk, TemplateType::Stateful) => {
            let mut files = vec![
                TemplateFile::SdkStatefulServer,
                TemplateFile::SdkStatefulIndex,
                TemplateFile::SdkStatefulReadme,
            ];
            if options.with_oauth() {
                files.push(TemplateFile::SdkAuth);
            }
            files
        }
        (Framework::FastMcp, _) => vec![
            TemplateFile::FastMcpServer,
            TemplateFile::FastMcpIndex,
            TemplateFile::FastMcpReadme,
        ],
    };
    files.extend_from_slice(COMMON_FILES);

    FileManifest {
        options: options.clone(),
        files,
    }
}
