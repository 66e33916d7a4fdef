//! MCP Scaffolder - Shared library for the `create-mcp-server` CLI
//!
//! This library generates ready-to-run TypeScript MCP (Model Context Protocol)
//! server projects. A binary supplies its identity through [`ProductConfig`]
//! and hands the library either raw flags or control of the terminal.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Options** - The option schema, validation, and the resolver that
//!   turns raw flags into a [`Mode`]
//! - **Layer 2: Generation** - Manifest selection, template rendering, the
//!   concurrent file writer, and the best-effort `git init`
//! - **Layer 3: CLI/TUI Interface** - The flag-driven runner, the reporter, and
//!   optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use mcp_scaffolder::{resolve, generate_project, Mode, RawArgs};
//!
//! let args = RawArgs {
//!     name: Some("demo".into()),
//!     framework: Some("fastmcp".into()),
//!     ..Default::default()
//! };
//! if let Mode::Cli(options) = resolve(args)? {
//!     let project = generate_project(&options, &std::env::current_dir()?).await?;
//!     println!("{}", project.path.display());
//! }
//! ```

pub mod cli;
pub mod error;
pub mod git;
pub mod options;
pub mod product;
pub mod project;
pub mod reporter;
pub mod resolver;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{ScaffoldError, ScaffoldResult, ValidationError};
pub use git::GitInitOutcome;
pub use options::{Framework, OptionChoice, PackageManager, ResolvedOptions, TemplateType};
pub use product::ProductConfig;
pub use project::{generate_project, GeneratedProject};
pub use resolver::{resolve, Mode, RawArgs};
pub use runtime::{check_toolchain, detect_toolchain, RuntimeInfo, ToolchainReport};
pub use templates::{select_manifest, FileManifest, RenderedFile, TemplateFile};

#[cfg(feature = "tui")]
pub use tui::run;
