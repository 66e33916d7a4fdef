//! Option schema: the legal values for every scaffolding choice
//!
//! Both the flag parser and the interactive prompts end up in
//! [`ResolvedOptions::new`], which is the only way to build a resolved
//! configuration. That keeps the two entry points from drifting apart in what
//! they accept.

use crate::error::ValidationError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Default project name offered by the interactive prompt
pub const DEFAULT_PROJECT_NAME: &str = "my-mcp-server";

static PROJECT_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("project name pattern is valid"));

/// A closed set of values selectable through a single flag
pub trait OptionChoice: Copy + Eq + Sized + 'static {
    /// Long flag name (without the leading dashes)
    const FLAG: &'static str;

    /// Every legal value, in the order prompts list them
    const ALL: &'static [Self];

    /// Value as written on the command line
    fn as_str(&self) -> &'static str;

    /// Parse a flag value, naming the flag and the legal values on failure
    fn parse_flag(value: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidValue {
                flag: Self::FLAG,
                value: value.to_string(),
                allowed: Self::ALL
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Package manager used by the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// Binary looked up on PATH
    pub fn binary(&self) -> &'static str {
        self.as_str()
    }

    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Pnpm => "pnpm install",
            PackageManager::Yarn => "yarn",
        }
    }

    pub fn dev_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run dev",
            PackageManager::Pnpm => "pnpm dev",
            PackageManager::Yarn => "yarn dev",
        }
    }

    pub fn build_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run build",
            PackageManager::Pnpm => "pnpm build",
            PackageManager::Yarn => "yarn build",
        }
    }

    pub fn start_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm start",
            PackageManager::Pnpm => "pnpm start",
            PackageManager::Yarn => "yarn start",
        }
    }
}

impl OptionChoice for PackageManager {
    const FLAG: &'static str = "package-manager";
    const ALL: &'static [Self] = &[PackageManager::Npm, PackageManager::Pnpm, PackageManager::Yarn];

    fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }
}

/// Server framework the generated project is built on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Framework {
    /// Official MCP TypeScript SDK wired into Express
    #[default]
    Sdk,
    /// FastMCP, which hides the transport plumbing
    FastMcp,
}

impl Framework {
    /// Name used in the success summary
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Sdk => "MCP SDK",
            Framework::FastMcp => "FastMCP",
        }
    }

    /// Label and hint shown in the interactive selection
    pub fn prompt_label(&self) -> (&'static str, &'static str) {
        match self {
            Framework::Sdk => ("Official MCP SDK", "Full control with Express.js"),
            Framework::FastMcp => ("FastMCP", "Simpler API, less boilerplate"),
        }
    }
}

impl OptionChoice for Framework {
    const FLAG: &'static str = "framework";
    const ALL: &'static [Self] = &[Framework::Sdk, Framework::FastMcp];

    fn as_str(&self) -> &'static str {
        match self {
            Framework::Sdk => "sdk",
            Framework::FastMcp => "fastmcp",
        }
    }
}

/// Whether the generated server keeps per-client session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateType {
    #[default]
    Stateless,
    Stateful,
}

impl TemplateType {
    pub fn is_stateless(&self) -> bool {
        matches!(self, TemplateType::Stateless)
    }

    pub fn prompt_label(&self) -> (&'static str, &'static str) {
        match self {
            TemplateType::Stateless => ("Stateless", "Simple HTTP server"),
            TemplateType::Stateful => ("Stateful", "Session-based server with SSE support"),
        }
    }
}

impl OptionChoice for TemplateType {
    const FLAG: &'static str = "template";
    const ALL: &'static [Self] = &[TemplateType::Stateless, TemplateType::Stateful];

    fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Stateless => "stateless",
            TemplateType::Stateful => "stateful",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(PackageManager, Framework, TemplateType);

/// Check a project name against the allowed character set
pub fn validate_project_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if !PROJECT_NAME_PATTERN.is_match(name) {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Whether OAuth can be offered for this framework/template pair
pub fn oauth_supported(framework: Framework, template_type: TemplateType) -> bool {
    framework == Framework::Sdk && template_type == TemplateType::Stateful
}

/// The canonical, validated configuration for one scaffolding run.
///
/// Read-only once built; the project name doubles as the directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    project_name: String,
    package_manager: PackageManager,
    framework: Framework,
    template_type: TemplateType,
    with_oauth: bool,
    with_git_init: bool,
}

impl ResolvedOptions {
    /// Validate a full set of choices.
    ///
    /// `with_oauth` outside sdk + stateful is rejected, never downgraded.
    pub fn new(
        project_name: &str,
        package_manager: PackageManager,
        framework: Framework,
        template_type: TemplateType,
        with_oauth: bool,
        with_git_init: bool,
    ) -> Result<Self, ValidationError> {
        validate_project_name(project_name)?;

        if with_oauth && !oauth_supported(framework, template_type) {
            return Err(ValidationError::OAuthRequiresSdkStateful {
                framework,
                template: template_type,
            });
        }

        Ok(Self {
            project_name: project_name.to_string(),
            package_manager,
            framework,
            template_type,
            with_oauth,
            with_git_init,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn template_type(&self) -> TemplateType {
        self.template_type
    }

    pub fn with_oauth(&self) -> bool {
        self.with_oauth
    }

    pub fn with_git_init(&self) -> bool {
        self.with_git_init
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_project_names() {
        assert!(validate_project_name("my-server_2").is_ok());
        assert!(validate_project_name("MCP").is_ok());
        assert!(validate_project_name("a").is_ok());
    }

    #[test]
    fn test_invalid_project_names() {
        for name in ["my server", "bad!", "dot.name", "slash/name", "ümlaut"] {
            assert_eq!(
                validate_project_name(name),
                Err(ValidationError::InvalidName(name.to_string())),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_name_is_missing() {
        assert_eq!(validate_project_name(""), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_parse_flag_values() {
        assert_eq!(PackageManager::parse_flag("pnpm"), Ok(PackageManager::Pnpm));
        assert_eq!(Framework::parse_flag("fastmcp"), Ok(Framework::FastMcp));
        assert_eq!(TemplateType::parse_flag("stateful"), Ok(TemplateType::Stateful));
    }

    #[test]
    fn test_parse_flag_names_offending_flag() {
        let err = PackageManager::parse_flag("bun").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("--package-manager"));
        assert!(message.contains("bun"));
        assert!(message.contains("npm, pnpm, yarn"));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(PackageManager::default(), PackageManager::Npm);
        assert_eq!(Framework::default(), Framework::Sdk);
        assert_eq!(TemplateType::default(), TemplateType::Stateless);
    }

    #[test]
    fn test_oauth_requires_sdk_stateful() {
        let ok = ResolvedOptions::new(
            "demo",
            PackageManager::Npm,
            Framework::Sdk,
            TemplateType::Stateful,
            true,
            true,
        );
        assert!(ok.is_ok());

        for (framework, template) in [
            (Framework::Sdk, TemplateType::Stateless),
            (Framework::FastMcp, TemplateType::Stateful),
            (Framework::FastMcp, TemplateType::Stateless),
        ] {
            let err = ResolvedOptions::new(
                "demo",
                PackageManager::Npm,
                framework,
                template,
                true,
                true,
            )
            .unwrap_err();
            assert!(matches!(err, ValidationError::OAuthRequiresSdkStateful { .. }));
        }
    }

    #[test]
    fn test_package_manager_commands() {
        assert_eq!(PackageManager::Yarn.install_command(), "yarn");
        assert_eq!(PackageManager::Pnpm.dev_command(), "pnpm dev");
        assert_eq!(PackageManager::Npm.build_command(), "npm run build");
        assert_eq!(PackageManager::Npm.start_command(), "npm start");
    }
}
