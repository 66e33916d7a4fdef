//! Argument resolution: decide between interactive and flag-driven runs

use crate::error::ValidationError;
use crate::options::{
    validate_project_name, Framework, OptionChoice, PackageManager, ResolvedOptions, TemplateType,
};
use tracing::debug;

/// Flag values as they arrived on the command line, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArgs {
    /// Project name
    pub name: Option<String>,

    /// Package manager (npm, pnpm, yarn)
    pub package_manager: Option<String>,

    /// Framework (sdk, fastmcp)
    pub framework: Option<String>,

    /// Template type (stateless, stateful)
    pub template: Option<String>,

    /// Enable OAuth (sdk + stateful only)
    pub oauth: bool,

    /// Skip git repository initialization
    pub no_git: bool,
}

impl RawArgs {
    /// True when no scaffolding flag was given at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.package_manager.is_none()
            && self.framework.is_none()
            && self.template.is_none()
            && !self.oauth
            && !self.no_git
    }
}

/// How the options for this run will be gathered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Ask the user, one prompt at a time
    Interactive,
    /// Everything came from flags and has been validated
    Cli(ResolvedOptions),
}

/// Resolve command-line flags into a [`Mode`].
///
/// Checks run in a fixed order and stop at the first failure: name present,
/// name characters, enumerated values, then the OAuth combination.
pub fn resolve(args: RawArgs) -> Result<Mode, ValidationError> {
    if args.is_empty() {
        debug!("no scaffolding flags given, using interactive mode");
        return Ok(Mode::Interactive);
    }

    let name = match args.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ValidationError::MissingName),
    };
    validate_project_name(name)?;

    let package_manager = parse_or_default::<PackageManager>(args.package_manager.as_deref())?;
    let framework = parse_or_default::<Framework>(args.framework.as_deref())?;
    let template_type = parse_or_default::<TemplateType>(args.template.as_deref())?;

    let options = ResolvedOptions::new(
        name,
        package_manager,
        framework,
        template_type,
        args.oauth,
        !args.no_git,
    )?;

    debug!(?options, "resolved options from flags");
    Ok(Mode::Cli(options))
}

fn parse_or_default<T: OptionChoice + Default>(value: Option<&str>) -> Result<T, ValidationError> {
    value.map(T::parse_flag).unwrap_or_else(|| Ok(T::default()))
}
