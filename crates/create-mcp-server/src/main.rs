//! create-mcp-server - Project scaffolding for MCP servers

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, FromArgMatches, Parser};
use mcp_scaffolder::{cli, reporter, resolve, Mode, ProductConfig, RawArgs};
use tracing_subscriber::EnvFilter;

/// MCP server product configuration
#[derive(Clone)]
pub struct McpServerConfig;

impl ProductConfig for McpServerConfig {
    fn name(&self) -> &'static str {
        "create-mcp-server"
    }

    fn display_name(&self) -> &'static str {
        "Create MCP Server"
    }

    fn cli_description(&self) -> &'static str {
        "Scaffold a TypeScript MCP (Model Context Protocol) server"
    }

    fn docs_url(&self) -> &'static str {
        "https://modelcontextprotocol.io"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-mcp-server")]
#[command(version)]
pub struct Args {
    /// Project name (letters, numbers, hyphens, underscores)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Package manager: npm, pnpm, yarn [default: npm]
    #[arg(short, long = "package-manager", value_name = "PM")]
    pub package_manager: Option<String>,

    /// Framework: sdk, fastmcp [default: sdk]
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Server mode: stateless, stateful [default: stateless]
    #[arg(short, long)]
    pub template: Option<String>,

    /// Enable OAuth authentication (sdk + stateful only)
    #[arg(long)]
    pub oauth: bool,

    /// Skip git repository initialization
    #[arg(long = "no-git")]
    pub no_git: bool,
}

impl From<Args> for RawArgs {
    fn from(args: Args) -> Self {
        RawArgs {
            name: args.name,
            package_manager: args.package_manager,
            framework: args.framework,
            template: args.template,
            oauth: args.oauth,
            no_git: args.no_git,
        }
    }
}

fn init_tracing() {
    // Only initialize tracing if RUST_LOG is set.
    let rust_log_set = std::env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .is_some();
    if !rust_log_set {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// The clap command, with its about text taken from the product config
fn cli_command<C: ProductConfig>(config: &C) -> Command {
    Args::command().about(config.cli_description())
}

/// Parse flags; usage errors exit 1, `--help` / `--version` exit 0
fn parse_args<C: ProductConfig>(config: &C) -> Args {
    let parsed = cli_command(config)
        .try_get_matches()
        .and_then(|matches| Args::from_arg_matches(&matches));
    match parsed {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C outside of prompts
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_tracing();

    let config = McpServerConfig;
    let args = parse_args(&config);
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;

    let result = match resolve(args.into()) {
        Ok(Mode::Interactive) => mcp_scaffolder::run(&config, &cwd).await.map(|_| ()),
        Ok(Mode::Cli(options)) => cli::run(&config, &options, &cwd).await.map(|_| ()),
        Err(e) => Err(e.into()),
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        tracing::debug!(error = ?err, "run failed");
        reporter::print_failure(&config, &err);
        std::process::exit(err.exit_code());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> RawArgs {
        let mut full = vec!["create-mcp-server"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap().into()
    }

    #[test]
    fn test_command_definition_is_valid() {
        cli_command(&McpServerConfig).debug_assert();
    }

    #[test]
    fn test_about_comes_from_product_config() {
        let command = cli_command(&McpServerConfig);
        assert_eq!(
            command.get_about().map(ToString::to_string).as_deref(),
            Some(McpServerConfig.cli_description())
        );
    }

    #[test]
    fn test_no_flags_is_empty() {
        assert!(parse(&[]).is_empty());
    }

    #[test]
    fn test_short_and_long_flags() {
        let args = parse(&["-n", "demo", "-p", "pnpm", "-f", "sdk", "-t", "stateful", "--oauth"]);
        assert_eq!(args.name.as_deref(), Some("demo"));
        assert_eq!(args.package_manager.as_deref(), Some("pnpm"));
        assert_eq!(args.framework.as_deref(), Some("sdk"));
        assert_eq!(args.template.as_deref(), Some("stateful"));
        assert!(args.oauth);
        assert!(!args.no_git);

        let args = parse(&["--name=demo", "--package-manager=yarn", "--no-git"]);
        assert_eq!(args.package_manager.as_deref(), Some("yarn"));
        assert!(args.no_git);
    }

    #[test]
    fn test_enum_values_are_left_for_the_resolver() {
        let args = parse(&["--framework", "nope"]);
        assert_eq!(args.framework.as_deref(), Some("nope"));
    }

    #[test]
    fn test_unknown_flag_is_a_usage_error() {
        let err = Args::try_parse_from(["create-mcp-server", "--bogus"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_version_is_informational() {
        let err = Args::try_parse_from(["create-mcp-server", "--version"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}
