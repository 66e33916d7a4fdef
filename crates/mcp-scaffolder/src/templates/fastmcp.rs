//! FastMCP server sources and README

use super::{command_vars, render};
use crate::options::PackageManager;

const SERVER: &str = include_str!("../../templates/fastmcp/server.ts.tmpl");
const INDEX: &str = include_str!("../../templates/fastmcp/index.ts.tmpl");
const README: &str = include_str!("../../templates/fastmcp/README.md.tmpl");

/// `src/server.ts`
pub fn server(project_name: &str) -> String {
    render(SERVER, &[("project_name", project_name)])
}

/// `src/index.ts`; stateless servers pass `stateless: true` to the transport
pub fn index(stateless: bool) -> String {
    let stateless_config = if stateless { "\n    stateless: true," } else { "" };
    render(INDEX, &[("stateless_config", stateless_config)])
}

/// `README.md`
pub fn readme(project_name: &str, package_manager: PackageManager, stateless: bool) -> String {
    let mode_description = if stateless {
        "A stateless streamable HTTP MCP server built with FastMCP."
    } else {
        "A stateful streamable HTTP MCP server built with FastMCP."
    };

    let mut vars = vec![
        ("project_name", project_name),
        ("mode_description", mode_description),
    ];
    vars.extend(command_vars(package_manager));
    render(README, &vars)
}
