//! Toolchain detection for Node.js and the selected package manager

use crate::error::ScaffoldResult;
use crate::options::PackageManager;
use std::process::Command;

/// Toolchain detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
    /// How to get the tool when it is missing
    pub install_hint: &'static str,
}

fn probe(binary: &str, name: &'static str, install_hint: &'static str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
                install_hint,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
            install_hint,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("node", "Node.js", "install from https://nodejs.org")
}

/// Check if the package manager binary is available
pub fn check_package_manager(package_manager: PackageManager) -> RuntimeInfo {
    let (name, hint) = match package_manager {
        PackageManager::Npm => ("npm", "ships with Node.js, see https://nodejs.org"),
        PackageManager::Pnpm => ("pnpm", "run `corepack enable` or see https://pnpm.io/installation"),
        PackageManager::Yarn => ("yarn", "run `corepack enable` or see https://yarnpkg.com"),
    };
    probe(package_manager.binary(), name, hint)
}

/// Result of the advisory toolchain check. Never a hard failure: the
/// generated project is valid whether or not the tools are installed.
#[derive(Debug, Clone, Default)]
pub struct ToolchainReport {
    pub tools: Vec<RuntimeInfo>,
}

impl ToolchainReport {
    pub fn missing(&self) -> impl Iterator<Item = &RuntimeInfo> {
        self.tools.iter().filter(|t| !t.available)
    }

    /// One warning line per missing tool
    pub fn warnings(&self) -> Vec<String> {
        self.missing()
            .map(|t| format!("{} was not found on PATH ({})", t.name, t.install_hint))
            .collect()
    }
}

/// Check everything the generated project needs to install and run
pub fn check_toolchain(package_manager: PackageManager) -> ToolchainReport {
    let tools = vec![check_node(), check_package_manager(package_manager)];
    for tool in &tools {
        match &tool.version {
            Some(version) => tracing::debug!(tool = tool.name, %version, "found tool"),
            None => tracing::debug!(tool = tool.name, "tool not found"),
        }
    }
    ToolchainReport { tools }
}

/// [`check_toolchain`] on the blocking pool, for use inside the async flows
pub async fn detect_toolchain(
    package_manager: PackageManager,
) -> ScaffoldResult<ToolchainReport> {
    Ok(tokio::task::spawn_blocking(move || check_toolchain(package_manager)).await?)
}
