//! Template rendering, file manifest selection, and project writing
//!
//! This module provides:
//! - Pure content generators for every file a project can contain
//! - The manifest selector mapping resolved options to a file set
//! - The concurrent writer that persists a rendered manifest

pub mod common;
pub mod deployment;
pub mod fastmcp;
pub mod manifest;
pub mod sdk;
pub mod writer;

use crate::options::PackageManager;
use regex::{Captures, Regex};
use std::sync::LazyLock;

pub use manifest::{select_manifest, FileManifest, RenderedFile, TemplateFile};
pub use writer::write_project;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([a-z_]+)\}\}").expect("placeholder pattern is valid"));

/// Substitute `{{name}}` placeholders in a template.
///
/// Unknown placeholders are left untouched. Substituted values are not
/// rescanned.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// README placeholders for the package manager's everyday commands
pub(crate) fn command_vars(package_manager: PackageManager) -> [(&'static str, &'static str); 4] {
    [
        ("install", package_manager.install_command()),
        ("dev", package_manager.dev_command()),
        ("build", package_manager.build_command()),
        ("start", package_manager.start_command()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_known_placeholders() {
        let out = render("name: '{{project_name}}' ({{project_name}})", &[("project_name", "demo")]);
        assert_eq!(out, "name: 'demo' (demo)");
    }

    #[test]
    fn test_render_keeps_unknown_placeholders() {
        let out = render("{{missing}} stays", &[("project_name", "demo")]);
        assert_eq!(out, "{{missing}} stays");
    }

    #[test]
    fn test_render_ignores_code_braces() {
        let src = "const t: { [id: string]: T } = {};\nconst url = `${base}/{tenant}`;";
        assert_eq!(render(src, &[]), src);
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let out = render("{{a}}", &[("a", "{{b}}"), ("b", "nope")]);
        assert_eq!(out, "{{b}}");
    }

    #[test]
    fn test_command_vars_follow_package_manager() {
        let vars = command_vars(PackageManager::Yarn);
        assert_eq!(vars[0], ("install", "yarn"));
        assert_eq!(vars[1], ("dev", "yarn dev"));
    }
}
