//! Product configuration trait for CLI binaries
//!
//! The library does the scaffolding; a binary supplies the identity shown in
//! banners and help text, plus the follow-up instructions printed at the end.

use crate::options::ResolvedOptions;

/// Configuration trait for scaffolding CLI products
///
/// Each binary implements this trait to define:
/// - Product identity (name, display name)
/// - Help text
/// - Documentation links
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Command name, as typed by users
    fn name(&self) -> &'static str;

    /// Banner title for the interactive flow
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Commands to run after the project is created
    fn next_steps(&self, options: &ResolvedOptions) -> Vec<String> {
        let pm = options.package_manager();
        vec![
            format!("cd {}", options.project_name()),
            pm.install_command().to_string(),
            pm.dev_command().to_string(),
        ]
    }
}
