//! Success and failure output for flag-driven runs

use crate::error::{ScaffoldError, ValidationError};
use crate::options::ResolvedOptions;
use crate::product::ProductConfig;
use crate::project::GeneratedProject;
use colored::Colorize;
use std::path::Path;

/// `Created <name> with <framework> at <path>`
pub fn headline(options: &ResolvedOptions, path: &Path) -> String {
    format!(
        "Created {} with {} at {}",
        options.project_name(),
        options.framework().display_name(),
        path.display()
    )
}

/// Numbered step lines, as printed under "Next steps:"
pub fn numbered_steps(steps: &[String]) -> Vec<String> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("  {}.  {}", i + 1, step))
        .collect()
}

/// Print the success summary to stdout
pub fn print_success<C: ProductConfig>(
    config: &C,
    options: &ResolvedOptions,
    project: &GeneratedProject,
) {
    println!();
    println!("{} {}", "✔".green(), headline(options, &project.path));
    println!();
    println!("  {}", "Next steps:".bold());
    println!();
    for line in numbered_steps(&config.next_steps(options)) {
        println!("{}", line);
    }
    println!();
    println!("  Docs: {}", config.docs_url().cyan());
    println!();
}

/// Print a warning line to stderr
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}

/// Message for a failed run. `None` for cancellation, which stays quiet here.
pub fn failure_message<C: ProductConfig>(config: &C, err: &ScaffoldError) -> Option<String> {
    match err {
        ScaffoldError::Cancelled => None,
        ScaffoldError::Validation(ValidationError::MissingName) => Some(format!(
            "Error: {}\nUsage: {} --name <name> [options]",
            err,
            config.name()
        )),
        ScaffoldError::Validation(_) | ScaffoldError::MissingProjectName => {
            Some(format!("Error: {}", err))
        }
        ScaffoldError::CreateDir { .. }
        | ScaffoldError::WriteFile { .. }
        | ScaffoldError::Prompt(_)
        | ScaffoldError::Join(_) => Some(format!("Failed to create project: {}", err)),
    }
}

/// Print the failure message to stderr
pub fn print_failure<C: ProductConfig>(config: &C, err: &ScaffoldError) {
    if let Some(message) = failure_message(config, err) {
        eprintln!();
        eprintln!("{}", message.red());
        eprintln!();
    }
}
