//! Charm-style interactive prompts using cliclack

use crate::error::{ScaffoldError, ScaffoldResult, ValidationError};
use crate::git::GIT_INIT_WARNING;
use crate::options::{
    oauth_supported, validate_project_name, Framework, OptionChoice, PackageManager,
    ResolvedOptions, TemplateType, DEFAULT_PROJECT_NAME,
};
use crate::product::ProductConfig;
use crate::project::{existing_entries, generate_project, project_dir, GeneratedProject};
use crate::reporter;
use crate::runtime::detect_toolchain;
use std::io;
use std::path::Path;

/// Inline validator for text prompts; the error is shown under the input
pub type InputValidator = fn(&str) -> Result<(), &'static str>;

/// The terminal surface of the interactive flow: questions plus the
/// intro, spinner, log lines and outro around them.
///
/// Cancellation is reported as an `io::ErrorKind::Interrupted` error, which
/// is what cliclack returns for Esc / Ctrl+C.
pub trait Prompter {
    /// Free text; re-asks until `validate` accepts the answer
    fn input(&mut self, prompt: &str, default: &str, validate: InputValidator)
        -> io::Result<String>;

    /// One of `items` as `(value, label, hint)`; the first item is preselected
    fn select<T: Copy + Eq + 'static>(
        &mut self,
        prompt: &str,
        items: &[(T, &'static str, &'static str)],
    ) -> io::Result<T>;

    fn confirm(&mut self, prompt: &str, initial: bool) -> io::Result<bool>;

    fn warning(&mut self, message: &str) -> io::Result<()>;

    fn success(&mut self, message: &str) -> io::Result<()>;

    fn intro(&mut self, title: &str) -> io::Result<()>;

    fn outro(&mut self, message: &str) -> io::Result<()>;

    /// Closing line after the user backed out
    fn cancel(&mut self, message: &str) -> io::Result<()>;

    /// Show a spinner until `stop_progress` or `fail_progress`
    fn start_progress(&mut self, message: &str);

    fn stop_progress(&mut self, message: &str);

    fn fail_progress(&mut self, message: &str);
}

/// Terminal prompts backed by cliclack
#[derive(Default)]
pub struct ClackPrompter {
    spinner: Option<cliclack::ProgressBar>,
}

impl Prompter for ClackPrompter {
    fn input(
        &mut self,
        prompt: &str,
        default: &str,
        validate: InputValidator,
    ) -> io::Result<String> {
        cliclack::input(prompt)
            .placeholder(default)
            .default_input(default)
            .validate(move |value: &String| validate(value))
            .interact()
    }

    fn select<T: Copy + Eq + 'static>(
        &mut self,
        prompt: &str,
        items: &[(T, &'static str, &'static str)],
    ) -> io::Result<T> {
        let mut select = cliclack::select(prompt);
        for &(value, label, hint) in items {
            select = select.item(value, label, hint);
        }
        select.interact()
    }

    fn confirm(&mut self, prompt: &str, initial: bool) -> io::Result<bool> {
        cliclack::confirm(prompt).initial_value(initial).interact()
    }

    fn warning(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::warning(message)
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::success(message)
    }

    fn intro(&mut self, title: &str) -> io::Result<()> {
        cliclack::intro(title)
    }

    fn outro(&mut self, message: &str) -> io::Result<()> {
        cliclack::outro(message)
    }

    fn cancel(&mut self, message: &str) -> io::Result<()> {
        cliclack::outro_cancel(message)
    }

    fn start_progress(&mut self, message: &str) {
        let spinner = cliclack::spinner();
        spinner.start(message);
        self.spinner = Some(spinner);
    }

    fn stop_progress(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop(message);
        }
    }

    fn fail_progress(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.error(message);
        }
    }
}

fn validate_name_input(value: &str) -> Result<(), &'static str> {
    match validate_project_name(value) {
        Ok(()) => Ok(()),
        Err(ValidationError::MissingName) => Err("Project name is required"),
        Err(_) => {
            Err("Project name can only contain letters, numbers, hyphens, and underscores")
        }
    }
}

fn choices<T: OptionChoice>(
    label: impl Fn(&T) -> (&'static str, &'static str),
) -> Vec<(T, &'static str, &'static str)> {
    T::ALL
        .iter()
        .map(|choice| {
            let (title, hint) = label(choice);
            (*choice, title, hint)
        })
        .collect()
}

/// Ask every question in order and build the resolved options.
///
/// The OAuth question is only asked for an SDK stateful server. The name is
/// taken as typed, so it passes the same check as the `--name` flag.
pub fn gather_options<P: Prompter>(prompter: &mut P) -> ScaffoldResult<ResolvedOptions> {
    let project_name = prompter.input("Project name:", DEFAULT_PROJECT_NAME, validate_name_input)?;
    if project_name.is_empty() {
        return Err(ScaffoldError::MissingProjectName);
    }

    let package_manager = prompter.select(
        "Package manager:",
        &choices::<PackageManager>(|pm| (pm.as_str(), "")),
    )?;
    let framework = prompter.select("Framework:", &choices::<Framework>(Framework::prompt_label))?;
    let template_type = prompter.select(
        "Server mode:",
        &choices::<TemplateType>(TemplateType::prompt_label),
    )?;

    let with_oauth = if oauth_supported(framework, template_type) {
        prompter.confirm("Enable OAuth authentication?", false)?
    } else {
        false
    };

    let with_git_init = prompter.confirm("Initialize git repository?", true)?;

    Ok(ResolvedOptions::new(
        &project_name,
        package_manager,
        framework,
        template_type,
        with_oauth,
        with_git_init,
    )?)
}

/// Warn about a non-empty target directory and ask before writing into it
pub fn confirm_directory<P: Prompter>(prompter: &mut P, dir: &Path) -> ScaffoldResult<()> {
    let Some(count) = existing_entries(dir) else {
        return Ok(());
    };

    prompter.warning(&format!(
        "Directory {} has {} existing items",
        dir.display(),
        count
    ))?;

    if prompter.confirm("Continue anyway?", true)? {
        Ok(())
    } else {
        Err(ScaffoldError::Cancelled)
    }
}

/// Run the interactive flow and create the project under `parent_dir`
pub async fn run<C: ProductConfig>(
    config: &C,
    parent_dir: &Path,
) -> ScaffoldResult<GeneratedProject> {
    run_with(config, &mut ClackPrompter::default(), parent_dir).await
}

async fn run_with<C: ProductConfig, P: Prompter>(
    config: &C,
    prompter: &mut P,
    parent_dir: &Path,
) -> ScaffoldResult<GeneratedProject> {
    let result = scaffold(config, prompter, parent_dir).await;

    if let Err(err) = &result {
        if err.is_cancelled() {
            if let Err(e) = prompter.cancel("Operation cancelled") {
                tracing::debug!(error = %e, "could not print cancellation outro");
            }
        }
    }

    result
}

async fn scaffold<C: ProductConfig, P: Prompter>(
    config: &C,
    prompter: &mut P,
    parent_dir: &Path,
) -> ScaffoldResult<GeneratedProject> {
    prompter.intro(config.display_name())?;

    let options = gather_options(prompter)?;
    confirm_directory(prompter, &project_dir(parent_dir, &options))?;

    for warning in detect_toolchain(options.package_manager()).await?.warnings() {
        prompter.warning(&warning)?;
    }

    prompter.start_progress("Creating project...");

    let project = match generate_project(&options, parent_dir).await {
        Ok(project) => project,
        Err(e) => {
            prompter.fail_progress("Failed to create project");
            return Err(e);
        }
    };

    prompter.stop_progress(&reporter::headline(&options, &project.path));
    tracing::debug!(files = project.files.len(), "project written");

    match &project.git {
        Some(outcome) if outcome.is_initialized() => {
            prompter.success("Initialized git repository")?;
        }
        Some(_) => prompter.warning(GIT_INIT_WARNING)?,
        None => {}
    }

    print_next_steps(config, prompter, &options)?;

    Ok(project)
}

fn print_next_steps<C: ProductConfig, P: Prompter>(
    config: &C,
    prompter: &mut P,
    options: &ResolvedOptions,
) -> io::Result<()> {
    println!();
    println!("  Next steps");
    println!();

    for line in reporter::numbered_steps(&config.next_steps(options)) {
        println!("{}", line);
    }
    println!();

    prompter.outro("Happy coding!")
}
