//! Turns CLI arguments and prompt answers into a `ProjectOptions`.
//! Questions are asked in a fixed order and only on the interactive
//! path; once built, the options are immutable for the rest of the run.

use crate::cli::Args;
use crate::config::{PackageManager, ProjectOptions};
use crate::constants::DEFAULT_PROJECT_NAME;
use crate::error::{Error, Result};
use crate::prompt::Prompter;

/// Collects the four project options.
///
/// With `--yes` no questions are asked: the name falls back to the fixed
/// default when not supplied positionally, the package manager is the
/// first enum value, and both confirmations default to true. A
/// positional name is used verbatim on this path, without re-validation.
///
/// Interactively, the name question is skipped when a positional name
/// was given; aborting it without a positional name yields
/// `Error::CancelledError` so the caller exits before any filesystem
/// mutation.
pub fn get_options(args: Args, prompter: &dyn Prompter) -> Result<ProjectOptions> {
    if args.yes {
        return Ok(ProjectOptions {
            project_name: args
                .project_name
                .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
            package_manager: PackageManager::ALL[0],
            install_deps: true,
            init_git: true,
        });
    }

    let project_name = match args.project_name {
        Some(name) => name,
        None => prompter
            .project_name(DEFAULT_PROJECT_NAME)
            .map_err(|_| Error::CancelledError)?,
    };
    let package_manager = prompter.package_manager(&PackageManager::ALL)?;
    let install_deps = prompter.confirm("Install dependencies?", true)?;
    let init_git = prompter.confirm("Initialize git repository?", true)?;

    Ok(ProjectOptions { project_name, package_manager, install_deps, init_git })
}
