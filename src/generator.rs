//! Project materialization: turns validated options into an on-disk
//! project. The steps run in a fixed order; copy, manifest, and
//! environment-file failures are fatal, while the install and git steps
//! degrade to warnings so the user can finish them manually.

use console::style;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ProjectOptions;
use crate::constants::{ENV_FILE, ENV_FILE_CONTENT, INITIAL_COMMIT_MESSAGE, MANIFEST_FILE};
use crate::copier::copy_tree;
use crate::error::{Error, Result};
use crate::exclude::ExclusionRules;
use crate::manifest::patch_manifest_name;
use crate::runner::CommandRunner;

/// Outcome of a successful materialization, used for the summary.
#[derive(Debug)]
pub struct CreatedProject {
    pub project_dir: PathBuf,
    /// False when installation was skipped or the install step failed.
    pub deps_installed: bool,
}

fn step_done(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

fn step_warn(message: &str) {
    warn!("{}", message);
    println!("{} {}", style("⚠").yellow(), message);
}

/// Creates a new project directory from the staged template.
///
/// The target is `parent_dir/<project_name>`; an existing entry at that
/// path aborts before any filesystem mutation. The template is copied
/// unfiltered, the manifest name is patched, and the starter `.env` is
/// written. Dependency installation and git initialization run through
/// `runner` and are best-effort.
///
/// # Errors
/// * `Error::ProjectExistsError` when the target path is already taken
/// * `Error::TemplateError` when the template directory is missing
/// * IO and manifest errors from the fatal steps (1-5)
pub fn create_project(
    options: &ProjectOptions,
    template_dir: &Path,
    parent_dir: &Path,
    runner: &dyn CommandRunner,
) -> Result<CreatedProject> {
    let project_dir = parent_dir.join(&options.project_name);
    if project_dir.exists() {
        return Err(Error::ProjectExistsError {
            project_name: options.project_name.clone(),
        });
    }
    if !template_dir.exists() {
        return Err(Error::TemplateError(format!(
            "bundled template not found at '{}'",
            template_dir.display()
        )));
    }

    fs::create_dir_all(&project_dir)?;
    step_done("Project directory created");

    copy_tree(template_dir, &project_dir, &ExclusionRules::empty())?;
    step_done("Template files copied");

    patch_manifest_name(project_dir.join(MANIFEST_FILE), &options.project_name)?;
    step_done("package.json configured");

    fs::write(project_dir.join(ENV_FILE), ENV_FILE_CONTENT)?;
    step_done("Environment file created");

    let mut deps_installed = false;
    if options.install_deps {
        match runner.run(options.package_manager.command(), &["install"], &project_dir) {
            Ok(()) => {
                deps_installed = true;
                step_done("Dependencies installed");
            }
            Err(_) => step_warn(
                "Failed to install dependencies. You can install them manually.",
            ),
        }
    }

    if options.init_git {
        match init_git_repository(runner, &project_dir) {
            Ok(()) => step_done("Git repository initialized"),
            Err(_) => step_warn("Failed to initialize git. You can do this manually."),
        }
    }

    Ok(CreatedProject { project_dir, deps_installed })
}

/// Initializes a repository, stages everything, and creates the initial
/// commit. Any failing step fails the whole sequence; the caller treats
/// that as a soft failure.
fn init_git_repository(runner: &dyn CommandRunner, project_dir: &Path) -> Result<()> {
    runner.run("git", &["init"], project_dir)?;
    runner.run("git", &["add", "."], project_dir)?;
    runner.run("git", &["commit", "-m", INITIAL_COMMIT_MESSAGE], project_dir)?;
    Ok(())
}

/// Prints the success summary with next steps tailored to the chosen
/// package manager and whether dependencies were already installed.
pub fn print_summary(options: &ProjectOptions, created: &CreatedProject) {
    let pm = options.package_manager;

    println!("\n{}\n", style("✓ Project created successfully!").green().bold());
    println!("{}\n", style("Next steps:").cyan());
    println!("  cd {}", options.project_name);
    println!("  # Add your API keys to .env file");

    if !created.deps_installed {
        println!("  {} install", pm.command());
    }

    println!("  {} vercel dev", pm.exec_prefix());
    println!("{}", style("\n  Or for frontend-only development:").dim());
    println!("  {} run dev\n", pm.command());

    println!("{}", style("Documentation:").dim());
    println!("  https://x402-agent.vercel.app");
    println!("  https://docs.cdp.coinbase.com/embedded-wallets/\n");
}
