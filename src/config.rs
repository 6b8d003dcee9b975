//! Project options collected once per run, the supported package
//! managers, and project-name validation.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Supported JavaScript package managers, in prompt order.
/// The first entry is the default for both the interactive select and
/// the `--yes` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// All managers, in the order they are offered to the user.
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Pnpm, PackageManager::Yarn];

    /// The executable invoked for `<manager> install`.
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Prefix used in the summary to run project-local binaries
    /// (`npx vercel dev` for npm, the manager itself otherwise).
    pub fn exec_prefix(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npx",
            other => other.command(),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// The four project options, built once from CLI flags and/or prompt
/// answers and immutable for the rest of the run.
#[derive(Debug, Clone)]
pub struct ProjectOptions {
    pub project_name: String,
    pub package_manager: PackageManager,
    pub install_deps: bool,
    pub init_git: bool,
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9-_]+$").unwrap())
}

/// Validates a project name as a lowercase slug.
///
/// Returns the user-facing rejection message so the prompt can surface
/// it inline; the empty string and anything outside `[a-z0-9-_]` are
/// rejected.
pub fn validate_project_name(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("Project name is required".to_string());
    }
    if !name_pattern().is_match(name) {
        return Err(
            "Project name can only contain lowercase letters, numbers, hyphens, and underscores"
                .to_string(),
        );
    }
    Ok(())
}
