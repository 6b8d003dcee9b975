//! User input and interaction handling.
//! The interactive questions sit behind the `Prompter` trait so option
//! collection can be driven by a pre-scripted fake in tests instead of a
//! terminal.

use dialoguer::{Confirm, Input, Select};

use crate::config::{validate_project_name, PackageManager};
use crate::error::{Error, Result};

/// Capability for asking the user the generator's questions.
pub trait Prompter {
    /// Asks for the project name with inline slug validation.
    fn project_name(&self, initial: &str) -> Result<String>;

    /// Asks the user to pick a package manager; `choices` is offered in
    /// order and the first entry is the default.
    fn package_manager(&self, choices: &[PackageManager]) -> Result<PackageManager>;

    /// Asks a yes/no question with the given default.
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

/// Prompter backed by dialoguer's terminal widgets.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn project_name(&self, initial: &str) -> Result<String> {
        Input::new()
            .with_prompt("What is your project named?")
            .default(initial.to_string())
            .validate_with(|input: &String| validate_project_name(input))
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn package_manager(&self, choices: &[PackageManager]) -> Result<PackageManager> {
        let labels: Vec<&str> = choices.iter().map(|pm| pm.command()).collect();
        let selection = Select::new()
            .with_prompt("Which package manager do you want to use?")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))?;
        Ok(choices[selection])
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
