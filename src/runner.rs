//! Subprocess invocation behind a narrow capability.
//! The generator only needs "run this command in that directory, tell me
//! whether it succeeded", so tests can substitute a recording fake and
//! never touch the real filesystem or network.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Runs an external command to completion in a working directory.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()>;
}

/// Production runner using `std::process::Command` with all stdio
/// silenced, matching the quiet install/git steps of the generator.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(Error::IoError)?;

        if !status.success() {
            return Err(Error::CommandError(format!(
                "'{}' exited with {}",
                program, status
            )));
        }
        Ok(())
    }
}
