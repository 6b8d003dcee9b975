//! Generator entry point: parses arguments, collects project options,
//! resolves the bundled template directory, and materializes the
//! project.

use console::style;
use std::path::{Path, PathBuf};

use create_x402_agent_app::{
    cli::{get_args, Args},
    constants::TEMPLATE_DIR_NAME,
    error::{default_error_handler, Error, Result},
    generator::{create_project, print_summary},
    parser::get_options,
    prompt::DialoguerPrompter,
    runner::SystemRunner,
};

fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    println!("\n{}\n", style("🤖 Create x402 Agent App").cyan().bold());
    println!("{}\n", style("The missing payment layer for AI agents").dim());

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Locates the bundled template directory.
///
/// The `X402_TEMPLATE_DIR` environment variable overrides the default of
/// `template/` next to the installed binary. Resolution happens here so
/// the library functions take the path as an explicit parameter.
fn resolve_template_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("X402_TEMPLATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let exe = std::env::current_exe().map_err(Error::IoError)?;
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(exe_dir.join(TEMPLATE_DIR_NAME))
}

fn run(args: Args) -> Result<()> {
    let prompter = DialoguerPrompter::new();
    let options = get_options(args, &prompter)?;

    let template_dir = resolve_template_dir()?;
    let parent_dir = std::env::current_dir().map_err(Error::IoError)?;

    let created = create_project(&options, &template_dir, &parent_dir, &SystemRunner)?;
    print_summary(&options, &created);
    Ok(())
}
