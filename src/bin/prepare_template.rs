//! Packager entry point: snapshots the parent project into the bundled
//! template directory. Run by a maintainer before publishing; the
//! generator never invokes this.

use clap::Parser;
use console::style;
use std::path::PathBuf;

use create_x402_agent_app::{
    constants::{CLI_PACKAGE_DIR, TEMPLATE_DIR_NAME},
    error::{default_error_handler, Error, Result},
    packager::prepare_template,
};

/// Command-line arguments for `prepare-template`.
#[derive(Parser, Debug)]
#[command(
    name = "prepare-template",
    version,
    about = "Stage the parent project into the bundled template directory",
    long_about = None
)]
struct Args {
    /// Parent project root to snapshot (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Template directory to (re)create
    /// (defaults to <root>/create-x402-agent-app/template)
    #[arg(long, value_name = "DIR")]
    template: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let project_root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().map_err(Error::IoError)?,
    };
    let template_dir = args
        .template
        .unwrap_or_else(|| project_root.join(CLI_PACKAGE_DIR).join(TEMPLATE_DIR_NAME));

    println!("{}", style("🔧 Preparing template directory...").cyan());
    prepare_template(&project_root, &template_dir)?;

    println!("{}", style("✅ Template prepared successfully!").green());
    println!("Template location: {}", template_dir.display());
    Ok(())
}
