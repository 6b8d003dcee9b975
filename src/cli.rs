//! Command-line interface implementation for the generator binary.
//! Provides argument parsing using clap.

use clap::Parser;

/// Command-line arguments for `create-x402-agent-app`.
#[derive(Parser, Debug)]
#[command(
    name = "create-x402-agent-app",
    version,
    about = "Create a new x402 AI Agent application",
    long_about = None
)]
pub struct Args {
    /// Name of your project
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Skip prompts and use defaults
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
