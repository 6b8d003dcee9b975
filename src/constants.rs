//! Common constants used throughout the application.

/// Manifest file whose `name` field is patched per generated project
pub const MANIFEST_FILE: &str = "package.json";

/// Generated environment file name
pub const ENV_FILE: &str = ".env";

/// Ignore file the packager falls back to writing into the template
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Project name used when prompts are skipped and no name was supplied
pub const DEFAULT_PROJECT_NAME: &str = "my-x402-agent";

/// Name of the bundled template directory, resolved next to the binary
pub const TEMPLATE_DIR_NAME: &str = "template";

/// Directory of the CLI package itself, relative to the parent project
/// root. Excluded during staging so the template never contains the tool.
pub const CLI_PACKAGE_DIR: &str = "create-x402-agent-app";

/// Paths excluded when snapshotting the parent project into the template:
/// build outputs, dependency caches, VCS and deployment metadata, OS
/// artifacts, local secrets, and every supported package manager's
/// lockfile.
pub const TEMPLATE_EXCLUDES: [&str; 11] = [
    "node_modules",
    "dist",
    ".git",
    ".vercel",
    ".DS_Store",
    ".env",
    "package-lock.json",
    "pnpm-lock.yaml",
    "yarn.lock",
    CLI_PACKAGE_DIR,
    ".claude",
];

/// Starter environment file written into every generated project.
/// Secrets stay empty; the x402 network settings carry Base defaults.
pub const ENV_FILE_CONTENT: &str = "# OpenAI
OPENAI_API_KEY=

# Coinbase Developer Platform
VITE_CDP_PROJECT_ID=
CDP_API_KEY_ID=
CDP_API_KEY_SECRET=

# x402 Network Configuration (defaults for Base network)
VITE_FACILITATOR_URL=https://x402.org/facilitator
VITE_NETWORK=base
VITE_USDC_CONTRACT_ADDRESS=0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913
";

/// Fallback ignore file written when the snapshot has none of its own
pub const DEFAULT_GITIGNORE: &str = "node_modules
dist
.DS_Store
server/public
vite.config.ts.*
*.tar.gz
.vercel
.env
";

/// Message for the initial commit created by the optional git step
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from create-x402-agent-app";
