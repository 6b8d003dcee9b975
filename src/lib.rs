//! create-x402-agent-app scaffolds a new x402 AI agent application from
//! the bundled template: it collects project options, copies the template
//! tree, patches the manifest, writes a starter environment file, and
//! optionally installs dependencies and initializes git.
//!
//! The companion `prepare-template` binary produces the bundled template
//! from a parent project tree (maintainer-only, run before publishing).

/// Command-line interface for the generator binary
pub mod cli;

/// Project options, package-manager enum, and name validation
pub mod config;

/// Fixed data: file names, exclusion list, environment-file template
pub mod constants;

/// Recursive filtered copy shared by the packager and the generator
pub mod copier;

/// Error types and handling
pub mod error;

/// Exclusion rule set used to filter the template snapshot
pub mod exclude;

/// Project materialization: copy, patch, write, install, git init
pub mod generator;

/// Reading and rewriting the project manifest (package.json)
pub mod manifest;

/// Template staging: snapshots the parent project into the template dir
pub mod packager;

/// Turns CLI arguments and prompt answers into immutable project options
pub mod parser;

/// User input and interaction handling
pub mod prompt;

/// Subprocess invocation behind a narrow success-or-failure capability
pub mod runner;
