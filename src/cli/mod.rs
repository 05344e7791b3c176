//! CLI argument parsing for prompter.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Prompter: author, lint, and preview agent system prompts.
///
/// System prompt templates are free-form text that may contain recognized
/// `{{token}}` placeholders. Prompter expands them from a substitution
/// context (project path, allowed commands, knowledge bases, Bedrock
/// agents, flows) so you can see exactly what an agent would receive.
#[derive(Parser, Debug)]
#[command(name = "prompter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for prompter.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand a template and print the preview.
    ///
    /// Replaces every recognized `{{token}}` placeholder with its value
    /// from the substitution context. Unknown tokens are left verbatim.
    Preview(PreviewArgs),

    /// Lint a template for unknown placeholder tokens.
    ///
    /// Reports the recognized tokens a template uses and fails when it
    /// contains `{{...}}` sequences outside the known vocabulary.
    Check(CheckArgs),

    /// List the recognized placeholder tokens.
    ///
    /// Shows each token with a short description of its expansion.
    Tokens,
}

/// Arguments for the `preview` command.
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Path to the template file, or `-` to read from stdin.
    pub template: String,

    /// Path to the substitution context file (YAML or JSON).
    #[arg(short, long)]
    pub context: Option<PathBuf>,

    /// Project path substituted for {{projectPath}} (overrides the context file).
    #[arg(long)]
    pub project_path: Option<String>,

    /// Write the expanded prompt to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the template file, or `-` to read from stdin.
    pub template: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
