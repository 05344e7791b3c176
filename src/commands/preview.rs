//! Implementation of the `prompter preview` command.
//!
//! Expands a system prompt template against a substitution context and
//! prints the result, or writes it to a file with `--output`.

use crate::cli::PreviewArgs;
use crate::commands::read_template;
use crate::config::ContextConfig;
use crate::error::{PrompterError, Result};
use crate::prompt::{Placeholders, replace_placeholders};

/// Display string substituted for {{projectPath}} when no project path
/// is configured.
const NO_PROJECT_PATH: &str = "no project path";

/// Execute the `prompter preview` command.
pub fn cmd_preview(args: PreviewArgs) -> Result<()> {
    let text = read_template(&args.template)?;

    // A context file named explicitly must exist
    let config = match &args.context {
        Some(path) => ContextConfig::load(path)?.ok_or_else(|| {
            PrompterError::UserError(format!("context file '{}' not found", path.display()))
        })?,
        None => ContextConfig::default(),
    };

    let project_path = args
        .project_path
        .or(config.project_path)
        .unwrap_or_else(|| NO_PROJECT_PATH.to_string());

    let placeholders = Placeholders {
        project_path,
        allowed_commands: config.allowed_commands,
        knowledge_bases: config.knowledge_bases,
        bedrock_agents: config.bedrock_agents,
        flows: config.flows,
    };

    let rendered = replace_placeholders(&text, &placeholders);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered).map_err(|e| {
                PrompterError::UserError(format!(
                    "failed to write output '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        None => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}
