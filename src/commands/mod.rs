//! Command implementations for prompter.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared template-reading helper.

mod check;
mod preview;
mod tokens;

use crate::cli::Command;
use crate::error::{PrompterError, Result};
use std::io::Read;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Preview(args) => preview::cmd_preview(args),
        Command::Check(args) => check::cmd_check(args),
        Command::Tokens => tokens::cmd_tokens(),
    }
}

/// Read a template from a file path, or from stdin when the path is `-`.
pub(crate) fn read_template(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| PrompterError::UserError(format!("failed to read stdin: {}", e)))?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|e| {
        PrompterError::UserError(format!("failed to read template '{}': {}", path, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;

    #[test]
    fn read_template_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt.md");
        std::fs::write(&path, "Hello {{projectPath}}").unwrap();

        let text = read_template(path.to_str().unwrap()).unwrap();
        assert_eq!(text, "Hello {{projectPath}}");
    }

    #[test]
    fn read_template_missing_file_fails() {
        let result = read_template("/nonexistent/prompt.md");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("failed to read template"));
    }

    #[test]
    fn dispatch_routes_to_correct_handler() {
        // Tokens has no arguments and no failure modes, so it exercises
        // dispatch without filesystem setup.
        let result = dispatch(Command::Tokens);
        assert!(result.is_ok());
    }
}
