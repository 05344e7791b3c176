//! Implementation of the `prompter check` command.
//!
//! Lints a template: reports the recognized tokens it uses and fails when
//! it contains `{{...}}` sequences outside the known vocabulary. The
//! substitution engine leaves unknown tokens verbatim, so this is where
//! typos become visible.

use crate::cli::CheckArgs;
use crate::commands::read_template;
use crate::error::{PrompterError, Result};
use crate::prompt::{unknown_tokens, used_tokens};

/// Execute the `prompter check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let text = read_template(&args.template)?;

    let used = used_tokens(&text);
    let unknown = unknown_tokens(&text);

    if used.is_empty() {
        println!("No recognized tokens.");
    } else {
        println!("Recognized tokens ({}):", used.len());
        for token in &used {
            println!("  {}", token.pattern());
        }
    }

    if unknown.is_empty() {
        println!();
        println!("No unknown tokens.");
        return Ok(());
    }

    println!();
    println!("Unknown tokens ({}):", unknown.len());
    for name in &unknown {
        println!("  {{{{{}}}}}", name);
    }
    println!();
    println!("Unknown tokens are left verbatim by `prompter preview`.");
    println!("Run `prompter tokens` to list the recognized vocabulary.");

    Err(PrompterError::CheckError(format!(
        "{} unknown token(s): {}",
        unknown.len(),
        unknown.join(", ")
    )))
}
