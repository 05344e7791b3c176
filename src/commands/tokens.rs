//! Implementation of the `prompter tokens` command.
//!
//! Lists the recognized placeholder vocabulary with a short description
//! of each token's expansion.

use crate::error::Result;
use crate::prompt::Token;

/// Execute the `prompter tokens` command.
pub fn cmd_tokens() -> Result<()> {
    let width = Token::ALL
        .iter()
        .map(|t| t.pattern().len())
        .max()
        .unwrap_or(0);

    println!("Recognized placeholder tokens:");
    println!();
    for token in Token::ALL {
        println!("  {:<width$}  {}", token.pattern(), token.description());
    }
    println!();
    println!("Tokens are matched literally and case-sensitively; unknown");
    println!("{{{{...}}}} sequences are left unchanged in the preview.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_succeeds() {
        assert!(cmd_tokens().is_ok());
    }

    #[test]
    fn test_vocabulary_is_complete() {
        // The display order covers the full closed set
        let names: Vec<&str> = Token::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec![
                "projectPath",
                "date",
                "allowedCommands",
                "knowledgeBases",
                "bedrockAgents",
                "flows",
            ]
        );
    }
}
