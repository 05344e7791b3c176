//! The recognized placeholder token vocabulary.
//!
//! Tokens are written in templates as `{{identifier}}` with no interior
//! whitespace. The set is closed and known at build time; matching is
//! case-sensitive and exact.

use regex::Regex;
use std::sync::LazyLock;

/// Regex matching candidate `{{identifier}}` sequences in a template.
///
/// This matches any identifier-shaped sequence, not just recognized tokens,
/// so scanning can report unknown tokens too. The shape is deliberately
/// wider than the vocabulary (underscores and hyphens allowed) so that
/// near-miss spellings like `{{project_path}}` are caught by `check`
/// instead of slipping through unmatched. Substitution is unaffected:
/// only exact vocabulary names are replaced, everything else stays verbatim.
pub(super) static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_-]*)\}\}").expect("Invalid token regex")
});

/// A placeholder token recognized inside a system prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `{{projectPath}}` - the active project path.
    ProjectPath,
    /// `{{date}}` - the current date, formatted `YYYY-MM-DD`.
    Date,
    /// `{{allowedCommands}}` - permitted command patterns, as a JSON array.
    AllowedCommands,
    /// `{{knowledgeBases}}` - available knowledge bases, as a JSON array.
    KnowledgeBases,
    /// `{{bedrockAgents}}` - external Bedrock agents, as a JSON array.
    BedrockAgents,
    /// `{{flows}}` - flow definitions, as a JSON array.
    Flows,
}

impl Token {
    /// All recognized tokens, in display order.
    pub const ALL: [Token; 6] = [
        Token::ProjectPath,
        Token::Date,
        Token::AllowedCommands,
        Token::KnowledgeBases,
        Token::BedrockAgents,
        Token::Flows,
    ];

    /// The token identifier as written between the braces.
    pub fn name(self) -> &'static str {
        match self {
            Token::ProjectPath => "projectPath",
            Token::Date => "date",
            Token::AllowedCommands => "allowedCommands",
            Token::KnowledgeBases => "knowledgeBases",
            Token::BedrockAgents => "bedrockAgents",
            Token::Flows => "flows",
        }
    }

    /// The full literal pattern as written in templates.
    pub fn pattern(self) -> &'static str {
        match self {
            Token::ProjectPath => "{{projectPath}}",
            Token::Date => "{{date}}",
            Token::AllowedCommands => "{{allowedCommands}}",
            Token::KnowledgeBases => "{{knowledgeBases}}",
            Token::BedrockAgents => "{{bedrockAgents}}",
            Token::Flows => "{{flows}}",
        }
    }

    /// One-line description of the token's expansion, for help output.
    pub fn description(self) -> &'static str {
        match self {
            Token::ProjectPath => "Path of the active project",
            Token::Date => "Current date (YYYY-MM-DD)",
            Token::AllowedCommands => "Permitted command patterns (JSON array)",
            Token::KnowledgeBases => "Available knowledge bases (JSON array)",
            Token::BedrockAgents => "External Bedrock agents (JSON array)",
            Token::Flows => "Flow definitions (JSON array)",
        }
    }

    /// Look up a token by its identifier. Case-sensitive exact match only.
    pub fn from_name(name: &str) -> Option<Token> {
        Token::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// Recognized tokens referenced by a template.
///
/// Returns tokens in first-appearance order, deduplicated.
pub fn used_tokens(text: &str) -> Vec<Token> {
    let mut found = Vec::new();
    for caps in TOKEN_REGEX.captures_iter(text) {
        if let Some(token) = Token::from_name(&caps[1])
            && !found.contains(&token)
        {
            found.push(token);
        }
    }
    found
}

/// `{{identifier}}` sequences in a template that are not recognized tokens.
///
/// Returns identifiers in first-appearance order, deduplicated.
pub fn unknown_tokens(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for caps in TOKEN_REGEX.captures_iter(text) {
        let name = &caps[1];
        if Token::from_name(name).is_none() && !found.iter().any(|n| n == name) {
            found.push(name.to_string());
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips() {
        for token in Token::ALL {
            assert_eq!(Token::from_name(token.name()), Some(token));
        }
    }

    #[test]
    fn test_pattern_wraps_name() {
        for token in Token::ALL {
            assert_eq!(token.pattern(), format!("{{{{{}}}}}", token.name()));
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Token::from_name("projectPath"), Some(Token::ProjectPath));
        assert_eq!(Token::from_name("ProjectPath"), None);
        assert_eq!(Token::from_name("DATE"), None);
        assert_eq!(Token::from_name("unknown"), None);
    }

    #[test]
    fn test_used_tokens_in_order() {
        let text = "On {{date}}, in {{projectPath}}, run {{allowedCommands}}.";
        assert_eq!(
            used_tokens(text),
            vec![Token::Date, Token::ProjectPath, Token::AllowedCommands]
        );
    }

    #[test]
    fn test_used_tokens_deduplicates() {
        let text = "{{date}} and {{date}} and {{projectPath}}";
        assert_eq!(used_tokens(text), vec![Token::Date, Token::ProjectPath]);
    }

    #[test]
    fn test_used_tokens_none() {
        assert!(used_tokens("plain text").is_empty());
        assert!(used_tokens("").is_empty());
    }

    #[test]
    fn test_unknown_tokens() {
        let text = "{{date}} {{foo}} {{bar}} {{foo}}";
        assert_eq!(unknown_tokens(text), vec!["foo", "bar"]);
    }

    #[test]
    fn test_unknown_tokens_ignores_whitespace_variants() {
        // `{{ date }}` is not identifier-shaped, so it is neither used nor
        // reported as unknown; the engine leaves it verbatim.
        assert!(unknown_tokens("{{ date }}").is_empty());
        assert!(used_tokens("{{ date }}").is_empty());
    }

    #[test]
    fn test_unknown_tokens_case_mismatch_is_unknown() {
        assert_eq!(unknown_tokens("{{Date}}"), vec!["Date"]);
    }

    #[test]
    fn test_unknown_tokens_snake_case_typo_is_unknown() {
        assert_eq!(unknown_tokens("{{project_path}}"), vec!["project_path"]);
        assert!(used_tokens("{{project_path}}").is_empty());
    }

    #[test]
    fn test_unknown_tokens_hyphenated_typo_is_unknown() {
        assert_eq!(
            unknown_tokens("{{allowed-commands}} {{date}}"),
            vec!["allowed-commands"]
        );
    }
}
