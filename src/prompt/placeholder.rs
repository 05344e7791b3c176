//! Placeholder substitution for system prompt templates.
//!
//! This module implements the expansion of `{{token}}` placeholders in a
//! template against a set of contextual values. It is used to render the
//! read-only preview of a system prompt exactly as an agent would receive it.
//!
//! # Semantics
//!
//! - Matching is literal and case-sensitive: `{{date}}` matches, `{{ date }}`
//!   and `{{Date}}` do not.
//! - All occurrences of a token are replaced.
//! - Expansion is single-pass: substituted values are never rescanned, so a
//!   value containing `{{date}}` text stays literal in the output.
//! - Unknown `{{foo}}` sequences pass through verbatim.
//! - `{{date}}` is derived from the wall clock (UTC) at call time; callers
//!   cannot override it.
//!
//! # Failure Semantics
//!
//! Substitution is total: it never fails and never mutates its inputs.
//! Missing optional context sequences degrade to empty arrays (`[]`).

use crate::config::{BedrockAgent, CommandConfig, FlowConfig, KnowledgeBase};
use crate::prompt::tokens::{TOKEN_REGEX, Token};
use chrono::Utc;
use serde::Serialize;

/// Contextual values substituted into a template.
#[derive(Debug, Clone, Default)]
pub struct Placeholders {
    /// Value for `{{projectPath}}`. Callers supply a fallback display
    /// string (e.g. "no project path") when no project is configured.
    pub project_path: String,

    /// Values for `{{allowedCommands}}`.
    pub allowed_commands: Vec<CommandConfig>,

    /// Values for `{{knowledgeBases}}`.
    pub knowledge_bases: Vec<KnowledgeBase>,

    /// Values for `{{bedrockAgents}}`.
    pub bedrock_agents: Vec<BedrockAgent>,

    /// Values for `{{flows}}`.
    pub flows: Vec<FlowConfig>,
}

/// Expand every recognized `{{token}}` in `text` with its context value.
///
/// Returns a new string; the template is never mutated. An empty template
/// short-circuits to an empty string.
pub fn replace_placeholders(text: &str, placeholders: &Placeholders) -> String {
    if text.is_empty() {
        return String::new();
    }

    let date = Utc::now().format("%Y-%m-%d").to_string();

    TOKEN_REGEX
        .replace_all(text, |caps: &regex::Captures| {
            match Token::from_name(&caps[1]) {
                Some(Token::ProjectPath) => placeholders.project_path.clone(),
                Some(Token::Date) => date.clone(),
                Some(Token::AllowedCommands) => to_json(&placeholders.allowed_commands),
                Some(Token::KnowledgeBases) => to_json(&placeholders.knowledge_bases),
                Some(Token::BedrockAgents) => to_json(&placeholders.bedrock_agents),
                Some(Token::Flows) => to_json(&placeholders.flows),
                // Unknown token: keep the original text verbatim
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Compact JSON serialization of a context sequence.
///
/// These records are plain string structs, so serialization cannot fail in
/// practice; substitution stays total by falling back to an empty array.
fn to_json<T: Serialize>(items: &[T]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| String::from("[]"))
}
