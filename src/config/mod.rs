//! Substitution context configuration.
//!
//! This module defines the context file format, which supplies the values
//! substituted into system prompt templates.
//!
//! # File Format
//!
//! ```yaml
//! projectPath: /work/my-project
//!
//! allowedCommands:
//!   - pattern: "npm *"
//!     description: "npm package commands"
//!
//! knowledgeBases:
//!   - knowledgeBaseId: KB123456
//!     description: "Product documentation"
//!
//! bedrockAgents:
//!   - agentId: AGENT123
//!     aliasId: ALIAS456
//!     description: "Code interpreter agent"
//!
//! flows:
//!   - flowIdentifier: FLOW123
//!     flowAliasIdentifier: FALIAS456
//!     description: "Data pipeline flow"
//! ```
//!
//! JSON context files with the same shape are also accepted. Field names
//! are camelCase on the wire so the arrays serialize into templates in
//! their canonical JSON form.

use crate::error::{PrompterError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A shell command pattern the agent is permitted to execute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandConfig {
    /// Command pattern (e.g. `npm *`).
    pub pattern: String,

    /// Human-readable description of what the pattern allows.
    #[serde(default)]
    pub description: String,
}

/// A knowledge base the agent can retrieve from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBase {
    /// Knowledge base identifier.
    pub knowledge_base_id: String,

    /// Human-readable description of the knowledge base contents.
    #[serde(default)]
    pub description: String,
}

/// An external Bedrock agent the prompt can delegate to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedrockAgent {
    /// Agent identifier.
    pub agent_id: String,

    /// Agent alias identifier.
    pub alias_id: String,

    /// Human-readable description of the agent's capabilities.
    #[serde(default)]
    pub description: String,
}

/// A flow definition the agent can invoke.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowConfig {
    /// Flow identifier.
    pub flow_identifier: String,

    /// Flow alias identifier.
    pub flow_alias_identifier: String,

    /// Human-readable description of what the flow does.
    #[serde(default)]
    pub description: String,
}

/// Substitution context loaded from a context file.
///
/// Every field is optional; missing sequences default to empty so a partial
/// context degrades gracefully rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContextConfig {
    /// Project path substituted for `{{projectPath}}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_path: Option<String>,

    /// Commands substituted for `{{allowedCommands}}`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_commands: Vec<CommandConfig>,

    /// Knowledge bases substituted for `{{knowledgeBases}}`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub knowledge_bases: Vec<KnowledgeBase>,

    /// Bedrock agents substituted for `{{bedrockAgents}}`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bedrock_agents: Vec<BedrockAgent>,

    /// Flows substituted for `{{flows}}`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flows: Vec<FlowConfig>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl ContextConfig {
    /// Load a context config from a YAML or JSON file.
    ///
    /// The parser is chosen by file extension (`.json` for JSON, anything
    /// else for YAML). Returns `Ok(None)` if the file does not exist.
    /// Returns `Err` if the file exists but cannot be parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            PrompterError::UserError(format!(
                "failed to read context file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };
        Ok(Some(config))
    }

    /// Parse a context config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ContextConfig = serde_yaml::from_str(yaml)
            .map_err(|e| PrompterError::UserError(format!("failed to parse context file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse a context config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ContextConfig = serde_json::from_str(json)
            .map_err(|e| PrompterError::UserError(format!("failed to parse context file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the context configuration.
    ///
    /// Validation rules:
    /// - Command patterns must not be empty
    /// - Knowledge base, agent, and flow identifiers must not be empty
    pub fn validate(&self) -> Result<()> {
        for (i, cmd) in self.allowed_commands.iter().enumerate() {
            if cmd.pattern.is_empty() {
                return Err(PrompterError::UserError(format!(
                    "context validation failed: allowedCommands[{}] has empty pattern",
                    i
                )));
            }
        }

        for (i, kb) in self.knowledge_bases.iter().enumerate() {
            if kb.knowledge_base_id.is_empty() {
                return Err(PrompterError::UserError(format!(
                    "context validation failed: knowledgeBases[{}] has empty knowledgeBaseId",
                    i
                )));
            }
        }

        for (i, agent) in self.bedrock_agents.iter().enumerate() {
            if agent.agent_id.is_empty() {
                return Err(PrompterError::UserError(format!(
                    "context validation failed: bedrockAgents[{}] has empty agentId",
                    i
                )));
            }
            if agent.alias_id.is_empty() {
                return Err(PrompterError::UserError(format!(
                    "context validation failed: bedrockAgents[{}] has empty aliasId",
                    i
                )));
            }
        }

        for (i, flow) in self.flows.iter().enumerate() {
            if flow.flow_identifier.is_empty() {
                return Err(PrompterError::UserError(format!(
                    "context validation failed: flows[{}] has empty flowIdentifier",
                    i
                )));
            }
        }

        Ok(())
    }
}
