//! Prompt template subsystem.
//!
//! This module provides the placeholder machinery for system prompt templates:
//!
//! - **Tokens**: the closed vocabulary of recognized `{{token}}` placeholders
//!   and template scanning helpers
//! - **Placeholder**: pure substitution of tokens with context values
//!
//! # Design Philosophy
//!
//! Substitution is total: it never fails, and unknown `{{...}}` sequences
//! pass through verbatim rather than erroring. Typos are surfaced by the
//! separate `check` command instead, so preview rendering can never break
//! while the author is typing.

mod placeholder;
mod tokens;

// Re-export public API
pub use placeholder::{Placeholders, replace_placeholders};
pub use tokens::{Token, unknown_tokens, used_tokens};
