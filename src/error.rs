//! Error types for the prompter CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for prompter operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum PrompterError {
    /// User provided invalid arguments or a file could not be read.
    #[error("{0}")]
    UserError(String),

    /// A template check found unknown placeholder tokens.
    #[error("Check failed: {0}")]
    CheckError(String),
}

impl PrompterError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrompterError::UserError(_) => exit_codes::USER_ERROR,
            PrompterError::CheckError(_) => exit_codes::CHECK_FAILURE,
        }
    }
}

/// Result type alias for prompter operations.
pub type Result<T> = std::result::Result<T, PrompterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PrompterError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn check_error_has_correct_exit_code() {
        let err = PrompterError::CheckError("unknown tokens".to_string());
        assert_eq!(err.exit_code(), exit_codes::CHECK_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PrompterError::UserError("template 'missing.md' not found".to_string());
        assert_eq!(err.to_string(), "template 'missing.md' not found");

        let err = PrompterError::CheckError("2 unknown token(s)".to_string());
        assert_eq!(err.to_string(), "Check failed: 2 unknown token(s)");
    }
}
