//! Exit code constants for the prompter CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files, invalid context)
//! - 2: Check failure (template contains unknown tokens)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or invalid context config.
pub const USER_ERROR: i32 = 1;

/// Check failure: the template references unknown placeholder tokens.
pub const CHECK_FAILURE: i32 = 2;
