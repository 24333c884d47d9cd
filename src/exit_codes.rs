//! Process exit codes shared by every subcommand.

/// Nothing to change, or every change was written
pub const SUCCESS: i32 = 0;

/// `check` found files that would change, or a rule failed on some input
pub const CHANGES_NEEDED: i32 = 1;

/// Bad arguments, an unreadable or unparseable configuration, or a missing path
pub const TOOL_ERROR: i32 = 2;
