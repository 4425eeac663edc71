//! CLI argument parsing and query construction

pub mod args;
pub mod flags;
pub mod query;

// Re-exports
pub use args::{Args, CommandName, LogFormat};
pub use flags::{has_help_flag, parse_flags, require_flag, Flag, FlagValue, Flags};
pub use query::{build_query, parse_boolean, QueryParam, Transform};
