//! Process execution and PATH lookup.

pub mod command;
pub mod path;

pub use command::{display_command, run, run_shell, CommandOptions, CommandResult};
pub use path::{find_on_path, is_executable, parse_system_path, resolve_tool_path};
