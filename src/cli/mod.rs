//! Command-line interface for brewmenu.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`session`] - Turns parsed arguments into a running menu

pub mod args;
pub mod session;

pub use args::Cli;
pub use session::MenuSession;
