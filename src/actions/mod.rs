//! Menu actions.
//!
//! - [`registry`] - the static, ordered list of actions
//! - [`filter`] - which actions the main menu shows
//! - [`handlers`] - what each action does

pub mod filter;
pub mod handlers;
pub mod registry;

pub use filter::{resolve_exceptions, visible_actions, VisibleActions};
pub use registry::{Action, ActionContext, ActionId, ActionRegistry, Handler, BUILTIN_ACTIONS};
