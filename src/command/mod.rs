mod core;
mod dispatch;
mod parse;
mod spec;
mod types;

pub use self::core::HISTORY_CLEARED_NOTICE;
pub use dispatch::{CommandDispatchResult, dispatch};
pub use parse::parse_command_text;
pub use spec::{command_registry, find_command_spec};
pub use types::{ActionId, ArgKind, ArgSpec, Command, CommandOutcome, CommandSpec};
