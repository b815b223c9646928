use crate::error::AppResult;
use crate::history::{Direction, PositionHistoryTracker};
use crate::host::EditorHost;
use crate::position::CaretEvent;

use super::core::{caret_moved, history_clear, history_step};
use super::types::{ActionId, Command, CommandOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDispatchResult {
    pub id: ActionId,
    pub outcome: CommandOutcome,
    pub message: String,
}

pub fn dispatch(
    tracker: &mut PositionHistoryTracker,
    host: &mut dyn EditorHost,
    cmd: Command,
) -> AppResult<CommandDispatchResult> {
    let id = cmd.action_id();
    let (outcome, message) = match cmd {
        Command::HistoryBack => history_step(tracker, host, Direction::Back)?,
        Command::HistoryForward => history_step(tracker, host, Direction::Forward)?,
        Command::HistoryClear => history_clear(tracker, host),
        Command::Caret { position } => caret_moved(tracker, host, CaretEvent::caret(position)),
        Command::Select { position } => caret_moved(tracker, host, CaretEvent::range(position)),
    };

    Ok(CommandDispatchResult {
        id,
        outcome,
        message,
    })
}
