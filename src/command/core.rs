use crate::error::AppResult;
use crate::history::{Direction, MovementOutcome, NavigationOutcome, PositionHistoryTracker};
use crate::host::EditorHost;
use crate::position::CaretEvent;

use super::types::CommandOutcome;

pub const HISTORY_CLEARED_NOTICE: &str = "Cursor history cleared";

pub(crate) fn history_step(
    tracker: &mut PositionHistoryTracker,
    host: &mut dyn EditorHost,
    direction: Direction,
) -> AppResult<(CommandOutcome, String)> {
    let outcome = match direction {
        Direction::Back => tracker.go_back(host)?,
        Direction::Forward => tracker.go_forward(host)?,
    };

    match outcome {
        NavigationOutcome::Navigated(target) => {
            Ok((CommandOutcome::Applied, format!("history -> {target}")))
        }
        NavigationOutcome::UseHostFallback => {
            match direction {
                Direction::Back => host.navigate_back_native()?,
                Direction::Forward => host.navigate_forward_native()?,
            }
            Ok((
                CommandOutcome::HostFallback,
                "history empty, used editor navigation".to_string(),
            ))
        }
    }
}

pub(crate) fn history_clear(
    tracker: &mut PositionHistoryTracker,
    host: &mut dyn EditorHost,
) -> (CommandOutcome, String) {
    tracker.clear();
    host.notify(HISTORY_CLEARED_NOTICE);
    (CommandOutcome::Applied, HISTORY_CLEARED_NOTICE.to_string())
}

pub(crate) fn caret_moved(
    tracker: &mut PositionHistoryTracker,
    host: &mut dyn EditorHost,
    event: CaretEvent,
) -> (CommandOutcome, String) {
    host.caret_moved(&event);
    let position = event.position.clone();
    match tracker.on_movement(event) {
        MovementOutcome::Recorded => (CommandOutcome::Applied, format!("recorded {position}")),
        MovementOutcome::Updated => (CommandOutcome::Applied, format!("at {position}")),
        MovementOutcome::Ignored => (CommandOutcome::Noop, format!("ignored {position}")),
    }
}
