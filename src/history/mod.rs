pub mod state;
pub mod tracker;

pub use state::{Direction, HistorySnapshot, HistoryState};
pub use tracker::{MovementOutcome, NavigationOutcome, PositionHistoryTracker};
