use tracing::{debug, info, warn};

use crate::config::HistoryConfig;
use crate::error::AppResult;
use crate::host::{EditorHost, RevealPolicy};
use crate::position::{CaretEvent, Position};
use crate::store::{StateStore, load_snapshot, save_snapshot};

use super::state::{Direction, HistorySnapshot, HistoryState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementOutcome {
    Ignored,
    /// Small movement: only the last position moved.
    Updated,
    /// Significant movement: the previous position went onto the back stack.
    Recorded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Navigated(Position),
    /// History is exhausted; the caller defers to the host's own navigation.
    UseHostFallback,
}

pub struct PositionHistoryTracker {
    state: HistoryState,
    min_line_distance: u32,
    reveal: RevealPolicy,
    navigating: bool,
    store: Option<Box<dyn StateStore>>,
}

impl Default for PositionHistoryTracker {
    fn default() -> Self {
        Self::new(&HistoryConfig::default())
    }
}

impl PositionHistoryTracker {
    pub fn new(config: &HistoryConfig) -> Self {
        Self {
            state: HistoryState::with_capacity(config.max_entries),
            min_line_distance: config.min_line_distance.max(1),
            reveal: config.reveal,
            navigating: false,
            store: None,
        }
    }

    /// Restores the history persisted in `store` and keeps saving into it.
    pub fn with_store(config: &HistoryConfig, store: Box<dyn StateStore>) -> Self {
        let mut tracker = Self::new(config);
        let snapshot = load_snapshot(&*store);
        tracker.state = HistoryState::from_snapshot(snapshot, config.max_entries);
        tracker.store = Some(store);
        debug!(
            back = tracker.state.back_stack().len(),
            forward = tracker.state.forward_stack().len(),
            "restored cursor history"
        );
        tracker
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        self.state.snapshot()
    }

    pub fn is_navigating(&self) -> bool {
        self.navigating
    }

    pub fn on_movement(&mut self, event: CaretEvent) -> MovementOutcome {
        if self.navigating || event.is_selection() {
            return MovementOutcome::Ignored;
        }

        let candidate = event.position;
        let small = match self.state.last_position() {
            Some(last) if *last == candidate => return MovementOutcome::Ignored,
            Some(last) => {
                last.same_locator(&candidate)
                    && last.line_distance(&candidate) < self.min_line_distance
            }
            None => false,
        };

        let outcome = if small {
            self.state.set_last_position(candidate);
            MovementOutcome::Updated
        } else {
            debug!(position = %candidate, "recording cursor jump");
            self.state.record(candidate);
            MovementOutcome::Recorded
        };
        self.persist();
        outcome
    }

    pub fn go_back(&mut self, host: &mut dyn EditorHost) -> AppResult<NavigationOutcome> {
        self.navigate(host, Direction::Back)
    }

    pub fn go_forward(&mut self, host: &mut dyn EditorHost) -> AppResult<NavigationOutcome> {
        self.navigate(host, Direction::Forward)
    }

    pub fn clear(&mut self) {
        self.state.clear();
        self.persist();
    }

    /// Writes a final snapshot and resets the in-memory history.
    pub fn shutdown(&mut self) {
        self.persist();
        self.state = HistoryState::with_capacity(self.state.capacity());
    }

    fn navigate(
        &mut self,
        host: &mut dyn EditorHost,
        direction: Direction,
    ) -> AppResult<NavigationOutcome> {
        if self.state.stack_len(direction) == 0 {
            info!(?direction, "cursor history empty, using host navigation");
            return Ok(NavigationOutcome::UseHostFallback);
        }

        self.navigating = true;
        let result = self.navigate_guarded(host, direction);
        self.navigating = false;
        self.persist();
        result
    }

    fn navigate_guarded(
        &mut self,
        host: &mut dyn EditorHost,
        direction: Direction,
    ) -> AppResult<NavigationOutcome> {
        while let Some(target) = self.state.pop(direction) {
            if !host.resource_exists(&target.locator)? {
                debug!(position = %target, "skipping stale history entry");
                continue;
            }

            let echoed = host.reveal(&target, self.reveal)?;
            for event in echoed {
                self.on_movement(event);
            }

            if let Some(current) = self.state.last_position().cloned() {
                self.state.push(direction.opposite(), current);
            }
            self.state.set_last_position(target.clone());
            return Ok(NavigationOutcome::Navigated(target));
        }

        info!(?direction, "no live history entries left, using host navigation");
        Ok(NavigationOutcome::UseHostFallback)
    }

    fn persist(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        if let Err(err) = save_snapshot(&mut **store, &self.state.snapshot()) {
            warn!(error = %err, "failed to persist cursor history");
        }
    }
}
