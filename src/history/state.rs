use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::MAX_HISTORY_SIZE;
use crate::position::Position;

/// Plain data copy of the history, newest entries last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub back_stack: Vec<Position>,
    pub forward_stack: Vec<Position>,
    pub last_position: Option<Position>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Self::Back => Self::Forward,
            Self::Forward => Self::Back,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoryState {
    back_stack: VecDeque<Position>,
    forward_stack: VecDeque<Position>,
    last_position: Option<Position>,
    capacity: usize,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY_SIZE)
    }
}

impl HistoryState {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            back_stack: VecDeque::new(),
            forward_stack: VecDeque::new(),
            last_position: None,
            capacity: capacity.max(1),
        }
    }

    /// Stacks longer than `capacity` keep their newest entries.
    pub fn from_snapshot(snapshot: HistorySnapshot, capacity: usize) -> Self {
        let mut state = Self::with_capacity(capacity);
        for position in snapshot.back_stack {
            state.push(Direction::Back, position);
        }
        for position in snapshot.forward_stack {
            state.push(Direction::Forward, position);
        }
        state.last_position = snapshot.last_position;
        state
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            back_stack: self.back_stack.iter().cloned().collect(),
            forward_stack: self.forward_stack.iter().cloned().collect(),
            last_position: self.last_position.clone(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn back_stack(&self) -> &VecDeque<Position> {
        &self.back_stack
    }

    pub fn forward_stack(&self) -> &VecDeque<Position> {
        &self.forward_stack
    }

    pub fn last_position(&self) -> Option<&Position> {
        self.last_position.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.back_stack.is_empty() && self.forward_stack.is_empty() && self.last_position.is_none()
    }

    pub(crate) fn set_last_position(&mut self, position: Position) {
        self.last_position = Some(position);
    }

    pub(crate) fn stack_len(&self, direction: Direction) -> usize {
        self.stack(direction).len()
    }

    pub(crate) fn push(&mut self, direction: Direction, position: Position) {
        let capacity = self.capacity;
        let stack = self.stack_mut(direction);
        while stack.len() >= capacity {
            stack.pop_front();
        }
        stack.push_back(position);
    }

    pub(crate) fn pop(&mut self, direction: Direction) -> Option<Position> {
        self.stack_mut(direction).pop_back()
    }

    /// Records a fresh movement: the previous position goes onto the back
    /// stack and forward history is dropped.
    pub(crate) fn record(&mut self, position: Position) {
        if let Some(previous) = self.last_position.replace(position) {
            self.push(Direction::Back, previous);
        }
        self.forward_stack.clear();
    }

    pub(crate) fn clear(&mut self) {
        self.back_stack.clear();
        self.forward_stack.clear();
        self.last_position = None;
    }

    fn stack(&self, direction: Direction) -> &VecDeque<Position> {
        match direction {
            Direction::Back => &self.back_stack,
            Direction::Forward => &self.forward_stack,
        }
    }

    fn stack_mut(&mut self, direction: Direction) -> &mut VecDeque<Position> {
        match direction {
            Direction::Back => &mut self.back_stack,
            Direction::Forward => &mut self.forward_stack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, HistorySnapshot, HistoryState};
    use crate::position::Position;

    fn at(line: u32) -> Position {
        Position::new("a.rs", line, 0)
    }

    #[test]
    fn push_evicts_oldest_entry_at_capacity() {
        let mut state = HistoryState::with_capacity(3);
        for line in 0..5 {
            state.push(Direction::Back, at(line));
        }
        let lines: Vec<u32> = state.back_stack().iter().map(|p| p.line).collect();
        assert_eq!(lines, vec![2, 3, 4]);
    }

    #[test]
    fn record_pushes_previous_and_clears_forward() {
        let mut state = HistoryState::default();
        state.record(at(1));
        assert!(state.back_stack().is_empty());

        state.push(Direction::Forward, at(99));
        state.record(at(20));
        assert_eq!(state.back_stack().back(), Some(&at(1)));
        assert!(state.forward_stack().is_empty());
        assert_eq!(state.last_position(), Some(&at(20)));
    }

    #[test]
    fn from_snapshot_truncates_to_newest_entries() {
        let snapshot = HistorySnapshot {
            back_stack: (0..10).map(at).collect(),
            forward_stack: vec![at(50)],
            last_position: Some(at(77)),
        };
        let state = HistoryState::from_snapshot(snapshot, 4);
        let lines: Vec<u32> = state.back_stack().iter().map(|p| p.line).collect();
        assert_eq!(lines, vec![6, 7, 8, 9]);
        assert_eq!(state.forward_stack().len(), 1);
        assert_eq!(state.last_position(), Some(&at(77)));
        assert_eq!(state.snapshot().back_stack.len(), 4);
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = HistoryState::default();
        state.record(at(1));
        state.record(at(30));
        state.clear();
        assert!(state.is_empty());
        assert_eq!(Direction::Back.opposite(), Direction::Forward);
    }
}
