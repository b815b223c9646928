use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    HistoryBack,
    HistoryForward,
    HistoryClear,
    /// Host notification: the caret settled at `position`.
    Caret {
        position: Position,
    },
    /// Host notification: a selection ended at `position`.
    Select {
        position: Position,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    HistoryBack,
    HistoryForward,
    HistoryClear,
    Caret,
    Select,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HistoryBack => "history-back",
            Self::HistoryForward => "history-forward",
            Self::HistoryClear => "history-clear",
            Self::Caret => "caret",
            Self::Select => "select",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::HistoryBack => ActionId::HistoryBack,
            Self::HistoryForward => ActionId::HistoryForward,
            Self::HistoryClear => ActionId::HistoryClear,
            Self::Caret { .. } => ActionId::Caret,
            Self::Select { .. } => ActionId::Select,
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    U32,
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub kind: ArgKind,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub args: &'static [ArgSpec],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    /// History was exhausted and the host's own navigation ran instead.
    HostFallback,
}

impl CommandOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Noop => "noop",
            Self::HostFallback => "host-fallback",
        }
    }
}
