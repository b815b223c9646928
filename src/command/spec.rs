use super::types::{ArgKind, ArgSpec, CommandSpec};

const NO_ARGS: [ArgSpec; 0] = [];
const ARGS_POSITION: [ArgSpec; 3] = [
    ArgSpec {
        name: "locator",
        kind: ArgKind::String,
        required: true,
    },
    ArgSpec {
        name: "line",
        kind: ArgKind::U32,
        required: true,
    },
    ArgSpec {
        name: "column",
        kind: ArgKind::U32,
        required: false,
    },
];

const COMMAND_SPECS: [CommandSpec; 5] = [
    CommandSpec {
        id: "history-back",
        title: "Cursor History: Go Back",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "history-forward",
        title: "Cursor History: Go Forward",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "history-clear",
        title: "Cursor History: Clear",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "caret",
        title: "Caret Moved",
        args: &ARGS_POSITION,
    },
    CommandSpec {
        id: "select",
        title: "Selection Changed",
        args: &ARGS_POSITION,
    },
];

pub fn command_registry() -> &'static [CommandSpec] {
    &COMMAND_SPECS
}

pub fn find_command_spec(id: &str) -> Option<&'static CommandSpec> {
    COMMAND_SPECS.iter().find(|spec| spec.id == id)
}
