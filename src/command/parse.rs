use crate::error::{AppError, AppResult};
use crate::position::Position;

use super::spec::find_command_spec;
use super::types::Command;

pub fn parse_command_text(input: &str) -> AppResult<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_argument("command must not be empty"));
    }

    let (id, args_text) = match trimmed.find(char::is_whitespace) {
        Some(index) => (&trimmed[..index], trimmed[index..].trim_start()),
        None => (trimmed, ""),
    };

    if find_command_spec(id).is_none() {
        return Err(AppError::invalid_argument(format!("unknown command id: {id}")));
    }

    match id {
        "history-back" => parse_no_args(id, args_text, Command::HistoryBack),
        "history-forward" => parse_no_args(id, args_text, Command::HistoryForward),
        "history-clear" => parse_no_args(id, args_text, Command::HistoryClear),
        "caret" => parse_position(id, args_text).map(|position| Command::Caret { position }),
        "select" => parse_position(id, args_text).map(|position| Command::Select { position }),
        _ => Err(AppError::unsupported(
            "command parser is out of sync with registry",
        )),
    }
}

fn parse_no_args(id: &str, args_text: &str, cmd: Command) -> AppResult<Command> {
    if args_text.is_empty() {
        return Ok(cmd);
    }

    Err(AppError::invalid_argument(format!(
        "{id} does not accept arguments"
    )))
}

/// `<locator> <line> [column]`; the locator may contain spaces.
fn parse_position(id: &str, args_text: &str) -> AppResult<Position> {
    let Some((head, last)) = split_last_token(args_text) else {
        return Err(AppError::invalid_argument(format!(
            "{id} requires arguments: locator line [column]"
        )));
    };

    let last = last
        .parse::<u32>()
        .map_err(|_| AppError::invalid_argument(format!("{id} line must be an integer")))?;

    let (locator, line, column) = match split_last_token(head) {
        Some((locator, line_text)) => match line_text.parse::<u32>() {
            Ok(line) => (locator.trim(), line, last),
            Err(_) => (head.trim(), last, 0),
        },
        None => (head.trim(), last, 0),
    };

    if locator.is_empty() {
        return Err(AppError::invalid_argument(format!(
            "{id} requires a locator"
        )));
    }

    Ok(Position::new(locator, line, column))
}

fn split_last_token(input: &str) -> Option<(&str, &str)> {
    let trimmed = input.trim_end();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.rsplit_once(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::parse_command_text;
    use crate::command::Command;
    use crate::position::Position;

    #[test]
    fn parses_history_commands() {
        assert_eq!(
            parse_command_text("history-back").expect("parse should succeed"),
            Command::HistoryBack
        );
        assert_eq!(
            parse_command_text("  history-clear ").expect("parse should succeed"),
            Command::HistoryClear
        );
        assert!(parse_command_text("history-forward now").is_err());
    }

    #[test]
    fn parses_positions_with_optional_column() {
        assert_eq!(
            parse_command_text("caret src/main.rs 12 4").expect("parse should succeed"),
            Command::Caret {
                position: Position::new("src/main.rs", 12, 4),
            }
        );
        assert_eq!(
            parse_command_text("select src/main.rs 12").expect("parse should succeed"),
            Command::Select {
                position: Position::new("src/main.rs", 12, 0),
            }
        );
        assert_eq!(
            parse_command_text("caret My Notes/todo.md 3 1").expect("parse should succeed"),
            Command::Caret {
                position: Position::new("My Notes/todo.md", 3, 1),
            }
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_command_text("").is_err());
        assert!(parse_command_text("jump a.rs 1").is_err());
        assert!(parse_command_text("caret").is_err());
        assert!(parse_command_text("caret a.rs").is_err());
        assert!(parse_command_text("caret a.rs 1 x").is_err());
        assert!(parse_command_text("caret 12").is_err());
    }

    #[test]
    fn splits_on_multibyte_whitespace() {
        assert_eq!(
            parse_command_text("caret a.rs\u{3000}5").expect("parse should succeed"),
            Command::Caret {
                position: Position::new("a.rs", 5, 0),
            }
        );
        assert_eq!(
            parse_command_text("select a.rs\u{a0}7\u{a0}2").expect("parse should succeed"),
            Command::Select {
                position: Position::new("a.rs", 7, 2),
            }
        );
        assert!(parse_command_text("caret a.rs\u{3000}x").is_err());
    }
}
