use std::path::PathBuf;

use tracing::{debug, warn};

use crate::command::{CommandDispatchResult, dispatch, parse_command_text};
use crate::config::Config;
use crate::error::AppResult;
use crate::history::PositionHistoryTracker;
use crate::host::FsHost;
use crate::store::JsonFileStore;

/// Drives a tracker against a filesystem host from line-oriented directives.
pub struct Session {
    tracker: PositionHistoryTracker,
    host: FsHost,
}

impl Session {
    pub fn new(tracker: PositionHistoryTracker, host: FsHost) -> Self {
        Self { tracker, host }
    }

    /// Builds a session rooted at `root`, restoring the workspace history
    /// when persistence is enabled and a store directory is known.
    pub fn from_config(config: &Config, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let host = FsHost::new(root.clone(), config.host.viewport_lines);

        let store_dir = if config.persistence.enabled {
            config.store_dir()
        } else {
            None
        };
        let tracker = match store_dir {
            Some(dir) => {
                let workspace = config
                    .persistence
                    .workspace
                    .clone()
                    .unwrap_or_else(|| root.display().to_string());
                let store = JsonFileStore::open(&dir, &workspace);
                debug!(store = %store.path().display(), "using history store");
                PositionHistoryTracker::with_store(&config.history, Box::new(store))
            }
            None => PositionHistoryTracker::new(&config.history),
        };

        Self::new(tracker, host)
    }

    pub fn tracker(&self) -> &PositionHistoryTracker {
        &self.tracker
    }

    pub fn host(&self) -> &FsHost {
        &self.host
    }

    /// Blank lines and `#` comments yield `Ok(None)`.
    pub fn run_line(&mut self, line: &str) -> AppResult<Option<CommandDispatchResult>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let cmd = parse_command_text(trimmed)?;
        let result = dispatch(&mut self.tracker, &mut self.host, cmd).inspect_err(|err| {
            warn!(line = trimmed, error = %err, "command failed");
        })?;
        Ok(Some(result))
    }

    pub fn shutdown(mut self) {
        self.tracker.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::Session;
    use crate::command::{ActionId, CommandOutcome};
    use crate::config::Config;
    use crate::host::HostAction;
    use crate::position::Position;

    fn config_without_store() -> Config {
        let mut config = Config::default();
        config.persistence.enabled = false;
        config
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let mut session = Session::from_config(&config_without_store(), dir.path());
        assert_eq!(session.run_line("").expect("blank"), None);
        assert_eq!(session.run_line("   # note").expect("comment"), None);
        assert!(session.run_line("bogus").is_err());
    }

    #[test]
    fn back_skips_deleted_files() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        for name in ["a.rs", "b.rs", "c.rs"] {
            fs::write(dir.path().join(name), "").expect("fixture should be written");
        }
        let mut session = Session::from_config(&config_without_store(), dir.path());
        for line in ["caret a.rs 10 0", "caret b.rs 20 0", "caret c.rs 30 0"] {
            session.run_line(line).expect("caret should apply");
        }
        fs::remove_file(dir.path().join("b.rs")).expect("fixture should be removed");

        let result = session
            .run_line("history-back")
            .expect("back should succeed")
            .expect("back should dispatch");
        assert_eq!(result.id, ActionId::HistoryBack);
        assert_eq!(result.outcome, CommandOutcome::Applied);
        assert_eq!(session.host().active(), Some(&Position::new("a.rs", 10, 0)));

        let fallback = session
            .run_line("history-back")
            .expect("back should succeed")
            .expect("back should dispatch");
        assert_eq!(fallback.outcome, CommandOutcome::HostFallback);
        assert_eq!(session.host().actions().last(), Some(&HostAction::NativeBack));
    }

    #[test]
    fn history_persists_between_sessions() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let store = tempfile::tempdir().expect("store dir should be created");
        fs::write(dir.path().join("a.rs"), "").expect("fixture should be written");
        fs::write(dir.path().join("b.rs"), "").expect("fixture should be written");

        let mut config = Config::default();
        config.persistence.path = Some(store.path().to_path_buf());
        config.persistence.workspace = Some("demo".to_string());

        let mut session = Session::from_config(&config, dir.path());
        session.run_line("caret a.rs 50 0").expect("caret");
        session.run_line("caret b.rs 30 0").expect("caret");
        session.shutdown();

        let mut session = Session::from_config(&config, dir.path());
        assert_eq!(session.tracker().state().back_stack().len(), 1);
        let result = session
            .run_line("history-back")
            .expect("back should succeed")
            .expect("back should dispatch");
        assert_eq!(result.message, "history -> a.rs:50:0");
    }
}
