use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::position::{CaretEvent, Position};

use super::traits::{EditorHost, RevealPolicy};

const FILE_SCHEME: &str = "file://";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    Revealed { position: Position, viewport_top: u32 },
    NativeBack,
    NativeForward,
    Notice(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top: u32,
    pub height: u32,
}

impl Viewport {
    pub fn contains(&self, line: u32) -> bool {
        line >= self.top && line < self.top.saturating_add(self.height)
    }

    fn centered_on(line: u32, height: u32) -> Self {
        Self {
            top: line.saturating_sub(height / 2),
            height,
        }
    }
}

/// Host backed by the local filesystem. Locators are file paths, optionally
/// prefixed with `file://`; relative paths resolve against `root`.
#[derive(Debug)]
pub struct FsHost {
    root: PathBuf,
    viewport_lines: u32,
    active: Option<Position>,
    viewport: Viewport,
    actions: Vec<HostAction>,
}

impl FsHost {
    pub fn new(root: impl Into<PathBuf>, viewport_lines: u32) -> Self {
        let viewport_lines = viewport_lines.max(1);
        Self {
            root: root.into(),
            viewport_lines,
            active: None,
            viewport: Viewport {
                top: 0,
                height: viewport_lines,
            },
            actions: Vec::new(),
        }
    }

    pub fn active(&self) -> Option<&Position> {
        self.active.as_ref()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn actions(&self) -> &[HostAction] {
        &self.actions
    }

    pub fn take_actions(&mut self) -> Vec<HostAction> {
        std::mem::take(&mut self.actions)
    }

    fn resolve(&self, locator: &str) -> PathBuf {
        let raw = locator.strip_prefix(FILE_SCHEME).unwrap_or(locator);
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn scroll_to(&mut self, target: &Position, policy: RevealPolicy) {
        let same_document = self
            .active
            .as_ref()
            .is_some_and(|active| active.same_locator(target));
        let keep = policy == RevealPolicy::CenterIfOutsideViewport
            && same_document
            && self.viewport.contains(target.line);
        if !keep {
            self.viewport = Viewport::centered_on(target.line, self.viewport_lines);
        }
    }
}

impl EditorHost for FsHost {
    fn resource_exists(&self, locator: &str) -> AppResult<bool> {
        let path = self.resolve(locator);
        match fs::metadata(&path) {
            Ok(meta) => Ok(meta.is_file()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(AppError::io_with_context(
                err,
                format!("failed to stat {}", path.display()),
            )),
        }
    }

    fn reveal(&mut self, target: &Position, policy: RevealPolicy) -> AppResult<Vec<CaretEvent>> {
        let path = self.resolve(&target.locator);
        if !path.is_file() {
            return Err(AppError::host(format!(
                "cannot open document: {}",
                path.display()
            )));
        }

        self.scroll_to(target, policy);
        let moved = self.active.as_ref() != Some(target);
        self.active = Some(target.clone());
        self.actions.push(HostAction::Revealed {
            position: target.clone(),
            viewport_top: self.viewport.top,
        });
        debug!(
            position = %target,
            policy = policy.id(),
            top = self.viewport.top,
            "revealed caret"
        );

        if moved {
            Ok(vec![CaretEvent::caret(target.clone())])
        } else {
            Ok(Vec::new())
        }
    }

    fn navigate_back_native(&mut self) -> AppResult<()> {
        info!("falling back to native back navigation");
        self.actions.push(HostAction::NativeBack);
        Ok(())
    }

    fn navigate_forward_native(&mut self) -> AppResult<()> {
        info!("falling back to native forward navigation");
        self.actions.push(HostAction::NativeForward);
        Ok(())
    }

    fn caret_moved(&mut self, event: &CaretEvent) {
        self.scroll_to(&event.position, RevealPolicy::CenterIfOutsideViewport);
        self.active = Some(event.position.clone());
    }

    fn notify(&mut self, message: &str) {
        info!(notice = message, "host notice");
        self.actions.push(HostAction::Notice(message.to_string()));
    }
}
