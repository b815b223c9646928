use serde::Deserialize;

use crate::error::AppResult;
use crate::position::{CaretEvent, Position};

/// How the host scrolls a revealed caret into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealPolicy {
    /// Keep the viewport when the target is already visible, center it otherwise.
    #[default]
    CenterIfOutsideViewport,
    /// Always center the target line.
    Center,
}

impl RevealPolicy {
    pub fn id(self) -> &'static str {
        match self {
            Self::CenterIfOutsideViewport => "center-if-outside-viewport",
            Self::Center => "center",
        }
    }
}

/// Editor operations the history tracker depends on.
pub trait EditorHost {
    /// `Ok(false)` means the resource is gone; `Err` is reserved for host failures.
    fn resource_exists(&self, locator: &str) -> AppResult<bool>;

    /// Opens and focuses the target document, places the caret and scrolls it
    /// into view. Returns the caret notifications the move produced.
    fn reveal(&mut self, target: &Position, policy: RevealPolicy) -> AppResult<Vec<CaretEvent>>;

    fn navigate_back_native(&mut self) -> AppResult<()>;

    fn navigate_forward_native(&mut self) -> AppResult<()>;

    /// Host-side bookkeeping for a caret move the user made.
    fn caret_moved(&mut self, event: &CaretEvent) {
        let _ = event;
    }

    fn notify(&mut self, message: &str);
}
