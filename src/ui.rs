//! Host-UI collaborator traits.
//!
//! The engine only depends on these seams; the toolbar's visual styling and
//! the dialog mechanism behind confirmations belong entirely to the host.

use crate::input::mode::EditingMode;

/// Toolbar collaborator notified whenever the editing mode changes, so it can
/// move the highlight to the active mode button.
pub trait Toolbar {
    /// Called after every mode switch, including stylus auto-erase overrides
    /// and their auto-revert.
    fn set_active_mode(&mut self, mode: EditingMode);
}

/// Toolbar that ignores mode changes (headless hosts, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullToolbar;

impl Toolbar for NullToolbar {
    fn set_active_mode(&mut self, _mode: EditingMode) {}
}

/// Blocking yes/no confirmation supplied by the host environment.
///
/// Destructive actions (clear-all, close) consult this before proceeding;
/// declining aborts with no state change.
pub trait Confirm {
    /// Returns true when the user accepts the prompt.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Confirmation that always accepts, for non-interactive hosts like the
/// trace replay tool.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
