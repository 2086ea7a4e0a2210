//! Editing mode state and gesture dispatch state for one ink surface.

use crate::config::Config;
use crate::draw::outline::{OutlineGenerator, OutlineOptions, PressureOutline};
use crate::draw::surface::RenderSurface;
use crate::input::mode::EditingMode;
use crate::session::erase::EraseOptions;
use crate::session::{EraseSession, StrokeSession};
use crate::ui::{Confirm, NullToolbar, Toolbar};

/// Gesture dispatch state machine.
///
/// Constructing a session on gesture start and dropping it on gesture end is
/// what enforces the engine's core invariants: exactly one of the two
/// session kinds is ever active, and a point buffer or erase trail exists
/// only between a gesture-start and a gesture-end event.
#[derive(Debug)]
pub enum GestureState {
    /// No gesture in progress
    Idle,
    /// A drawing gesture is accumulating stroke points
    Stroking(StrokeSession),
    /// An erase gesture is walking its cursor trail
    Erasing(EraseSession),
}

/// Per-surface engine state: editing mode, the active gesture, and the
/// collaborators everything is dispatched through.
///
/// Owns the render surface and the outline generator; constructed once per
/// drawing surface and driven by the host's pointer events. All work runs
/// synchronously inside the event that triggered it.
pub struct InkState<S: RenderSurface> {
    /// The path store this surface renders into
    pub surface: S,
    /// Outline generator invoked on every stroke sample
    pub(super) generator: Box<dyn OutlineGenerator>,
    /// Toolbar highlight collaborator
    toolbar: Box<dyn Toolbar>,
    /// Stroke outline configuration
    pub stroke_options: OutlineOptions,
    /// Eraser geometry configuration
    pub erase_options: EraseOptions,
    /// The gesture currently in progress, if any
    pub gesture: GestureState,
    pub(super) current_mode: EditingMode,
    pub(super) last_mode: EditingMode,
    /// True only while a stylus barrel-button erase override is active
    pub(super) pen_assist: bool,
    /// Whether the host should close the surface (set via confirmed close)
    pub should_exit: bool,
}

impl<S: RenderSurface> InkState<S> {
    /// Creates engine state with default options, the built-in outline
    /// generator, and no toolbar.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            generator: Box::new(PressureOutline),
            toolbar: Box::new(NullToolbar),
            stroke_options: OutlineOptions::default(),
            erase_options: EraseOptions::default(),
            gesture: GestureState::Idle,
            current_mode: EditingMode::default(),
            last_mode: EditingMode::default(),
            pen_assist: false,
            should_exit: false,
        }
    }

    /// Creates engine state with options taken from a loaded configuration.
    pub fn with_config(surface: S, config: &Config) -> Self {
        let mut state = Self::new(surface);
        state.stroke_options = config.stroke_options();
        state.erase_options = config.erase_options();
        state
    }

    /// Replaces the outline generator (e.g. with a host-provided smoother).
    pub fn set_outline_generator(&mut self, generator: Box<dyn OutlineGenerator>) {
        self.generator = generator;
    }

    /// Attaches the toolbar collaborator and highlights the current mode.
    pub fn set_toolbar(&mut self, mut toolbar: Box<dyn Toolbar>) {
        toolbar.set_active_mode(self.current_mode);
        self.toolbar = toolbar;
    }

    /// The current editing mode.
    pub fn current_mode(&self) -> EditingMode {
        self.current_mode
    }

    /// The mode that was active before the most recent switch.
    pub fn last_mode(&self) -> EditingMode {
        self.last_mode
    }

    /// Whether a stylus barrel-button erase override is active.
    pub fn pen_assist(&self) -> bool {
        self.pen_assist
    }

    /// Switches the editing mode, remembering the previous one and moving the
    /// toolbar highlight.
    pub fn switch_mode(&mut self, mode: EditingMode) {
        self.last_mode = self.current_mode;
        self.current_mode = mode;
        self.toolbar.set_active_mode(mode);
        log::info!(
            "editing mode: {} -> {}",
            self.last_mode.name(),
            mode.name()
        );
    }

    /// Removes every primitive from the surface.
    ///
    /// Calling it on an already empty surface is a no-op.
    pub fn clear_canvas(&mut self) {
        let ids = self.surface.path_ids();
        let count = ids.len();
        for id in ids {
            self.surface.remove_path(id);
        }
        if count > 0 {
            log::info!("cleared {count} path(s) from the canvas");
        }
    }

    /// Clears the canvas after the host confirms; declining changes nothing.
    pub fn clear_canvas_with_confirm(&mut self, prompt: &mut dyn Confirm) {
        if prompt.confirm("Clear the whole canvas?") {
            self.clear_canvas();
        }
    }

    /// Requests surface close after the host confirms; declining changes
    /// nothing. The host observes `should_exit` and tears down the surface.
    pub fn close_with_confirm(&mut self, prompt: &mut dyn Confirm) {
        if prompt.confirm("Close the ink surface?") {
            self.should_exit = true;
        }
    }
}
