//! Pointer event dispatch.
//!
//! Routes pointer-down/move/up/leave/enter to exactly one of the stroke or
//! erase sessions based on the current editing mode. Events are processed
//! strictly in arrival order on a single call stack; a sample the sampler
//! cannot resolve is dropped without disturbing the gesture.

use super::core::{GestureState, InkState};
use crate::draw::surface::RenderSurface;
use crate::input::events::{BARREL_BUTTON, PRIMARY_BUTTON, PointerEvent, PointerType};
use crate::input::mode::EditingMode;
use crate::input::sampler;
use crate::session::{EraseSession, StrokeSession};
use crate::util::SurfaceRect;

impl<S: RenderSurface> InkState<S> {
    /// Processes a pointer-down event, beginning a gesture for the current
    /// mode.
    ///
    /// A stylus reporting only the barrel button forces a temporary switch to
    /// Erase before dispatch; the override auto-reverts when the erase
    /// gesture ends. Drag mode starts nothing - the host's native panning
    /// applies.
    pub fn on_pointer_down(&mut self, event: &PointerEvent, rect: &SurfaceRect) {
        if event.pointer_type == PointerType::Pen && event.buttons == BARREL_BUTTON {
            self.pen_assist = true;
            self.switch_mode(EditingMode::Erase);
            log::debug!("stylus barrel button: auto-erase override active");
        }

        let Some(point) = sampler::try_sample_point(event, rect) else {
            log::debug!("pointer-down without usable coordinates; sample dropped");
            return;
        };

        match self.current_mode {
            EditingMode::Draw => {
                let mut session = StrokeSession::start(point, self.stroke_options);
                session.extend(point, &mut self.surface, self.generator.as_ref());
                self.gesture = GestureState::Stroking(session);
            }
            EditingMode::Erase => {
                let mut session =
                    EraseSession::start(point, self.erase_options, &mut self.surface);
                session.extend(point, &mut self.surface);
                self.gesture = GestureState::Erasing(session);
            }
            EditingMode::Drag => {}
        }
    }

    /// Processes pointer motion, extending the active gesture.
    pub fn on_pointer_move(&mut self, event: &PointerEvent, rect: &SurfaceRect) {
        if matches!(self.gesture, GestureState::Idle) {
            return;
        }

        let Some(point) = sampler::try_sample_point(event, rect) else {
            log::debug!("pointer-move without usable coordinates; sample dropped");
            return;
        };

        match &mut self.gesture {
            GestureState::Idle => {}
            GestureState::Stroking(session) => {
                session.extend(point, &mut self.surface, self.generator.as_ref());
            }
            GestureState::Erasing(session) => {
                session.extend(point, &mut self.surface);
            }
        }
    }

    /// Processes pointer-up, ending the active gesture.
    ///
    /// Ending twice in a row is harmless: with no live gesture this is a
    /// no-op and no primitive is touched.
    pub fn on_pointer_up(&mut self) {
        self.finish_gesture();
    }

    /// Pointer leaving the surface mid-gesture ends the gesture exactly like
    /// pointer-up, preventing a stuck active session.
    pub fn on_pointer_leave(&mut self) {
        self.finish_gesture();
    }

    /// Hover-reentry: the pointer re-entered the surface with the primary
    /// button still pressed while in Draw mode.
    ///
    /// Pointer capture was lost when the cursor left mid-stroke, so a fresh
    /// stroke session starts at the reentry point without requiring a new
    /// press. Nothing renders until the first motion sample arrives.
    pub fn on_pointer_enter(&mut self, event: &PointerEvent, rect: &SurfaceRect) {
        if self.current_mode != EditingMode::Draw || event.buttons != PRIMARY_BUTTON {
            return;
        }
        let Some(point) = sampler::try_sample_point(event, rect) else {
            log::debug!("pointer-enter without usable coordinates; sample dropped");
            return;
        };
        self.gesture = GestureState::Stroking(StrokeSession::start(point, self.stroke_options));
    }

    fn finish_gesture(&mut self) {
        match std::mem::replace(&mut self.gesture, GestureState::Idle) {
            GestureState::Idle => {}
            GestureState::Stroking(session) => {
                log::debug!("stroke ended after {} sample(s)", session.sample_count());
                let _ = session.end();
            }
            GestureState::Erasing(session) => {
                log::debug!("erase ended after {} trail point(s)", session.trail().len());
                session.end();
                // The auto-erase override lasts exactly one erase gesture.
                if self.pen_assist {
                    self.pen_assist = false;
                    self.switch_mode(self.last_mode);
                }
            }
        }
    }
}
