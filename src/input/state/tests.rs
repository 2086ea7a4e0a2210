use super::*;
use crate::draw::color::BLACK;
use crate::draw::surface::{RenderSurface, VectorSurface};
use crate::input::events::{BARREL_BUTTON, PRIMARY_BUTTON, PointerEvent};
use crate::input::mode::EditingMode;
use crate::ui::{Confirm, Toolbar};
use crate::util::SurfaceRect;
use std::cell::RefCell;
use std::rc::Rc;

fn create_state() -> InkState<VectorSurface> {
    InkState::new(VectorSurface::new())
}

fn surface_rect() -> SurfaceRect {
    SurfaceRect::at_origin(800.0, 600.0)
}

/// Drags a horizontal stroke from (x, y) rightwards in one-unit steps.
fn draw_stroke(state: &mut InkState<VectorSurface>, x: f64, y: f64, samples: usize) {
    let rect = surface_rect();
    state.on_pointer_down(&PointerEvent::mouse(x, y, PRIMARY_BUTTON), &rect);
    for i in 1..=samples {
        state.on_pointer_move(&PointerEvent::mouse(x + i as f64, y, PRIMARY_BUTTON), &rect);
    }
    state.on_pointer_up();
}

struct ScriptedConfirm {
    accept: bool,
    prompts: Vec<String>,
}

impl ScriptedConfirm {
    fn new(accept: bool) -> Self {
        Self {
            accept,
            prompts: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.accept
    }
}

struct RecordingToolbar(Rc<RefCell<Vec<EditingMode>>>);

impl Toolbar for RecordingToolbar {
    fn set_active_mode(&mut self, mode: EditingMode) {
        self.0.borrow_mut().push(mode);
    }
}

#[test]
fn draw_gesture_creates_exactly_one_primitive() {
    let mut state = create_state();
    draw_stroke(&mut state, 10.0, 10.0, 8);
    assert_eq!(state.surface.path_count(), 1);

    // A second up with no gesture in progress touches nothing.
    state.on_pointer_up();
    assert_eq!(state.surface.path_count(), 1);
    assert!(matches!(state.gesture, GestureState::Idle));
}

#[test]
fn stationary_press_still_creates_a_primitive() {
    let mut state = create_state();
    let rect = surface_rect();
    state.on_pointer_down(&PointerEvent::mouse(10.0, 10.0, PRIMARY_BUTTON), &rect);
    state.on_pointer_up();
    assert_eq!(state.surface.path_count(), 1);
}

#[test]
fn drag_mode_is_pass_through() {
    let mut state = create_state();
    let rect = surface_rect();
    state.switch_mode(EditingMode::Drag);

    state.on_pointer_down(&PointerEvent::mouse(10.0, 10.0, PRIMARY_BUTTON), &rect);
    assert!(matches!(state.gesture, GestureState::Idle));
    state.on_pointer_move(&PointerEvent::mouse(50.0, 50.0, PRIMARY_BUTTON), &rect);
    state.on_pointer_up();
    assert_eq!(state.surface.path_count(), 0);
}

#[test]
fn erase_gesture_removes_a_crossed_stroke() {
    let mut state = create_state();
    draw_stroke(&mut state, 10.0, 10.0, 10);
    assert_eq!(state.surface.path_count(), 1);

    let rect = surface_rect();
    state.switch_mode(EditingMode::Erase);
    state.on_pointer_down(&PointerEvent::mouse(15.0, 10.0, PRIMARY_BUTTON), &rect);
    state.on_pointer_up();
    assert_eq!(state.surface.path_count(), 0);
}

#[test]
fn erase_far_from_strokes_removes_nothing() {
    let mut state = create_state();
    draw_stroke(&mut state, 10.0, 10.0, 10);

    let rect = surface_rect();
    state.switch_mode(EditingMode::Erase);
    state.on_pointer_down(&PointerEvent::mouse(400.0, 400.0, PRIMARY_BUTTON), &rect);
    state.on_pointer_move(&PointerEvent::mouse(420.0, 400.0, PRIMARY_BUTTON), &rect);
    state.on_pointer_up();
    assert_eq!(state.surface.path_count(), 1);
}

#[test]
fn barrel_button_forces_erase_and_auto_reverts() {
    let mut state = create_state();
    draw_stroke(&mut state, 10.0, 10.0, 10);
    assert_eq!(state.current_mode(), EditingMode::Draw);

    let rect = surface_rect();
    state.on_pointer_down(&PointerEvent::pen(15.0, 10.0, BARREL_BUTTON), &rect);
    assert_eq!(state.current_mode(), EditingMode::Erase);
    assert!(state.pen_assist());
    assert_eq!(state.surface.path_count(), 0);

    state.on_pointer_up();
    assert_eq!(state.current_mode(), EditingMode::Draw);
    assert!(!state.pen_assist());
}

#[test]
fn barrel_button_is_ignored_for_non_pen_devices() {
    let mut state = create_state();
    let rect = surface_rect();
    state.on_pointer_down(&PointerEvent::mouse(10.0, 10.0, BARREL_BUTTON), &rect);
    assert_eq!(state.current_mode(), EditingMode::Draw);
    assert!(!state.pen_assist());
}

#[test]
fn pointer_leave_ends_the_gesture_like_pointer_up() {
    let mut state = create_state();
    let rect = surface_rect();
    state.on_pointer_down(&PointerEvent::mouse(10.0, 10.0, PRIMARY_BUTTON), &rect);
    state.on_pointer_move(&PointerEvent::mouse(12.0, 10.0, PRIMARY_BUTTON), &rect);
    state.on_pointer_leave();
    assert!(matches!(state.gesture, GestureState::Idle));
    assert_eq!(state.surface.path_count(), 1);

    // Motion after the leave must not resurrect the stroke.
    state.on_pointer_move(&PointerEvent::mouse(30.0, 10.0, PRIMARY_BUTTON), &rect);
    assert!(matches!(state.gesture, GestureState::Idle));
}

#[test]
fn unusable_samples_are_dropped_without_ending_the_gesture() {
    let mut state = create_state();
    let rect = surface_rect();
    state.on_pointer_down(&PointerEvent::mouse(10.0, 10.0, PRIMARY_BUTTON), &rect);

    state.on_pointer_move(&PointerEvent::without_coordinates(), &rect);
    let GestureState::Stroking(session) = &state.gesture else {
        panic!("gesture should survive a dropped sample");
    };
    assert_eq!(session.sample_count(), 2);

    // The next usable sample keeps extending the same stroke.
    state.on_pointer_move(&PointerEvent::mouse(12.0, 10.0, PRIMARY_BUTTON), &rect);
    let GestureState::Stroking(session) = &state.gesture else {
        panic!("gesture should still be active");
    };
    assert_eq!(session.sample_count(), 3);
    assert_eq!(state.surface.path_count(), 1);
}

#[test]
fn unusable_pointer_down_starts_no_gesture() {
    let mut state = create_state();
    state.on_pointer_down(&PointerEvent::without_coordinates(), &surface_rect());
    assert!(matches!(state.gesture, GestureState::Idle));
    assert_eq!(state.surface.path_count(), 0);
}

#[test]
fn hover_reentry_with_pressed_button_restarts_a_stroke() {
    let mut state = create_state();
    let rect = surface_rect();

    state.on_pointer_enter(&PointerEvent::mouse(40.0, 40.0, PRIMARY_BUTTON), &rect);
    assert!(matches!(state.gesture, GestureState::Stroking(_)));
    // Nothing renders until the first motion sample.
    assert_eq!(state.surface.path_count(), 0);

    state.on_pointer_move(&PointerEvent::mouse(41.0, 40.0, PRIMARY_BUTTON), &rect);
    assert_eq!(state.surface.path_count(), 1);
}

#[test]
fn hover_reentry_requires_draw_mode_and_primary_button() {
    let mut state = create_state();
    let rect = surface_rect();

    state.on_pointer_enter(&PointerEvent::mouse(40.0, 40.0, 0), &rect);
    assert!(matches!(state.gesture, GestureState::Idle));

    state.switch_mode(EditingMode::Erase);
    state.on_pointer_enter(&PointerEvent::mouse(40.0, 40.0, PRIMARY_BUTTON), &rect);
    assert!(matches!(state.gesture, GestureState::Idle));
}

#[test]
fn clear_canvas_with_confirm_respects_the_answer() {
    let mut state = create_state();
    for i in 0..5 {
        let x = i as f64 * 30.0;
        state
            .surface
            .append_path(BLACK, format!("M{x} 0 L{} 0 L{} 10 Z", x + 10.0, x + 10.0));
    }

    let mut decline = ScriptedConfirm::new(false);
    state.clear_canvas_with_confirm(&mut decline);
    assert_eq!(state.surface.path_count(), 5);
    assert_eq!(decline.prompts.len(), 1);

    let mut accept = ScriptedConfirm::new(true);
    state.clear_canvas_with_confirm(&mut accept);
    assert_eq!(state.surface.path_count(), 0);

    // Clearing an empty canvas is a no-op.
    state.clear_canvas_with_confirm(&mut accept);
    assert_eq!(state.surface.path_count(), 0);
}

#[test]
fn close_with_confirm_sets_the_exit_flag() {
    let mut state = create_state();

    let mut decline = ScriptedConfirm::new(false);
    state.close_with_confirm(&mut decline);
    assert!(!state.should_exit);

    let mut accept = ScriptedConfirm::new(true);
    state.close_with_confirm(&mut accept);
    assert!(state.should_exit);
}

#[test]
fn toolbar_highlight_follows_every_mode_change() {
    let mut state = create_state();
    let seen = Rc::new(RefCell::new(Vec::new()));
    state.set_toolbar(Box::new(RecordingToolbar(Rc::clone(&seen))));
    assert_eq!(*seen.borrow(), vec![EditingMode::Draw]);

    state.switch_mode(EditingMode::Drag);
    state.switch_mode(EditingMode::Draw);

    // Barrel-button override and its auto-revert both notify the toolbar.
    let rect = surface_rect();
    state.on_pointer_down(&PointerEvent::pen(10.0, 10.0, BARREL_BUTTON), &rect);
    state.on_pointer_up();

    assert_eq!(
        *seen.borrow(),
        vec![
            EditingMode::Draw,
            EditingMode::Drag,
            EditingMode::Draw,
            EditingMode::Erase,
            EditingMode::Draw,
        ]
    );
}

#[test]
fn switch_mode_remembers_the_previous_mode() {
    let mut state = create_state();
    state.switch_mode(EditingMode::Erase);
    assert_eq!(state.current_mode(), EditingMode::Erase);
    assert_eq!(state.last_mode(), EditingMode::Draw);
}
