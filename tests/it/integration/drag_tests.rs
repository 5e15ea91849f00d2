//! Drag Interaction Tests

use crate::helpers::{place_note, TestAppBuilder};
use moodboard::input::{PointerDownEvent, PointerMoveEvent, PointerUpEvent};
use moodboard::types::Point;

fn down(x: f32, y: f32) -> PointerDownEvent {
    PointerDownEvent::single(Point::new(x, y))
}

fn mv(x: f32, y: f32) -> PointerMoveEvent {
    PointerMoveEvent {
        position: Point::new(x, y),
    }
}

fn up(x: f32, y: f32) -> PointerUpEvent {
    PointerUpEvent {
        position: Point::new(x, y),
    }
}

#[test]
fn test_grab_brings_item_to_front_and_disables_easing() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    let under = place_note(&mut app, 100.0, 100.0);
    let over = place_note(&mut app, 500.0, 100.0);

    app.handle_pointer_down(&down(105.0, 105.0));

    assert!(app.canvas.input_state.is_dragging());
    assert_eq!(app.canvas.input_state.dragging_item(), Some(under));
    assert_eq!(app.canvas.board.frontmost().map(|i| i.id), Some(under));
    assert!(app.canvas.board.get_item(under).unwrap().z_rank
        > app.canvas.board.get_item(over).unwrap().z_rank);
    assert!(!app.canvas.board.get_item(under).unwrap().smooth_transitions);
}

#[test]
fn test_drag_lands_at_exact_delta_regardless_of_path() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    let id = place_note(&mut app, 100.0, 100.0);

    app.handle_pointer_down(&down(110.0, 120.0));
    // A wandering path: only the final pointer position matters.
    app.handle_pointer_move(&mv(700.0, 50.0));
    app.handle_pointer_move(&mv(-40.0, 600.0));
    app.handle_pointer_move(&mv(310.0, 280.0));
    app.handle_pointer_up(&up(310.0, 280.0));

    // delta = (310,280) - (110,120) = (200,160)
    let item = app.canvas.board.get_item(id).unwrap();
    assert_eq!(item.position, Point::new(300.0, 260.0));
    assert!(item.smooth_transitions);
    assert!(app.canvas.input_state.is_idle());
}

#[test]
fn test_drag_tracks_outside_item_bounds() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    let id = place_note(&mut app, 100.0, 100.0);

    app.handle_pointer_down(&down(105.0, 105.0));
    // The pointer outruns the item and leaves the viewport entirely; the
    // drag still tracks and the release still completes.
    app.handle_pointer_move(&mv(-300.0, -250.0));
    app.handle_pointer_up(&up(-300.0, -250.0));

    let item = app.canvas.board.get_item(id).unwrap();
    assert_eq!(item.position, Point::new(-305.0, -255.0));
    assert!(app.canvas.input_state.is_idle());
}

#[test]
fn test_hit_testing_follows_the_item_after_a_drag() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    let id = place_note(&mut app, 100.0, 100.0);

    app.handle_pointer_down(&down(110.0, 110.0));
    app.handle_pointer_move(&mv(610.0, 410.0));
    app.handle_pointer_up(&up(610.0, 410.0));

    // Old location no longer hits; new location does.
    assert_eq!(app.canvas.board.topmost_at(Point::new(110.0, 110.0)), None);
    assert_eq!(
        app.canvas.board.topmost_at(Point::new(610.0, 410.0)),
        Some(id)
    );
}

#[test]
fn test_press_on_empty_surface_is_ignored() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    place_note(&mut app, 100.0, 100.0);

    app.handle_pointer_down(&down(900.0, 700.0));
    assert!(app.canvas.input_state.is_idle());

    // Stray moves and releases with no drag in flight are no-ops.
    app.handle_pointer_move(&mv(500.0, 500.0));
    app.handle_pointer_up(&up(500.0, 500.0));
    assert!(app.canvas.input_state.is_idle());
}

#[test]
fn test_press_in_editable_region_changes_nothing() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    let target = place_note(&mut app, 100.0, 100.0);
    let other = place_note(&mut app, 500.0, 100.0);

    let rank_before = app.canvas.board.get_item(target).unwrap().z_rank;
    let position_before = app.canvas.board.get_item(target).unwrap().position;

    // Note body is inset by its padding; the center is editable.
    app.handle_pointer_down(&down(210.0, 210.0));

    let item = app.canvas.board.get_item(target).unwrap();
    assert!(app.canvas.input_state.is_idle());
    assert_eq!(item.z_rank, rank_before);
    assert_eq!(item.position, position_before);
    assert!(item.smooth_transitions);
    assert_eq!(app.canvas.board.frontmost().map(|i| i.id), Some(other));

    // A move afterwards drags nothing.
    app.handle_pointer_move(&mv(400.0, 400.0));
    assert_eq!(
        app.canvas.board.get_item(target).unwrap().position,
        position_before
    );
}

#[test]
fn test_press_on_note_edge_starts_a_drag() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    let id = place_note(&mut app, 100.0, 100.0);

    // Within the item but outside the inset editable body.
    app.handle_pointer_down(&down(105.0, 105.0));
    assert_eq!(app.canvas.input_state.dragging_item(), Some(id));
}

#[test]
fn test_press_on_photo_caption_is_suppressed_but_frame_drags() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    let id = crate::helpers::place_photo(&mut app, 100.0, 100.0);

    // Caption strip occupies the bottom 50 units of the 250x300 frame.
    app.handle_pointer_down(&down(150.0, 380.0));
    assert!(app.canvas.input_state.is_idle());

    app.handle_pointer_down(&down(150.0, 150.0));
    assert_eq!(app.canvas.input_state.dragging_item(), Some(id));
}
