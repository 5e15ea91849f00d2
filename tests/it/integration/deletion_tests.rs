//! Deletion Gesture Tests
//!
//! Removal is two-phase: the double activation collapses the item
//! immediately, then a scheduled task detaches it 200ms later.

use crate::helpers::{ms, place_note, place_photo, TestAppBuilder};
use moodboard::input::PointerDownEvent;
use moodboard::types::Point;

#[test]
fn test_double_activation_collapses_then_detaches() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    let id = place_note(&mut app, 100.0, 100.0);

    app.handle_pointer_down(&PointerDownEvent::double(Point::new(105.0, 105.0)));

    // Phase one: still on the board, collapsed to zero scale.
    let item = app.canvas.board.get_item(id).unwrap();
    assert!(item.is_pending_removal());
    assert_eq!(app.canvas.board.len(), 1);

    // Not yet due.
    app.tick(ms(199));
    assert_eq!(app.canvas.board.len(), 1);

    // Phase two: the detach task fires.
    app.tick(ms(200));
    assert!(app.canvas.board.is_empty());
    assert!(app.canvas.board.get_item(id).is_none());
}

#[test]
fn test_double_activation_in_editable_region_never_removes() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    let id = place_note(&mut app, 100.0, 100.0);

    // Center of the note is its editable body.
    app.handle_pointer_down(&PointerDownEvent::double(Point::new(210.0, 210.0)));

    let item = app.canvas.board.get_item(id).unwrap();
    assert!(!item.is_pending_removal());
    app.tick(ms(1000));
    assert_eq!(app.canvas.board.len(), 1);
}

#[test]
fn test_repeat_double_activation_schedules_no_second_detach() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    place_note(&mut app, 100.0, 100.0);

    app.handle_pointer_down(&PointerDownEvent::double(Point::new(105.0, 105.0)));
    assert_eq!(app.scheduler.pending(), 1);

    // A third click arrives as another double; removal is already underway.
    app.handle_pointer_down(&PointerDownEvent::double(Point::new(105.0, 105.0)));
    assert_eq!(app.scheduler.pending(), 1);

    app.tick(ms(200));
    assert!(app.canvas.board.is_empty());
    assert_eq!(app.scheduler.pending(), 0);
}

#[test]
fn test_stale_detach_task_is_a_noop() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    let id = place_note(&mut app, 100.0, 100.0);
    let other = place_note(&mut app, 500.0, 100.0);

    app.handle_pointer_down(&PointerDownEvent::double(Point::new(105.0, 105.0)));
    // The item disappears through another path before the timer fires.
    assert!(app.canvas.board.remove_item(id));

    app.tick(ms(500));
    assert_eq!(app.canvas.board.len(), 1);
    assert!(app.canvas.board.get_item(other).is_some());
}

#[test]
fn test_collapsed_item_keeps_its_rank_until_detach() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    let doomed = place_note(&mut app, 100.0, 100.0);
    place_note(&mut app, 500.0, 100.0);

    app.tick(ms(50));
    app.handle_pointer_down(&PointerDownEvent::double(Point::new(105.0, 105.0)));

    // During the grace window a new item still ranks above everything.
    let fresh = place_photo(&mut app, 700.0, 300.0);
    assert_eq!(app.canvas.board.frontmost().map(|i| i.id), Some(fresh));
    assert!(app.canvas.board.get_item(doomed).is_some());

    // The delay is measured from the gesture, not from app start.
    app.tick(ms(249));
    assert_eq!(app.canvas.board.len(), 3);
    app.tick(ms(250));
    assert_eq!(app.canvas.board.len(), 2);
    assert!(app.canvas.board.get_item(doomed).is_none());
}

#[test]
fn test_deletion_of_each_kind() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    place_photo(&mut app, 100.0, 100.0);
    place_note(&mut app, 600.0, 100.0);

    app.handle_pointer_down(&PointerDownEvent::double(Point::new(150.0, 150.0)));
    app.handle_pointer_down(&PointerDownEvent::double(Point::new(605.0, 105.0)));

    app.tick(ms(300));
    assert!(app.canvas.board.is_empty());
}
