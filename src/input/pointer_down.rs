//! Pointer down handling - hit testing, drag initiation, deletion gesture.
//!
//! ## Performance Notes
//!
//! Pointer down is a hot path during interaction. Hit testing runs against
//! the R-tree spatial index (O(log n) candidates), then resolves the
//! topmost candidate by z-rank.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::Moodboard;
use crate::input::PointerDownEvent;
use crate::profile_scope;

impl Moodboard {
    pub fn handle_pointer_down(&mut self, event: &PointerDownEvent) {
        profile_scope!("handle_pointer_down");

        let Some(item_id) = self.canvas.board.topmost_at(event.position) else {
            return;
        };
        let Some(item) = self.canvas.board.get_item(item_id) else {
            return;
        };

        // A press inside the caption/body area belongs to text editing:
        // no drag, no z-rank bump, no deletion. The event is ignored
        // entirely so native selection proceeds unobstructed.
        if item.is_editable_at(event.position) {
            return;
        }

        if event.click_count == 2 {
            self.begin_item_removal(item_id);
            return;
        }

        let initial_position = item.position;
        self.canvas.board.bring_to_front(item_id);
        if let Some(item) = self.canvas.board.get_item_mut(item_id) {
            // Easing off for the duration of the drag so the item tracks
            // the pointer with zero lag.
            item.smooth_transitions = false;
        }
        self.canvas
            .input_state
            .start_dragging(item_id, event.position, initial_position);
    }
}
