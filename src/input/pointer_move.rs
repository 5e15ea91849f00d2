//! Pointer move handling - item dragging.
//!
//! ## Performance Notes
//!
//! Pointer move fires very frequently during a drag (60+ times per second).
//! The update is a direct offset from the drag origin - no smoothing, no
//! clamping, no allocation - and the spatial index refresh is deferred to
//! pointer up.

use crate::app::Moodboard;
use crate::input::{InputState, PointerMoveEvent};
use crate::profile_scope;

impl Moodboard {
    pub fn handle_pointer_move(&mut self, event: &PointerMoveEvent) {
        profile_scope!("handle_pointer_move");

        let InputState::Dragging {
            item,
            pointer_start,
            initial_position,
        } = self.canvas.input_state
        else {
            return;
        };

        // position = initial + (current - start). Deriving from the drag
        // origin rather than accumulating per-move deltas means the result
        // is exact regardless of the intermediate pointer path.
        let delta = event.position - pointer_start;
        if let Some(item) = self.canvas.board.get_item_mut(item) {
            item.position = initial_position + delta;
        }
    }
}
