//! Pointer up handling - finalize the drag.
//!
//! Release is surface-global: it completes the drag no matter where the
//! pointer ended up, including outside the item or the viewport.

use crate::app::Moodboard;
use crate::input::PointerUpEvent;

impl Moodboard {
    pub fn handle_pointer_up(&mut self, _event: &PointerUpEvent) {
        if let Some(item_id) = self.canvas.input_state.dragging_item() {
            // The item's bounds settled; refresh its spatial entry now
            // rather than on every intermediate move.
            self.canvas.board.update_spatial_index(item_id);
            if let Some(item) = self.canvas.board.get_item_mut(item_id) {
                item.smooth_transitions = true;
            }
        }
        self.canvas.input_state.reset();
    }
}
