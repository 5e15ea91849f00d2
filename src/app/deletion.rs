//! Item deletion - the double-activation removal gesture.
//!
//! Removal is two-phase: the item first collapses (scale set to zero, its
//! exit animation), then detaches from the board after a fixed delay. In
//! between it still occupies its spatial slot but is skipped by painting.

use crate::app::Moodboard;
use crate::constants::DELETE_DETACH_DELAY;
use crate::scheduler::TaskAction;
use crate::types::ItemId;

impl Moodboard {
    /// Start removing an item: collapse it now, detach it after the delay.
    ///
    /// No-op if the item is missing or its removal is already underway, so
    /// a triple-click cannot schedule a second detach.
    pub fn begin_item_removal(&mut self, id: ItemId) {
        let Some(item) = self.canvas.board.get_item_mut(id) else {
            return;
        };
        if item.is_pending_removal() {
            return;
        }

        item.scale = 0.0;
        self.scheduler
            .schedule_once(self.now + DELETE_DETACH_DELAY, TaskAction::RemoveItem(id));
        tracing::info!(item_id = id.0, "item removal started");
    }
}
