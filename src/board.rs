//! The board: the ordered collection of all currently live items.
//!
//! Items are kept sorted ascending by z-rank, which is exactly paint order
//! (lowest rank painted first, highest rank on top). Creation and
//! bring-to-front both obtain a fresh rank from the board's allocator, so
//! appending to the end of the vector preserves the ordering invariant
//! without ever sorting.
//!
//! The board is the item collection — there is no separate registry. The
//! spatial index is a derived acceleration structure for hit testing and is
//! refreshed when items are added, removed, or settle after a drag.

use crate::spatial_index::SpatialIndex;
use crate::types::{BoardItem, ItemContent, ItemId, Point, Rect, Size, ZRank};
use crate::zorder::ZOrderAllocator;

pub struct Board {
    /// Live items in paint order (ascending z-rank).
    items: Vec<BoardItem>,
    /// Hit-testing acceleration structure.
    spatial_index: SpatialIndex,
    /// Process-wide rank source; ranks survive item deletion.
    z_order: ZOrderAllocator,
    /// Next item handle. Handles are never reused.
    next_item_id: u64,
}

impl Board {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            spatial_index: SpatialIndex::new(),
            z_order: ZOrderAllocator::new(),
            next_item_id: 0,
        }
    }

    // ==================== Item lifecycle ====================

    /// Attach a new item to the board.
    ///
    /// Allocates its handle and initial z-rank; the new item starts above
    /// all existing items.
    pub fn add_item(
        &mut self,
        position: Point,
        size: Size,
        rotation_deg: f32,
        content: ItemContent,
        editable_region: Rect,
    ) -> ItemId {
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;

        let item = BoardItem {
            id,
            position,
            size,
            rotation_deg,
            z_rank: self.z_order.next(),
            scale: 1.0,
            smooth_transitions: true,
            content,
            editable_region,
        };

        self.spatial_index.insert(id, position, size);
        self.items.push(item);
        tracing::debug!(?id, "item attached");
        id
    }

    /// Detach an item permanently. Its z-rank is never reassigned.
    ///
    /// Returns false if the item is already gone; callers treat that as a
    /// no-op (the deletion timer may fire after other removal paths).
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        self.items.remove(index);
        self.spatial_index.remove(id);
        tracing::debug!(?id, "item detached");
        true
    }

    // ==================== Access ====================

    pub fn get_item(&self, id: ItemId) -> Option<&BoardItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_item_mut(&mut self, id: ItemId) -> Option<&mut BoardItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Live items in paint order (ascending z-rank).
    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The unique frontmost item: maximum z-rank among live items.
    pub fn frontmost(&self) -> Option<&BoardItem> {
        self.items.last()
    }

    // ==================== Ordering ====================

    /// Assign a fresh rank to an item, making it the frontmost.
    ///
    /// The old rank is abandoned, not recycled.
    pub fn bring_to_front(&mut self, id: ItemId) -> Option<ZRank> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let mut item = self.items.remove(index);
        let rank = self.z_order.next();
        item.z_rank = rank;
        self.items.push(item);
        Some(rank)
    }

    // ==================== Hit testing ====================

    /// Resolve the topmost item under a board-local point.
    ///
    /// Candidates come from the spatial index in O(log n); the reverse scan
    /// over paint order picks the one with the highest z-rank.
    pub fn topmost_at(&self, p: Point) -> Option<ItemId> {
        let candidates = self.spatial_index.query_point(p);
        if candidates.is_empty() {
            return None;
        }
        self.items
            .iter()
            .rev()
            .find(|item| candidates.contains(&item.id))
            .map(|item| item.id)
    }

    /// Refresh an item's spatial entry after its position settled.
    pub fn update_spatial_index(&mut self, id: ItemId) {
        if let Some(item) = self.get_item(id) {
            let (position, size) = (item.position, item.size);
            self.spatial_index.update(id, position, size);
        }
    }

    // ==================== Content editing ====================

    /// Replace an item's user-editable text (photo caption or note body).
    pub fn set_item_text(&mut self, id: ItemId, text: impl Into<String>) -> bool {
        match self.get_item_mut(id) {
            Some(item) => {
                item.content.set_text(text);
                true
            }
            None => false,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
