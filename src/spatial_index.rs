//! R-tree based spatial indexing for pointer hit testing.
//!
//! Every live item keeps an axis-aligned bounding box entry in the index,
//! refreshed when the item moves. Point queries return candidates in
//! O(log n); the board then resolves the topmost candidate by z-rank.
//! Rotation is a visual transform only and does not participate in hit
//! testing.

use crate::types::{ItemId, Point, Size};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing one item's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(item_id: ItemId, position: Point, size: Size) -> Self {
        Self {
            item_id,
            min_x: position.x,
            min_y: position.y,
            max_x: position.x + size.width,
            max_y: position.y + size.height,
        }
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index over board items.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the entry for an item.
    pub fn insert(&mut self, item_id: ItemId, position: Point, size: Size) {
        if let Some(old_entry) = self.entries.remove(&item_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(item_id, position, size);
        self.tree.insert(entry);
        self.entries.insert(item_id, entry);
    }

    /// Drop an item's entry. Returns false if the item was not indexed.
    pub fn remove(&mut self, item_id: ItemId) -> bool {
        if let Some(entry) = self.entries.remove(&item_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Refresh an item's bounds after it moved.
    pub fn update(&mut self, item_id: ItemId, position: Point, size: Size) {
        self.insert(item_id, position, size);
    }

    /// All items whose bounds contain the given board-local point.
    pub fn query_point(&self, p: Point) -> Vec<ItemId> {
        let point_envelope = AABB::from_point([p.x, p.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(p))
            .map(|entry| entry.item_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
