//! Input state machine - explicit state for pointer interactions.
//!
//! A single state machine covers the whole board surface: the interaction
//! model is single-pointer, so at most one item can be dragging at a time.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging     (pointer down on an item, outside its editable region)
//! Dragging -> Idle     (pointer up, anywhere on the surface)
//! ```
//!
//! A pointer down inside an item's editable region is ignored entirely so
//! native text selection and editing proceed unobstructed.

use crate::types::{ItemId, Point};

/// Pointer interaction state for the board surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No active pointer operation
    #[default]
    Idle,

    /// An item is tracking the pointer
    Dragging {
        /// The grabbed item
        item: ItemId,
        /// Pointer position at the grab
        pointer_start: Point,
        /// Item position at the grab; every move re-derives from this, so
        /// the final position depends only on the net pointer delta
        initial_position: Point,
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The item being dragged, if any.
    pub fn dragging_item(&self) -> Option<ItemId> {
        match self {
            Self::Dragging { item, .. } => Some(*item),
            _ => None,
        }
    }

    /// Begin dragging an item.
    pub fn start_dragging(&mut self, item: ItemId, pointer_start: Point, initial_position: Point) {
        *self = Self::Dragging {
            item,
            pointer_start,
            initial_position,
        };
    }

    /// Reset to Idle.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
