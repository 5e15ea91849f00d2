//! Pointer input handling for the board surface.
//!
//! The dispatcher translates platform pointer events into transitions of a
//! small per-surface state machine ([`InputState`]). Move and up events are
//! delivered at the whole-surface level, never per item: a fast drag whose
//! pointer outruns the item and leaves its bounds still tracks and still
//! completes on release.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `pointer_down` - Hit testing, editable-region suppression, drag start,
//!   double-activation deletion
//! - `pointer_move` - Position updates while dragging
//! - `pointer_up` - Drag finalization

mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use state::InputState;

use crate::types::Point;

/// A pointer press on the board surface.
#[derive(Clone, Copy, Debug)]
pub struct PointerDownEvent {
    /// Position in board coordinates
    pub position: Point,
    /// 1 for a single press, 2 for the second press of a double activation
    pub click_count: u32,
}

/// A pointer move, delivered surface-wide regardless of what is under it.
#[derive(Clone, Copy, Debug)]
pub struct PointerMoveEvent {
    pub position: Point,
}

/// A pointer release, delivered surface-wide.
#[derive(Clone, Copy, Debug)]
pub struct PointerUpEvent {
    pub position: Point,
}

impl PointerDownEvent {
    pub fn single(position: Point) -> Self {
        Self {
            position,
            click_count: 1,
        }
    }

    pub fn double(position: Point) -> Self {
        Self {
            position,
            click_count: 2,
        }
    }
}
