//! Application layer - state and the command surface that drives it.
//!
//! Everything user-visible funnels through [`Moodboard`] methods: item
//! creation ([`Moodboard::handle_image_loaded`], [`Moodboard::add_note`]),
//! pointer handling (in [`crate::input`]), snapshot export, theme toggling,
//! and the scheduler-draining clock tick.
//!
//! ## Modules
//!
//! - `state` - The `Moodboard` struct and its sub-structs
//! - `commands` - Creation, text editing, export, theming, tick
//! - `deletion` - Two-phase double-activation removal

mod commands;
mod deletion;
mod state;

pub use state::{CanvasState, ChromeState, Moodboard, UiState};
