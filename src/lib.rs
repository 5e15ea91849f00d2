//! Moodboard - an interactive mood board engine.
//!
//! The board holds photo and sticky-note items with randomized scattered
//! placement, free-form dragging with bring-to-front stacking, a two-phase
//! double-activation delete, and a 2x raster snapshot export. A light/dark
//! theme toggle drives a gradual ambient audio fade alongside it.
//!
//! ## Architecture
//!
//! - [`app`] - The [`app::Moodboard`] state and its command surface
//! - [`board`] - Item collection, paint order, z-rank stacking
//! - [`input`] - Pointer state machine and event handlers
//! - [`factory`] - Item creation with randomized placement and tilt
//! - [`scheduler`] - Deterministic delayed work (deletion detach, audio fade)
//! - [`export`] - CPU rasterization of the board to a PNG snapshot
//! - [`theme`] - Theme toggle and the audio fade controller
//! - [`spatial_index`] - R-tree index backing pointer hit testing
//!
//! All state lives in plain structs driven by explicit method calls; there
//! are no background threads. Time enters through [`app::Moodboard::tick`],
//! which makes every delayed behavior reproducible in tests.

pub mod app;
pub mod board;
pub mod constants;
pub mod export;
pub mod factory;
pub mod input;
pub mod perf;
pub mod scheduler;
pub mod spatial_index;
pub mod theme;
pub mod types;
pub mod zorder;

use once_cell::sync::OnceCell;

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber, honoring `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops. Embedders that
/// install their own subscriber can skip this entirely.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}
