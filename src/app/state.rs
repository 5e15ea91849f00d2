//! Application state - the Moodboard struct definition and sub-structs.

use crate::board::Board;
use crate::export::SnapshotExporter;
use crate::factory::ItemFactory;
use crate::input::InputState;
use crate::scheduler::Scheduler;
use crate::theme::{AudioSink, ThemeAudioController};
use crate::types::Size;
use std::time::Duration;

/// Board surface state - the item collection and pointer state machine.
pub struct CanvasState {
    /// The live item collection
    pub board: Board,
    /// Pointer input state machine
    pub input_state: InputState,
    /// Current viewport in board units (used for placement sampling and
    /// snapshot dimensions)
    pub viewport: Size,
}

/// Visibility of non-board chrome (control bar). Hidden while a snapshot
/// is being rasterized so it never appears in the output.
pub struct ChromeState {
    pub visible: bool,
}

/// Peripheral UI state.
pub struct UiState {
    /// The onboarding hint shown on an empty board; dismissed once, on the
    /// first successful item creation.
    pub instructions_visible: bool,
}

/// Main application state - composed of focused sub-structs.
///
/// All mutation is driven by direct user interaction: pointer events,
/// the add-note/export/theme commands, and completed file loads. There is
/// no background mutation and nothing is persisted across sessions.
pub struct Moodboard {
    /// Board surface state
    pub canvas: CanvasState,
    /// Chrome visibility
    pub chrome: ChromeState,
    /// Peripheral UI state
    pub ui: UiState,
    /// Item creation with randomized placement
    pub factory: ItemFactory,
    /// Delayed work (deletion detach, audio fade steps)
    pub scheduler: Scheduler,
    /// Theme flip + audio ramp
    pub theme: ThemeAudioController,
    /// Snapshot rasterization pipeline
    pub exporter: SnapshotExporter,
    /// Monotonic clock, advanced by `tick`
    pub(crate) now: Duration,
}

impl Moodboard {
    pub fn new(viewport: Size, audio: Box<dyn AudioSink>) -> Self {
        Self {
            canvas: CanvasState {
                board: Board::new(),
                input_state: InputState::default(),
                viewport,
            },
            chrome: ChromeState { visible: true },
            ui: UiState {
                instructions_visible: true,
            },
            factory: ItemFactory::new(viewport),
            scheduler: Scheduler::new(),
            theme: ThemeAudioController::new(audio),
            exporter: SnapshotExporter::new(),
            now: Duration::ZERO,
        }
    }

    /// Deterministic app for tests: seeded placement, clock at zero.
    pub fn new_for_test(viewport: Size, seed: u64, audio: Box<dyn AudioSink>) -> Self {
        let mut app = Self::new(viewport, audio);
        app.factory = ItemFactory::with_seed(viewport, seed);
        app
    }

    /// Current app clock (duration since start, advanced by `tick`).
    pub fn now(&self) -> Duration {
        self.now
    }
}
