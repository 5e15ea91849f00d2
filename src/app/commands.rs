//! Application commands - item creation, text editing, export, theming,
//! and the clock tick that drains due scheduled work.

use crate::app::Moodboard;
use crate::scheduler::TaskAction;
use crate::theme::Theme;
use crate::types::{ImageData, ItemId};
use anyhow::Context as _;
use std::path::{Path, PathBuf};
use std::time::Duration;

impl Moodboard {
    /// Place a freshly decoded image on the board as a photo item.
    ///
    /// Called once per completed file load; a multi-file selection arrives
    /// as one call per file, each with its own randomized placement.
    pub fn handle_image_loaded(&mut self, image: ImageData) -> ItemId {
        let id = self
            .factory
            .create_photo_item(&mut self.canvas.board, image);
        self.dismiss_instructions();
        id
    }

    /// Add a sticky note with placeholder text.
    pub fn add_note(&mut self) -> ItemId {
        let id = self.factory.create_note_item(&mut self.canvas.board);
        self.dismiss_instructions();
        id
    }

    /// Replace an item's editable text (photo caption or note body).
    /// Returns false if the item no longer exists.
    pub fn set_item_text(&mut self, id: ItemId, text: &str) -> bool {
        self.canvas.board.set_item_text(id, text)
    }

    /// Hide the onboarding hint. Idempotent; it never comes back, even if
    /// the board later becomes empty again.
    pub fn dismiss_instructions(&mut self) {
        self.ui.instructions_visible = false;
    }

    /// Rasterize the board at 2x into `my-mood-board.png` under `dir`.
    ///
    /// Chrome is hidden for the duration of the capture and restored
    /// afterwards, including on failure.
    pub fn export_snapshot(&mut self, dir: &Path) -> anyhow::Result<PathBuf> {
        self.exporter
            .export(
                &self.canvas.board,
                self.canvas.viewport,
                &mut self.chrome,
                dir,
            )
            .context("failed to export board snapshot")
    }

    /// Flip between light and dark theme, starting the matching audio ramp.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle(&mut self.scheduler, self.now)
    }

    /// Advance the app clock and run every scheduled task that came due.
    pub fn tick(&mut self, now: Duration) {
        self.now = now;
        for action in self.scheduler.run_due(now) {
            match action {
                TaskAction::RemoveItem(id) => {
                    // The item may already be gone; removal is a no-op then.
                    self.canvas.board.remove_item(id);
                }
                TaskAction::AudioFadeStep(direction) => {
                    self.theme.fade_step(direction, &mut self.scheduler);
                }
            }
        }
    }
}
