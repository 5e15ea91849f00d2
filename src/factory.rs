//! Item creation with randomized initial placement.
//!
//! New items land at a uniformly random position within the viewport
//! (minus the item's nominal size) with a random tilt. If the viewport is
//! smaller than the nominal item size the sampled position may be negative,
//! placing the item partially off-screen; that is accepted, not guarded.

use crate::board::Board;
use crate::constants::{
    CAPTION_HEIGHT, NOTE_BODY_PADDING, NOTE_ITEM_SIZE, NOTE_MAX_TILT_DEG, PHOTO_ITEM_SIZE,
    PHOTO_MAX_TILT_DEG,
};
use crate::types::{ImageData, ItemContent, ItemId, Point, Rect, Size};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct ItemFactory {
    /// Viewport used for placement sampling, in board units.
    viewport: Size,
    rng: StdRng,
}

impl ItemFactory {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic factory for tests.
    pub fn with_seed(viewport: Size, seed: u64) -> Self {
        Self {
            viewport,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Attach a new photo item holding already-decoded image data.
    ///
    /// Decode failures are owned by the file-loading collaborator; this
    /// never sees them.
    pub fn create_photo_item(&mut self, board: &mut Board, image: ImageData) -> ItemId {
        let size = Size::new(PHOTO_ITEM_SIZE.0, PHOTO_ITEM_SIZE.1);
        let position = self.sample_position(size);
        let rotation = self.sample_tilt(PHOTO_MAX_TILT_DEG);

        // The caption strip at the bottom of the frame is the editable
        // region; pointer gestures there belong to text editing.
        let editable_region = Rect::new(
            0.0,
            size.height - CAPTION_HEIGHT,
            size.width,
            CAPTION_HEIGHT,
        );

        let id = board.add_item(
            position,
            size,
            rotation,
            ItemContent::Photo {
                image,
                caption: String::new(),
            },
            editable_region,
        );
        tracing::info!(?id, x = position.x, y = position.y, rotation, "photo item created");
        id
    }

    /// Attach a new empty sticky note.
    pub fn create_note_item(&mut self, board: &mut Board) -> ItemId {
        let size = Size::new(NOTE_ITEM_SIZE.0, NOTE_ITEM_SIZE.1);
        let position = self.sample_position(size);
        let rotation = self.sample_tilt(NOTE_MAX_TILT_DEG);

        let editable_region = Rect::new(
            NOTE_BODY_PADDING,
            NOTE_BODY_PADDING,
            size.width - 2.0 * NOTE_BODY_PADDING,
            size.height - 2.0 * NOTE_BODY_PADDING,
        );

        let id = board.add_item(
            position,
            size,
            rotation,
            ItemContent::Note {
                body: String::new(),
            },
            editable_region,
        );
        tracing::info!(?id, x = position.x, y = position.y, rotation, "note item created");
        id
    }

    /// Uniform sample over `[0, viewport - item]` per axis. The span may be
    /// negative for tiny viewports, which simply yields a negative offset.
    fn sample_position(&mut self, item: Size) -> Point {
        let x = self.rng.r#gen::<f32>() * (self.viewport.width - item.width);
        let y = self.rng.r#gen::<f32>() * (self.viewport.height - item.height);
        Point::new(x, y)
    }

    fn sample_tilt(&mut self, max_deg: f32) -> f32 {
        self.rng.gen_range(-max_deg..=max_deg)
    }
}
