//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

use std::time::Duration;

// ============================================================================
// Item Defaults
// ============================================================================

/// Nominal photo item size (polaroid frame including caption strip)
pub const PHOTO_ITEM_SIZE: (f32, f32) = (250.0, 300.0);

/// Nominal note item size (sticky note)
pub const NOTE_ITEM_SIZE: (f32, f32) = (220.0, 220.0);

/// Photo rotation range in degrees (uniform, symmetric around 0)
pub const PHOTO_MAX_TILT_DEG: f32 = 15.0;

/// Note rotation range in degrees
pub const NOTE_MAX_TILT_DEG: f32 = 5.0;

/// Height of the editable caption strip at the bottom of a photo item
pub const CAPTION_HEIGHT: f32 = 50.0;

/// Inner padding of a photo frame around the image area
pub const PHOTO_FRAME_PADDING: f32 = 12.0;

/// Inner padding of a note's editable body
pub const NOTE_BODY_PADDING: f32 = 14.0;

// ============================================================================
// Animation & Timing
// ============================================================================

/// Delay between the shrink transform and the actual detach on deletion
pub const DELETE_DETACH_DELAY: Duration = Duration::from_millis(200);

// ============================================================================
// Snapshot Export
// ============================================================================

/// Upscale factor applied when rasterizing the board
pub const EXPORT_SCALE: u32 = 2;

/// Fixed output file name for exported snapshots
pub const EXPORT_FILE_NAME: &str = "my-mood-board.png";

// ============================================================================
// Theme & Audio
// ============================================================================

/// Volume ceiling for the night-mode audio channel
pub const AUDIO_VOLUME_CEILING: f32 = 0.4;

/// Volume change per fade step
pub const AUDIO_FADE_STEP: f32 = 0.05;

/// Interval between fade steps
pub const AUDIO_FADE_TICK: Duration = Duration::from_millis(200);

// ============================================================================
// Z-Order
// ============================================================================

/// First rank handed out by the allocator
pub const INITIAL_Z_RANK: u64 = 1;

// ============================================================================
// Render Colors (RGBA, used by the snapshot exporter)
// ============================================================================

/// Polaroid frame fill
pub const PHOTO_FRAME_COLOR: [u8; 4] = [0xfd, 0xfd, 0xfb, 0xff];

/// Caption strip fill (slightly darker than the frame)
pub const CAPTION_STRIP_COLOR: [u8; 4] = [0xf0, 0xee, 0xe8, 0xff];

/// Sticky note fill
pub const NOTE_FILL_COLOR: [u8; 4] = [0xfe, 0xf3, 0x9a, 0xff];

/// Sticky note body region fill
pub const NOTE_BODY_COLOR: [u8; 4] = [0xfb, 0xee, 0x85, 0xff];
