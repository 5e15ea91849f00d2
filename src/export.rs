//! Snapshot export: flatten the board into a single raster image.
//!
//! The exporter paints every live item — current position, rotation, and
//! paint order — onto a transparent canvas at a fixed upscale factor, then
//! encodes the result as a PNG with a fixed file name. Board chrome
//! (toolbars/controls) is hidden for the duration and restored by a drop
//! guard, so a failed rasterization can never leave the chrome hidden.
//!
//! Rotation is rendered by inverse mapping: for each destination pixel
//! inside the rotated bounding box, the board point is rotated back into
//! item-local space and sampled there. All of the math is total.

use crate::app::ChromeState;
use crate::board::Board;
use crate::constants::{
    CAPTION_HEIGHT, CAPTION_STRIP_COLOR, EXPORT_FILE_NAME, EXPORT_SCALE, NOTE_BODY_COLOR,
    NOTE_FILL_COLOR, PHOTO_FRAME_COLOR, PHOTO_FRAME_PADDING,
};
use crate::types::{BoardItem, ItemContent, Point, Rect, Size};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting a snapshot.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Could not create or write the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed
    #[error("encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// The viewport has no area to rasterize
    #[error("viewport is empty")]
    EmptyViewport,
}

/// Rasterizes the board and saves it as `my-mood-board.png`.
pub struct SnapshotExporter {
    /// Upscale factor relative to on-screen density.
    scale: u32,
}

impl SnapshotExporter {
    pub fn new() -> Self {
        Self {
            scale: EXPORT_SCALE,
        }
    }

    /// Export the board to `<dir>/my-mood-board.png`.
    ///
    /// Chrome is hidden before rasterization starts and restored whether or
    /// not the export succeeds.
    pub fn export(
        &self,
        board: &Board,
        viewport: Size,
        chrome: &mut ChromeState,
        dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        let _guard = ChromeGuard::hide(chrome);

        let canvas = self.rasterize(board, viewport)?;
        let path = dir.join(EXPORT_FILE_NAME);
        let file = std::fs::File::create(&path)?;
        let mut writer = BufWriter::new(file);
        canvas.write_to(&mut writer, ImageFormat::Png)?;

        tracing::info!(path = %path.display(), items = board.len(), "snapshot exported");
        Ok(path)
    }

    /// Paint all live items in ascending z-rank onto a transparent canvas.
    pub fn rasterize(&self, board: &Board, viewport: Size) -> Result<RgbaImage, ExportError> {
        if viewport.width < 1.0 || viewport.height < 1.0 {
            return Err(ExportError::EmptyViewport);
        }

        let width = (viewport.width.round() as u32) * self.scale;
        let height = (viewport.height.round() as u32) * self.scale;
        // Zero-initialized RGBA: the gradient/transparent background is
        // preserved, no opaque backdrop is forced.
        let mut canvas = RgbaImage::new(width, height);

        for item in board.items() {
            self.paint_item(&mut canvas, item);
        }

        Ok(canvas)
    }

    fn paint_item(&self, canvas: &mut RgbaImage, item: &BoardItem) {
        // A shrink-to-zero item (removal pending) has no visible extent.
        if item.scale <= 0.0 {
            return;
        }

        let scale = self.scale as f32;
        let theta = item.rotation_deg.to_radians();
        let (sin, cos) = theta.sin_cos();
        let half_w = item.size.width / 2.0;
        let half_h = item.size.height / 2.0;
        let center = Point::new(item.position.x + half_w, item.position.y + half_h);

        // Bounding box of the rotated rect, in canvas pixels.
        let extent_x = half_w * cos.abs() + half_h * sin.abs();
        let extent_y = half_w * sin.abs() + half_h * cos.abs();
        let min_px = (((center.x - extent_x) * scale).floor().max(0.0)) as u32;
        let min_py = (((center.y - extent_y) * scale).floor().max(0.0)) as u32;
        let max_px = (((center.x + extent_x) * scale).ceil().max(0.0) as u32).min(canvas.width());
        let max_py = (((center.y + extent_y) * scale).ceil().max(0.0) as u32).min(canvas.height());

        for py in min_py..max_py {
            for px in min_px..max_px {
                let board_x = (px as f32 + 0.5) / scale;
                let board_y = (py as f32 + 0.5) / scale;

                // Rotate the board point back into item-local space.
                let dx = board_x - center.x;
                let dy = board_y - center.y;
                let local = Point::new(
                    dx * cos + dy * sin + half_w,
                    -dx * sin + dy * cos + half_h,
                );

                if local.x < 0.0
                    || local.y < 0.0
                    || local.x > item.size.width
                    || local.y > item.size.height
                {
                    continue;
                }

                let src = surface_color(item, local);
                blend(canvas.get_pixel_mut(px, py), src);
            }
        }
    }
}

impl Default for SnapshotExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample an item's surface at an item-local point.
fn surface_color(item: &BoardItem, local: Point) -> Rgba<u8> {
    match &item.content {
        ItemContent::Photo { image, .. } => {
            if item.editable_region.contains(local) {
                return Rgba(CAPTION_STRIP_COLOR);
            }

            let photo_area = Rect::new(
                PHOTO_FRAME_PADDING,
                PHOTO_FRAME_PADDING,
                item.size.width - 2.0 * PHOTO_FRAME_PADDING,
                item.size.height - CAPTION_HEIGHT - 2.0 * PHOTO_FRAME_PADDING,
            );
            if photo_area.contains(local) && image.width() > 0 && image.height() > 0 {
                let u = (local.x - photo_area.origin.x) / photo_area.size.width;
                let v = (local.y - photo_area.origin.y) / photo_area.size.height;
                let sx = ((u * image.width() as f32) as u32).min(image.width() - 1);
                let sy = ((v * image.height() as f32) as u32).min(image.height() - 1);
                return *image.pixels().get_pixel(sx, sy);
            }

            Rgba(PHOTO_FRAME_COLOR)
        }
        ItemContent::Note { .. } => {
            if item.editable_region.contains(local) {
                Rgba(NOTE_BODY_COLOR)
            } else {
                Rgba(NOTE_FILL_COLOR)
            }
        }
    }
}

/// Standard source-over compositing.
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = src.0[3] as u32;
    if sa == 255 {
        *dst = src;
        return;
    }
    if sa == 0 {
        return;
    }
    let da = dst.0[3] as u32;
    let out_a = sa + da * (255 - sa) / 255;
    if out_a == 0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    for channel in 0..3 {
        let s = src.0[channel] as u32;
        let d = dst.0[channel] as u32;
        let out = (s * sa + d * da * (255 - sa) / 255) / out_a;
        dst.0[channel] = out as u8;
    }
    dst.0[3] = out_a as u8;
}

/// Hides chrome for the duration of an export and restores it on drop, so
/// every failure path leaves the chrome visible again.
struct ChromeGuard<'a> {
    chrome: &'a mut ChromeState,
}

impl<'a> ChromeGuard<'a> {
    fn hide(chrome: &'a mut ChromeState) -> Self {
        chrome.visible = false;
        Self { chrome }
    }
}

impl Drop for ChromeGuard<'_> {
    fn drop(&mut self) {
        self.chrome.visible = true;
    }
}
