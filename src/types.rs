//! Core types for the mood board system.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: board-local geometry, item handles, z-order ranks, and the board
//! items themselves. The data model is deliberately independent of any
//! rendering layer so it can be exercised directly from tests.

use image::RgbaImage;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use std::sync::Arc;

// ============================================================================
// Geometry
// ============================================================================

/// A point (or delta) in board-local coordinates, top-left origin.
///
/// Positions are unclamped: items may sit fully or partially outside the
/// visible viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width/height pair in board units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.x <= self.origin.x + self.size.width
            && p.y >= self.origin.y
            && p.y <= self.origin.y + self.size.height
    }
}

// ============================================================================
// Handles
// ============================================================================

/// Opaque identity of a board item.
///
/// Distinct from the item's visual representation; never reused within a
/// session, even after the item is deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

/// Front-to-back paint rank. Higher ranks render on top.
///
/// Ranks are issued strictly increasing for the lifetime of the process and
/// are never reassigned, so the item holding the maximum rank among live
/// items is always the unique frontmost item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZRank(pub u64);

// ============================================================================
// Image payload
// ============================================================================

/// Decoded RGBA pixel payload for a photo item.
///
/// The pixels are immutable once created (only the caption of a photo item
/// is user-editable) and shared behind an `Arc` so cloning an item is cheap.
/// Serialization records dimensions only; nothing in this system persists
/// pixel data.
#[derive(Clone)]
pub struct ImageData {
    pixels: Arc<RgbaImage>,
}

impl ImageData {
    pub fn new(image: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(image),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageData({}x{})", self.width(), self.height())
    }
}

impl PartialEq for ImageData {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels) || *self.pixels == *other.pixels
    }
}

impl Serialize for ImageData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ImageData", 2)?;
        s.serialize_field("width", &self.width())?;
        s.serialize_field("height", &self.height())?;
        s.end()
    }
}

impl<'de> Deserialize<'de> for ImageData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DimVisitor;

        impl<'de> Visitor<'de> for DimVisitor {
            type Value = ImageData;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with width and height")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ImageData, A::Error> {
                let mut width: Option<u32> = None;
                let mut height: Option<u32> = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "width" => width = Some(map.next_value()?),
                        "height" => height = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                let width = width.ok_or_else(|| de::Error::missing_field("width"))?;
                let height = height.ok_or_else(|| de::Error::missing_field("height"))?;
                Ok(ImageData::new(RgbaImage::new(width, height)))
            }
        }

        deserializer.deserialize_struct("ImageData", &["width", "height"], DimVisitor)
    }
}

// ============================================================================
// Item content
// ============================================================================

/// The content of a board item.
///
/// Determines the item's nominal size, its editable region, and how the
/// snapshot exporter paints it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ItemContent {
    /// A photograph in a polaroid frame with a user-editable caption.
    Photo { image: ImageData, caption: String },
    /// A sticky note with a user-editable body.
    Note { body: String },
}

impl ItemContent {
    /// The user-editable text of this content (caption or body).
    pub fn text(&self) -> &str {
        match self {
            ItemContent::Photo { caption, .. } => caption,
            ItemContent::Note { body } => body,
        }
    }

    /// Replace the user-editable text of this content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        match self {
            ItemContent::Photo { caption, .. } => *caption = text.into(),
            ItemContent::Note { body } => *body = text.into(),
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            ItemContent::Photo { .. } => "PHOTO",
            ItemContent::Note { .. } => "NOTE",
        }
    }
}

// ============================================================================
// Board item
// ============================================================================

/// An item placed on the board.
///
/// Position, z-rank, and text content are mutated in place by user
/// interaction; rotation and the editable region are fixed at creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardItem {
    /// Unique handle for this item
    pub id: ItemId,
    /// Top-left corner in board coordinates, unclamped
    pub position: Point,
    /// Nominal size for the item variant
    pub size: Size,
    /// Tilt in signed degrees, fixed at creation
    pub rotation_deg: f32,
    /// Front-to-back rank; reassigned on every drag grab
    pub z_rank: ZRank,
    /// Visual scale; 1.0 normally, 0.0 while shrinking toward removal
    pub scale: f32,
    /// Positional easing flag; disabled while a drag is in flight so the
    /// item tracks the pointer with zero lag
    pub smooth_transitions: bool,
    /// What this item displays
    pub content: ItemContent,
    /// Item-local sub-area where text editing takes precedence over
    /// drag/delete gestures; permanent for the item's lifetime
    pub editable_region: Rect,
}

impl BoardItem {
    /// Axis-aligned bounds in board coordinates.
    pub fn bounds(&self) -> Rect {
        Rect {
            origin: self.position,
            size: self.size,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// True if the board-local point falls inside this item's editable
    /// region. Pointer gestures starting there must not drag or delete.
    pub fn is_editable_at(&self, p: Point) -> bool {
        self.editable_region.contains(p - self.position)
    }

    /// True once the deletion shrink has been applied and the detach task
    /// is pending.
    pub fn is_pending_removal(&self) -> bool {
        self.scale == 0.0
    }
}
