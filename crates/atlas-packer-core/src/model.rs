use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }
    /// True if the open interiors of `self` and `other` share any pixel.
    /// Zero-sized rectangles never intersect anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
    /// Intersection of two rectangles, or `None` when they are disjoint.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.w).min(other.x + other.w);
        let y2 = (self.y + self.h).min(other.y + other.h);
        if x2 > x1 && y2 > y1 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }
}

/// One rectangle to place: a sprite's key and its bounding-box size.
///
/// Keys are expected to be unique within a batch; the engine does not
/// enforce this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackRequest {
    pub key: String,
    pub w: u32,
    pub h: u32,
}

impl PackRequest {
    pub fn new(key: impl Into<String>, w: u32, h: u32) -> Self {
        Self {
            key: key.into(),
            w,
            h,
        }
    }
    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }
}

/// A placed rectangle. `x,y,w,h` describe the interior (content) box;
/// `w`/`h` are post-rotation, i.e. swapped relative to the request when
/// `rotated` is set. The configured padding surrounds this box but is
/// never part of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedRect {
    pub key: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub rotated: bool,
}

impl PlacedRect {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// Result of one packing run: placements in placement order plus the tight
/// bounding box of the layout and its fill ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackLayout {
    pub placements: Vec<PlacedRect>,
    /// `max(x + w)` over all placements.
    pub width: u32,
    /// `max(y + h)` over all placements.
    pub height: u32,
    /// Placed area divided by bounding-box area, in `[0, 1]`.
    pub efficiency: f64,
}

impl PackLayout {
    /// Total interior area of all placements.
    pub fn used_area(&self) -> u64 {
        self.placements.iter().map(|p| p.rect().area()).sum()
    }

    /// Human-readable one-liner for logs.
    pub fn summary(&self) -> String {
        format!(
            "Sprites: {}, Used: {}x{}, Efficiency: {:.2}%",
            self.placements.len(),
            self.width,
            self.height,
            self.efficiency * 100.0,
        )
    }
}

/// One sprite's record in the exported atlas document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpriteEntry {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub rotated: bool,
    /// Original width before trimming, present only for trimmed sprites.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_height: Option<u32>,
    /// Offset of the trimmed area within the original image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_y: Option<u32>,
}

/// Provenance block embedded in the atlas document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasMetadata {
    pub version: String,
    pub sources: Vec<String>,
    pub settings: crate::config::PackerConfig,
}

/// The exported atlas: final texture dimensions and all sprite records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasDoc {
    pub width: u32,
    pub height: u32,
    pub sprites: Vec<SpriteEntry>,
    pub metadata: AtlasMetadata,
}

impl AtlasDoc {
    /// Looks up a sprite record by name.
    pub fn sprite(&self, name: &str) -> Option<&SpriteEntry> {
        self.sprites.iter().find(|s| s.name == name)
    }
}
