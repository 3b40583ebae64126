//! Sprite loading helpers: transparent-border trimming and extraction of
//! individual frames from an existing sprite sheet.

use crate::error::{AtlasPackerError, Result};
use crate::model::Rect;
use image::{DynamicImage, RgbaImage, imageops};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// An in-memory sprite ready for packing.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub key: String,
    pub image: RgbaImage,
    /// Original (untrimmed) size.
    pub source_size: (u32, u32),
    /// Offset of the kept area within the original image.
    pub trim_x: u32,
    pub trim_y: u32,
    pub trimmed: bool,
    /// Frame duration carried from sheet data, used for animation export.
    pub duration: Option<u32>,
}

impl Sprite {
    /// Wraps a decoded image, optionally cropping away transparent borders.
    /// A fully transparent image is kept at full size.
    pub fn from_image(key: impl Into<String>, image: &DynamicImage, trim: bool, threshold: u8) -> Self {
        let rgba = image.to_rgba8();
        let (w, h) = rgba.dimensions();

        if trim {
            if let Some(b) = opaque_bounds(&rgba, threshold) {
                if b.w < w || b.h < h {
                    let cropped = imageops::crop_imm(&rgba, b.x, b.y, b.w, b.h).to_image();
                    return Self {
                        key: key.into(),
                        image: cropped,
                        source_size: (w, h),
                        trim_x: b.x,
                        trim_y: b.y,
                        trimmed: true,
                        duration: None,
                    };
                }
            }
        }

        Self {
            key: key.into(),
            image: rgba,
            source_size: (w, h),
            trim_x: 0,
            trim_y: 0,
            trimmed: false,
            duration: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Bounding box of all pixels with alpha above `threshold`, or `None` when
/// every pixel is transparent.
pub fn opaque_bounds(rgba: &RgbaImage, threshold: u8) -> Option<Rect> {
    let (w, h) = rgba.dimensions();
    let mut min_x = w;
    let mut min_y = h;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut any = false;

    for (x, y, px) in rgba.enumerate_pixels() {
        if px[3] > threshold {
            any = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if !any {
        return None;
    }
    Some(Rect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

/// One frame record of a sheet-data file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SheetFrame {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub rotated: bool,
    #[serde(default)]
    pub source_width: Option<u32>,
    #[serde(default)]
    pub source_height: Option<u32>,
    #[serde(default)]
    pub trim_x: Option<u32>,
    #[serde(default)]
    pub trim_y: Option<u32>,
    #[serde(default)]
    pub duration: Option<u32>,
}

/// The accepted sheet-data shapes: our own atlas document, a bare frame
/// array, or an Aseprite export.
#[derive(Deserialize)]
#[serde(untagged)]
enum SheetData {
    Atlas { sprites: Vec<SheetFrame> },
    Aseprite { frames: Vec<AsepriteFrame> },
    List(Vec<SheetFrame>),
}

#[derive(Deserialize)]
struct AsepriteFrame {
    filename: String,
    frame: AsepriteRect,
    #[serde(default)]
    rotated: bool,
    #[serde(default)]
    duration: Option<u32>,
}

#[derive(Deserialize)]
struct AsepriteRect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

impl From<AsepriteFrame> for SheetFrame {
    fn from(f: AsepriteFrame) -> Self {
        // "walk_E_0.aseprite" -> "walk_E_0"
        let name = Path::new(&f.filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| f.filename.clone());
        SheetFrame {
            name,
            x: f.frame.x,
            y: f.frame.y,
            width: f.frame.w,
            height: f.frame.h,
            rotated: f.rotated,
            source_width: None,
            source_height: None,
            trim_x: None,
            trim_y: None,
            duration: f.duration,
        }
    }
}

/// Parses sheet-data JSON in any of the accepted shapes.
pub fn parse_sheet(json: &str) -> Result<Vec<SheetFrame>> {
    let data: SheetData = serde_json::from_str(json)
        .map_err(|e| AtlasPackerError::InvalidInput(format!("unrecognized sheet data: {e}")))?;
    Ok(match data {
        SheetData::Atlas { sprites } => sprites,
        SheetData::Aseprite { frames } => frames.into_iter().map(SheetFrame::from).collect(),
        SheetData::List(frames) => frames,
    })
}

/// Cuts individual sprites out of a sheet image.
///
/// Frame bounds are clamped to the sheet; frames left empty by the clamp are
/// skipped. Frames stored rotated are rotated 90° CW back to their render
/// orientation. `prefix` is prepended to every sprite name.
pub fn extract_sprites(
    sheet: &RgbaImage,
    frames: &[SheetFrame],
    prefix: Option<&str>,
) -> Vec<Sprite> {
    let (sheet_w, sheet_h) = sheet.dimensions();
    let sheet_rect = Rect::new(0, 0, sheet_w, sheet_h);
    let mut sprites = Vec::with_capacity(frames.len());

    for frame in frames {
        let bounds = Rect::new(frame.x, frame.y, frame.width, frame.height);
        let Some(bounds) = bounds.intersection(&sheet_rect) else {
            debug!(name = %frame.name, "frame lies outside the sheet, skipping");
            continue;
        };

        let mut image = imageops::crop_imm(sheet, bounds.x, bounds.y, bounds.w, bounds.h).to_image();
        if frame.rotated {
            image = imageops::rotate90(&image);
        }

        let name = match prefix {
            Some(p) => format!("{p}{}", frame.name),
            None => frame.name.clone(),
        };

        sprites.push(Sprite {
            key: name,
            image,
            source_size: (
                frame.source_width.unwrap_or(frame.width),
                frame.source_height.unwrap_or(frame.height),
            ),
            trim_x: frame.trim_x.unwrap_or(0),
            trim_y: frame.trim_y.unwrap_or(0),
            trimmed: frame.trim_x.is_some() || frame.trim_y.is_some(),
            duration: frame.duration,
        });
    }

    sprites
}
