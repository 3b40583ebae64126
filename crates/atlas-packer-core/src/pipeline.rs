use crate::config::PackerConfig;
use crate::error::{AtlasPackerError, Result};
use crate::model::{AtlasDoc, AtlasMetadata, PackLayout, PackRequest, SpriteEntry};
use crate::packer;
use crate::sprite::Sprite;
use image::RgbaImage;
use std::collections::HashMap;
use tracing::{info, instrument};

/// Output of a full packing run: the atlas document, the composited RGBA
/// texture, and the raw layout it was built from.
pub struct PackOutput {
    pub atlas: AtlasDoc,
    pub image: RgbaImage,
    pub layout: PackLayout,
}

#[instrument(skip_all)]
/// Packs `sprites` into one atlas texture and returns the composited image
/// plus its metadata document.
///
/// Sprite keys must be unique. The atlas document's `metadata.sources` list
/// is left empty; callers that know the originating files fill it in.
pub fn pack_sprites(sprites: Vec<Sprite>, cfg: &PackerConfig) -> Result<PackOutput> {
    cfg.validate()?;

    let requests: Vec<PackRequest> = sprites
        .iter()
        .map(|s| PackRequest::new(s.key.clone(), s.width(), s.height()))
        .collect();
    let layout = packer::pack(&requests, cfg).ok_or(AtlasPackerError::OutOfSpace {
        max_width: cfg.max_width,
        max_height: cfg.max_height,
    })?;

    info!(
        sprites = layout.placements.len(),
        width = layout.width,
        height = layout.height,
        efficiency = format_args!("{:.2}%", layout.efficiency * 100.0),
        "packed sprites"
    );

    let (atlas_w, atlas_h) = final_dimensions(layout.width, layout.height, cfg.power_of_two);

    let sprite_map: HashMap<&str, &Sprite> = sprites.iter().map(|s| (s.key.as_str(), s)).collect();
    let mut canvas = RgbaImage::new(atlas_w, atlas_h);
    let mut entries = Vec::with_capacity(layout.placements.len());
    for p in &layout.placements {
        if let Some(sprite) = sprite_map.get(p.key.as_str()) {
            crate::compositing::blit_sprite(&sprite.image, &mut canvas, p.x, p.y, p.rotated);
            entries.push(SpriteEntry {
                name: p.key.clone(),
                x: p.x,
                y: p.y,
                width: p.w,
                height: p.h,
                rotated: p.rotated,
                source_width: sprite.trimmed.then_some(sprite.source_size.0),
                source_height: sprite.trimmed.then_some(sprite.source_size.1),
                trim_x: sprite.trimmed.then_some(sprite.trim_x),
                trim_y: sprite.trimmed.then_some(sprite.trim_y),
            });
        }
    }

    let atlas = AtlasDoc {
        width: atlas_w,
        height: atlas_h,
        sprites: entries,
        metadata: AtlasMetadata {
            version: env!("CARGO_PKG_VERSION").into(),
            sources: Vec::new(),
            settings: cfg.clone(),
        },
    };

    Ok(PackOutput {
        atlas,
        image: canvas,
        layout,
    })
}

/// Packs bare `(key, width, height)` items without any pixel data.
pub fn pack_rects<K: Into<String>>(items: Vec<(K, u32, u32)>, cfg: &PackerConfig) -> Result<PackLayout> {
    cfg.validate()?;

    let requests: Vec<PackRequest> = items
        .into_iter()
        .map(|(k, w, h)| PackRequest::new(k, w, h))
        .collect();
    packer::pack(&requests, cfg).ok_or(AtlasPackerError::OutOfSpace {
        max_width: cfg.max_width,
        max_height: cfg.max_height,
    })
}

/// Final atlas dimensions for a packed layout.
pub fn final_dimensions(width: u32, height: u32, power_of_two: bool) -> (u32, u32) {
    if power_of_two {
        (next_pow2(width), next_pow2(height))
    } else {
        (width, height)
    }
}

fn next_pow2(mut v: u32) -> u32 {
    if v <= 1 {
        return 1;
    }
    v -= 1;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v + 1
}
