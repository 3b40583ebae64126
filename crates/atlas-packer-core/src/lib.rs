//! Core library for packing sprites into a texture atlas.
//!
//! - Packing: bottom-left fill with rotation support and uniform padding
//! - Pipeline: `pack_sprites` takes in-memory sprites and returns the
//!   composited RGBA atlas plus a serializable metadata document;
//!   `pack_rects` computes a layout from bare sizes
//! - Sprites: transparent-border trimming and sheet extraction (own atlas
//!   JSON, bare frame arrays, or Aseprite exports)
//! - Animations: frame lists or numbered patterns, with per-frame duration
//!   fallback
//!
//! Quick example:
//! ```
//! use atlas_packer_core::{PackerConfig, pack_rects};
//!
//! let cfg = PackerConfig {
//!     max_width: 256,
//!     max_height: 256,
//!     padding: 0,
//!     ..Default::default()
//! };
//! let layout = pack_rects(vec![("a", 64, 64), ("b", 32, 48)], &cfg).unwrap();
//! assert_eq!(layout.placements.len(), 2);
//! ```

pub mod animation;
pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;
pub mod sprite;

pub use animation::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use pipeline::*;
pub use sprite::*;

/// Convenience prelude for common types and functions.
/// Importing `atlas_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::animation::{AnimFrame, Animation, AnimationSet, build_animations};
    pub use crate::config::{
        AnimationConfig, AnimationPattern, InputConfig, OutputConfig, PackerConfig,
        PackerConfigBuilder, ProjectConfig,
    };
    pub use crate::model::{AtlasDoc, PackLayout, PackRequest, PlacedRect, Rect, SpriteEntry};
    pub use crate::sprite::{Sprite, extract_sprites, parse_sheet};
    pub use crate::{PackOutput, pack_rects, pack_sprites};
}
