//! Rectangle packing engine.
//!
//! One algorithm: bottom-left fill over anchor candidates with an exhaustive
//! fallback scan (see [`bottom_left`]). The engine owns request ordering, the
//! rotation retry and result assembly; all placement state lives in a list
//! local to one [`pack`] call.

use crate::config::PackerConfig;
use crate::model::{PackLayout, PackRequest, PlacedRect};
use tracing::debug;

pub mod bottom_left;

/// How a request ended up fitting, if it did.
enum Fit {
    Upright { x: u32, y: u32 },
    Rotated { x: u32, y: u32 },
}

/// Searches a position for `req`, upright first, then rotated when enabled.
/// Positions are in padded space; the interior box sits `padding` further in.
fn try_fit(placed: &[PlacedRect], req: &PackRequest, cfg: &PackerConfig) -> Option<Fit> {
    let pad2 = cfg.padding * 2;
    if let Some((x, y)) = bottom_left::find_position(placed, req.w + pad2, req.h + pad2, cfg) {
        return Some(Fit::Upright { x, y });
    }
    if cfg.allow_rotation && req.w != req.h {
        if let Some((x, y)) = bottom_left::find_position(placed, req.h + pad2, req.w + pad2, cfg) {
            return Some(Fit::Rotated { x, y });
        }
    }
    None
}

/// Packs `requests` into a single `max_width` x `max_height` bin.
///
/// Requests are placed largest-area first (ties by longest side, then input
/// order). Returns `None` when any request cannot be placed, including an
/// empty batch (which has no bounding box); never a partial layout.
pub fn pack(requests: &[PackRequest], cfg: &PackerConfig) -> Option<PackLayout> {
    if requests.is_empty() {
        return None;
    }

    let mut order: Vec<&PackRequest> = requests.iter().collect();
    order.sort_by(|a, b| {
        b.area()
            .cmp(&a.area())
            .then_with(|| b.w.max(b.h).cmp(&a.w.max(a.h)))
    });

    let mut placed: Vec<PlacedRect> = Vec::with_capacity(requests.len());
    for req in order {
        let Some(fit) = try_fit(&placed, req, cfg) else {
            debug!(key = %req.key, w = req.w, h = req.h, "no feasible position, aborting pack");
            return None;
        };
        let rect = match fit {
            Fit::Upright { x, y } => PlacedRect {
                key: req.key.clone(),
                x: x + cfg.padding,
                y: y + cfg.padding,
                w: req.w,
                h: req.h,
                rotated: false,
            },
            Fit::Rotated { x, y } => PlacedRect {
                key: req.key.clone(),
                x: x + cfg.padding,
                y: y + cfg.padding,
                w: req.h,
                h: req.w,
                rotated: true,
            },
        };
        placed.push(rect);
    }

    let width = placed.iter().map(|p| p.x + p.w).max().unwrap_or(0);
    let height = placed.iter().map(|p| p.y + p.h).max().unwrap_or(0);
    let used: u64 = placed.iter().map(|p| p.rect().area()).sum();
    let total = (width as u64) * (height as u64);
    let efficiency = if total > 0 {
        used as f64 / total as f64
    } else {
        0.0
    };

    Some(PackLayout {
        placements: placed,
        width,
        height,
        efficiency,
    })
}
