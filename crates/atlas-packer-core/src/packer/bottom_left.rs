//! Bottom-left-fill placement search.
//!
//! Works entirely in padded space: the candidate size already includes the
//! padding on all four sides, and every placed rectangle is inflated by the
//! padding when tested for overlap. Candidate anchors are the origin plus the
//! right edge and top edge of each placed rectangle; a row-major scan over
//! every integer position backstops the anchors so no feasible gap is missed.

use crate::config::PackerConfig;
use crate::model::{PlacedRect, Rect};

/// Finds the bottom-most, then left-most position for a padded `w` x `h` box,
/// or `None` when no position exists anywhere in the bin.
pub(super) fn find_position(
    placed: &[PlacedRect],
    w: u32,
    h: u32,
    cfg: &PackerConfig,
) -> Option<(u32, u32)> {
    if w > cfg.max_width || h > cfg.max_height {
        return None;
    }

    let mut best: Option<(u32, u32)> = None;
    let mut consider = |x: u32, y: u32| {
        if !can_place(placed, x, y, w, h, cfg) {
            return;
        }
        match best {
            Some((bx, by)) if y > by || (y == by && x >= bx) => {}
            _ => best = Some((x, y)),
        }
    };

    consider(0, 0);
    for r in placed {
        consider(r.x + r.w + cfg.padding, r.y);
        consider(r.x, r.y + r.h + cfg.padding);
    }
    if best.is_some() {
        return best;
    }

    // Anchors can miss gaps in dense layouts; scan every position before
    // giving up. Row-major order keeps the bottom-left preference.
    for y in 0..=(cfg.max_height - h) {
        for x in 0..=(cfg.max_width - w) {
            if can_place(placed, x, y, w, h, cfg) {
                return Some((x, y));
            }
        }
    }
    None
}

/// True if a padded `w` x `h` box at `(x, y)` stays inside the bin and clear
/// of every placed rectangle's padded footprint.
fn can_place(placed: &[PlacedRect], x: u32, y: u32, w: u32, h: u32, cfg: &PackerConfig) -> bool {
    if x + w > cfg.max_width || y + h > cfg.max_height {
        return false;
    }
    let candidate = Rect::new(x, y, w, h);
    placed
        .iter()
        .all(|r| !candidate.intersects(&inflate(r, cfg.padding)))
}

/// A placed rectangle's footprint grown by `padding` on every side.
/// Interior coordinates are always at least `padding` from the origin, so the
/// subtraction cannot underflow.
fn inflate(r: &PlacedRect, padding: u32) -> Rect {
    Rect::new(
        r.x - padding,
        r.y - padding,
        r.w + padding * 2,
        r.h + padding * 2,
    )
}
