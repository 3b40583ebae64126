use image::RgbaImage;

/// Blit `src` into `canvas` with its top-left at (dx, dy), optionally
/// rotating 90° clockwise during the copy.
///
/// When rotated, the rendered box is `src.height() x src.width()`, matching
/// the swapped dimensions stored for a rotated placement. Pixels falling
/// outside the canvas are clipped.
pub fn blit_sprite(src: &RgbaImage, canvas: &mut RgbaImage, dx: u32, dy: u32, rotated: bool) {
    let (cw, ch) = canvas.dimensions();
    let (sw, sh) = src.dimensions();
    let (rw, rh) = if rotated { (sh, sw) } else { (sw, sh) };

    for yy in 0..rh {
        for xx in 0..rw {
            let (ix, iy) = if rotated {
                (yy, sh - 1 - xx)
            } else {
                (xx, yy)
            };
            if dx + xx < cw && dy + yy < ch {
                let px = *src.get_pixel(ix, iy);
                canvas.put_pixel(dx + xx, dy + yy, px);
            }
        }
    }
}
