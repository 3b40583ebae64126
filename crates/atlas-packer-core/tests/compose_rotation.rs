use atlas_packer_core::compositing::blit_sprite;
use atlas_packer_core::config::PackerConfig;
use atlas_packer_core::pack_sprites;
use atlas_packer_core::sprite::Sprite;
use image::{DynamicImage, Rgba, RgbaImage};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

#[test]
fn upright_blit_copies_pixels_in_place() {
    let mut src = RgbaImage::new(2, 1);
    src.put_pixel(0, 0, RED);
    src.put_pixel(1, 0, BLUE);

    let mut canvas = RgbaImage::new(4, 4);
    blit_sprite(&src, &mut canvas, 1, 2, false);

    assert_eq!(*canvas.get_pixel(1, 2), RED);
    assert_eq!(*canvas.get_pixel(2, 2), BLUE);
    assert_eq!(*canvas.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
}

/// Rotating 90° clockwise turns a horizontal strip into a vertical one with
/// the left end on top.
#[test]
fn rotated_blit_maps_pixels_clockwise() {
    let mut src = RgbaImage::new(2, 1);
    src.put_pixel(0, 0, RED);
    src.put_pixel(1, 0, BLUE);

    let mut canvas = RgbaImage::new(4, 4);
    blit_sprite(&src, &mut canvas, 0, 0, true);

    assert_eq!(*canvas.get_pixel(0, 0), RED);
    assert_eq!(*canvas.get_pixel(0, 1), BLUE);
}

#[test]
fn blit_clips_at_canvas_edge() {
    let mut src = RgbaImage::new(4, 4);
    for px in src.pixels_mut() {
        *px = RED;
    }
    let mut canvas = RgbaImage::new(4, 4);
    blit_sprite(&src, &mut canvas, 2, 2, false);

    assert_eq!(*canvas.get_pixel(3, 3), RED);
    assert_eq!(*canvas.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
}

/// End-to-end: a sprite that only fits rotated is rendered rotated, and the
/// canvas matches the stored placement size.
#[test]
fn rotated_placement_renders_rotated_pixels() {
    let mut img = RgbaImage::new(40, 90);
    for px in img.pixels_mut() {
        *px = BLUE;
    }
    // Marker in the source's top-left corner.
    img.put_pixel(0, 0, RED);

    let cfg = PackerConfig {
        max_width: 100,
        max_height: 50,
        padding: 0,
        allow_rotation: true,
        trim: false,
        power_of_two: false,
        ..Default::default()
    };
    let sprite = Sprite::from_image("tall", &DynamicImage::ImageRgba8(img), false, 0);
    let output = pack_sprites(vec![sprite], &cfg).expect("fits rotated");

    let entry = output.atlas.sprite("tall").unwrap();
    assert!(entry.rotated);
    assert_eq!((entry.width, entry.height), (90, 40));
    assert_eq!(output.image.dimensions(), (90, 40));

    // 90° CW sends the source's top-left corner to the destination's
    // top-right corner.
    assert_eq!(*output.image.get_pixel(89, 0), RED);
    assert_eq!(*output.image.get_pixel(0, 0), BLUE);
}
