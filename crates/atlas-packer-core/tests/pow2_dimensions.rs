use atlas_packer_core::config::PackerConfig;
use atlas_packer_core::pack_sprites;
use atlas_packer_core::pipeline::final_dimensions;
use atlas_packer_core::sprite::Sprite;
use image::{DynamicImage, RgbaImage};

#[test]
fn final_dimensions_round_up_to_powers_of_two() {
    assert_eq!(final_dimensions(40, 30, true), (64, 32));
    assert_eq!(final_dimensions(512, 33, true), (512, 64));
    assert_eq!(final_dimensions(1, 1, true), (1, 1));
    assert_eq!(final_dimensions(0, 3, true), (1, 4));
}

#[test]
fn final_dimensions_pass_through_when_disabled() {
    assert_eq!(final_dimensions(40, 30, false), (40, 30));
}

#[test]
fn atlas_canvas_is_padded_to_pow2() {
    let cfg = PackerConfig {
        max_width: 256,
        max_height: 256,
        padding: 0,
        trim: false,
        power_of_two: true,
        ..Default::default()
    };
    let sprite = Sprite::from_image(
        "odd",
        &DynamicImage::ImageRgba8(RgbaImage::new(40, 30)),
        false,
        0,
    );
    let output = pack_sprites(vec![sprite], &cfg).expect("fits");

    assert_eq!((output.atlas.width, output.atlas.height), (64, 32));
    assert_eq!(output.image.dimensions(), (64, 32));
    // The layout itself keeps the tight bounding box.
    assert_eq!((output.layout.width, output.layout.height), (40, 30));
}

#[test]
fn exact_powers_stay_unchanged() {
    let cfg = PackerConfig {
        max_width: 64,
        max_height: 64,
        padding: 0,
        trim: false,
        power_of_two: true,
        ..Default::default()
    };
    let sprite = Sprite::from_image(
        "square",
        &DynamicImage::ImageRgba8(RgbaImage::new(32, 32)),
        false,
        0,
    );
    let output = pack_sprites(vec![sprite], &cfg).expect("fits");
    assert_eq!((output.atlas.width, output.atlas.height), (32, 32));
}
