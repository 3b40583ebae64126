use atlas_packer_core::config::PackerConfig;
use atlas_packer_core::error::AtlasPackerError;
use atlas_packer_core::pack_rects;

/// Zero-sized atlas dimensions
#[test]
fn zero_width_is_rejected() {
    let cfg = PackerConfig {
        max_width: 0,
        max_height: 1024,
        ..Default::default()
    };
    match cfg.validate() {
        Err(AtlasPackerError::InvalidInput(msg)) => {
            assert!(msg.contains("0x1024"), "unexpected message: {msg}");
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn zero_height_is_rejected() {
    let cfg = PackerConfig {
        max_width: 1024,
        max_height: 0,
        ..Default::default()
    };
    assert!(cfg.validate().is_err());
}

/// Padding that eats the whole bin
#[test]
fn padding_leaving_no_space_is_rejected() {
    let cfg = PackerConfig {
        max_width: 100,
        max_height: 100,
        padding: 50,
        ..Default::default()
    };
    match cfg.validate() {
        Err(AtlasPackerError::InvalidInput(msg)) => {
            assert!(msg.contains("padding"), "unexpected message: {msg}");
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

/// An empty batch has no bounding box; it fails rather than returning a
/// zero-area layout.
#[test]
fn empty_batch_is_a_failure() {
    let cfg = PackerConfig::default();
    let items: Vec<(String, u32, u32)> = Vec::new();
    let result = pack_rects(items, &cfg);
    assert!(matches!(result, Err(AtlasPackerError::OutOfSpace { .. })));
}

#[test]
fn oversized_request_fails() {
    let cfg = PackerConfig {
        max_width: 50,
        max_height: 50,
        padding: 0,
        allow_rotation: false,
        ..Default::default()
    };
    let result = pack_rects(vec![("too_large", 100, 100)], &cfg);
    assert!(matches!(result, Err(AtlasPackerError::OutOfSpace { .. })));
}

/// One failing request aborts the whole batch; nothing partial comes back.
#[test]
fn single_misfit_fails_the_whole_batch() {
    let cfg = PackerConfig {
        max_width: 64,
        max_height: 64,
        padding: 0,
        allow_rotation: false,
        ..Default::default()
    };
    let items = vec![("fits", 16, 16), ("also_fits", 16, 16), ("misfit", 80, 8)];
    let result = pack_rects(items, &cfg);
    assert!(matches!(result, Err(AtlasPackerError::OutOfSpace { .. })));
}

#[test]
fn single_pixel_fills_single_pixel_bin() {
    let cfg = PackerConfig {
        max_width: 1,
        max_height: 1,
        padding: 0,
        ..Default::default()
    };
    let layout = pack_rects(vec![("pixel", 1, 1)], &cfg).expect("1x1 fits 1x1");
    assert_eq!(layout.placements[0].rect().area(), 1);
    assert_eq!((layout.width, layout.height), (1, 1));
    assert!((layout.efficiency - 1.0).abs() < 1e-9);
}

/// With padding, the first sprite's interior box starts at (padding, padding).
#[test]
fn largest_sprite_lands_at_padding_offset() {
    let cfg = PackerConfig {
        max_width: 200,
        max_height: 200,
        padding: 1,
        allow_rotation: false,
        ..Default::default()
    };
    let items = vec![("small", 10, 10), ("large", 30, 30), ("medium", 20, 20)];
    let layout = pack_rects(items, &cfg).expect("three sprites fit");
    assert_eq!(layout.placements.len(), 3);

    let large = layout.placements.iter().find(|p| p.key == "large").unwrap();
    assert_eq!((large.x, large.y), (1, 1));
    // Largest area goes first.
    assert_eq!(layout.placements[0].key, "large");
}

#[test]
fn many_small_sprites_fit() {
    let cfg = PackerConfig {
        max_width: 512,
        max_height: 512,
        padding: 0,
        ..Default::default()
    };
    let items: Vec<(String, u32, u32)> = (0..100).map(|i| (format!("small_{i}"), 8, 8)).collect();
    let layout = pack_rects(items, &cfg).expect("100 8x8 sprites fit");
    assert_eq!(layout.placements.len(), 100);
    assert!(layout.width <= 512 && layout.height <= 512);
}
