use atlas_packer_core::config::PackerConfig;
use atlas_packer_core::model::PackLayout;
use atlas_packer_core::pack_rects;
use rand::{Rng, SeedableRng};

fn cfg() -> PackerConfig {
    PackerConfig {
        max_width: 1024,
        max_height: 1024,
        padding: 2,
        allow_rotation: true,
        ..Default::default()
    }
}

fn random_items(seed: u64, n: usize) -> Vec<(String, u32, u32)> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let w = rng.gen_range(4..=32);
            let h = rng.gen_range(4..=32);
            (format!("r{i}"), w, h)
        })
        .collect()
}

fn pack(seed: u64) -> PackLayout {
    pack_rects(random_items(seed, 80), &cfg()).expect("80 small sprites fit a 1024x1024 bin")
}

/// No pair of placements may overlap, even after growing both by the padding.
#[test]
fn padded_placements_stay_disjoint() {
    let layout = pack(7);
    let pad = 2i64;
    let boxes: Vec<(i64, i64, i64, i64)> = layout
        .placements
        .iter()
        .map(|p| {
            (
                p.x as i64 - pad,
                p.y as i64 - pad,
                p.w as i64 + pad * 2,
                p.h as i64 + pad * 2,
            )
        })
        .collect();

    for i in 0..boxes.len() {
        for j in (i + 1)..boxes.len() {
            let (ax, ay, aw, ah) = boxes[i];
            let (bx, by, bw, bh) = boxes[j];
            let overlap = ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by;
            assert!(
                !overlap,
                "{} and {} overlap within padding",
                layout.placements[i].key, layout.placements[j].key
            );
        }
    }
}

#[test]
fn placements_stay_inside_the_bin() {
    let layout = pack(11);
    for p in &layout.placements {
        assert!(p.x + p.w <= 1024, "{} exceeds bin width", p.key);
        assert!(p.y + p.h <= 1024, "{} exceeds bin height", p.key);
    }
    assert_eq!(
        layout.width,
        layout.placements.iter().map(|p| p.x + p.w).max().unwrap()
    );
    assert_eq!(
        layout.height,
        layout.placements.iter().map(|p| p.y + p.h).max().unwrap()
    );
}

/// Identical input in identical order must produce a bit-identical layout.
#[test]
fn repeated_runs_are_identical() {
    let a = pack(42);
    let b = pack(42);
    assert_eq!(a.placements, b.placements);
    assert_eq!((a.width, a.height), (b.width, b.height));
    assert_eq!(a.efficiency.to_bits(), b.efficiency.to_bits());
}

/// Rotation swaps sides but never changes area.
#[test]
fn placed_area_matches_requested_area() {
    let items = random_items(3, 80);
    let requested: u64 = items.iter().map(|(_, w, h)| (*w as u64) * (*h as u64)).sum();
    let layout = pack_rects(items, &cfg()).expect("fits");
    assert_eq!(layout.used_area(), requested);
    assert!(layout.efficiency > 0.0 && layout.efficiency <= 1.0);
}

/// Same-size requests tie on every sort key, so they keep input order and
/// fill the first row left to right.
#[test]
fn ties_preserve_input_order() {
    let items = vec![
        ("a".to_string(), 32u32, 32u32),
        ("b".to_string(), 32, 32),
        ("c".to_string(), 32, 32),
    ];
    let cfg = PackerConfig {
        max_width: 512,
        max_height: 512,
        padding: 0,
        allow_rotation: false,
        ..Default::default()
    };
    let layout = pack_rects(items, &cfg).unwrap();
    let keys: Vec<&str> = layout.placements.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, ["a", "b", "c"]);
    let xs: Vec<u32> = layout.placements.iter().map(|p| p.x).collect();
    assert_eq!(xs, [0, 32, 64]);
}
