use super::*;
use crate::foundation::core::Rgb8;

fn strands(n: usize) -> Vec<Strand> {
    (0..n)
        .map(|i| Strand::new(Rgb8::new(10 * i as u8, 0, 0), 0, 0.0))
        .collect()
}

#[test]
fn derive_scales_with_needle_and_thickness() {
    let g = StitchGeometry::derive(5.0, 5.0, 1).unwrap();
    assert_eq!(g.stitch_width, 30.0);
    assert_eq!(g.stitch_height, 24.0);
    assert_eq!(g.yarn_width, 8.0);
    assert_eq!(g.ply_width, 8.0);

    let thick = StitchGeometry::derive(5.0, 10.0, 2).unwrap();
    assert_eq!(thick.yarn_width, 30.0 * MAX_YARN_FRACTION);
}

#[test]
fn ply_width_thins_with_strand_count() {
    for n in 1..=6 {
        let g = StitchGeometry::derive(6.0, 4.0, n).unwrap();
        assert!((g.ply_width - g.yarn_width / (n as f64).sqrt()).abs() < 1e-12);
    }
}

#[test]
fn derive_rejects_degenerate_inputs() {
    assert!(StitchGeometry::derive(0.0, 5.0, 1).is_err());
    assert!(StitchGeometry::derive(f64::NAN, 5.0, 1).is_err());
    assert!(StitchGeometry::derive(5.0, -1.0, 1).is_err());
    assert!(StitchGeometry::derive(5.0, 5.0, 0).is_err());
    assert!(StitchGeometry::from_parts(10.0, 0.0, 1.0, 1).is_err());
}

#[test]
fn ply_offsets_spread_symmetrically() {
    let g = StitchGeometry::derive(5.0, 6.0, 3).unwrap();
    let offs = g.ply_offsets(&strands(3));
    let step = g.ply_width * PLY_SPACING;
    assert_eq!(offs.len(), 3);
    assert!((offs[0] + step).abs() < 1e-12);
    assert!(offs[1].abs() < 1e-12);
    assert!((offs[2] - step).abs() < 1e-12);

    let single = g.ply_offsets(&strands(1));
    assert_eq!(single.as_slice(), &[0.0]);
}

#[test]
fn explicit_ply_offset_wins() {
    let g = StitchGeometry::derive(5.0, 6.0, 2).unwrap();
    let mut s = strands(2);
    s[1].ply_offset = Some(2.0);
    let offs = g.ply_offsets(&s);
    assert!((offs[1] - 2.0 * g.ply_width * PLY_SPACING).abs() < 1e-12);
}

#[test]
fn layout_fits_whole_cells() {
    let g = StitchGeometry::derive(5.0, 5.0, 1).unwrap();
    let opts = TextureOpts {
        target_size_px: 120,
        ..Default::default()
    };
    let l = StitchLayout::fit(&g, &opts).unwrap();
    assert_eq!((l.columns, l.rows), (4, 5));
    assert_eq!((l.canvas.width, l.canvas.height), (120, 120));
    assert_eq!(l.cell_width, 30.0);
    assert_eq!(l.cell_height, 24.0);
    assert_eq!(l.scale(&g), 1.0);
}

#[test]
fn layout_respects_max_size() {
    let g = StitchGeometry::derive(5.0, 5.0, 1).unwrap();
    let opts = TextureOpts {
        target_size_px: 1000,
        max_size_px: 100,
        repeat: 2.0,
    };
    let l = StitchLayout::fit(&g, &opts).unwrap();
    assert_eq!(l.columns, 3);
    assert_eq!(l.canvas.width, 90);
    assert!(l.canvas.height <= 100);

    let huge = StitchGeometry::from_parts(200.0, 160.0, 20.0, 1).unwrap();
    let l = StitchLayout::fit(&huge, &opts).unwrap();
    assert_eq!((l.columns, l.canvas.width), (1, 100));
    assert_eq!(l.scale(&huge), 0.5);
}

#[test]
fn tiny_needle_keeps_layout_bounded() {
    let g = StitchGeometry::derive(0.001, 4.0, 1).unwrap();
    assert_eq!(g.stitch_width, MIN_STITCH_PX);
    assert_eq!(g.stitch_height, MIN_STITCH_PX * STITCH_ASPECT);

    let opts = TextureOpts::default();
    let l = StitchLayout::fit(&g, &opts).unwrap();
    let cap = (f64::from(opts.max_size_px) / MIN_CELL_PX) as u32;
    assert!(l.columns <= cap && l.rows <= cap, "{l:?}");
    assert!(l.canvas.width <= opts.max_size_px);

    let explicit = StitchGeometry::from_parts(0.01, 0.008, 0.005, 1).unwrap();
    let l = StitchLayout::fit(&explicit, &opts).unwrap();
    assert!(l.columns <= cap && l.rows <= cap, "{l:?}");
    assert!(l.cell_width >= MIN_CELL_PX && l.cell_height >= MIN_CELL_PX);
}
