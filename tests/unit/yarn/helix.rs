use super::*;

fn strands(n: usize, twist: f64) -> Vec<Strand> {
    (0..n)
        .map(|i| Strand::new(Rgb8::new(40 * i as u8, 10, 10), 4, twist))
        .collect()
}

fn all_finite(m: &YarnModel) -> bool {
    m.plies()
        .iter()
        .flat_map(|p| p.points.iter())
        .all(|v| v.is_finite())
}

#[test]
fn single_strand_falls_back_to_planar_wave() {
    let mut res = ResourceRegistry::new();
    let g = StitchGeometry::derive(5.0, 5.0, 1).unwrap();
    let mut m = YarnModel::build(&strands(1, 0.0), &g, &YarnOpts::default(), &mut res).unwrap();

    let ply = &m.plies()[0];
    assert_eq!(ply.shape, PlyShape::Wave);
    assert_eq!(ply.points.len(), YarnOpts::default().samples as usize);
    assert!(ply.points.iter().all(|p| p.z == 0.0));
    assert!(
        ply.points
            .iter()
            .all(|p| p.y.abs() <= DEGENERATE_WAVE_RADIUS + 1e-7)
    );
    assert!(all_finite(&m));

    m.tick(3.7);
    assert!(all_finite(&m));
}

#[test]
fn plies_wind_at_shared_radius() {
    let mut res = ResourceRegistry::new();
    let g = StitchGeometry::derive(5.0, 5.0, 2).unwrap();
    let opts = YarnOpts::default();
    let m = YarnModel::build(&strands(2, 0.0), &g, &opts, &mut res).unwrap();

    let want = g.ply_width as f32 * 0.5 * opts.world_scale;
    for ply in m.plies() {
        assert_eq!(ply.shape, PlyShape::Helix { radius: want });
        for p in &ply.points {
            let r = (p.y * p.y + p.z * p.z).sqrt();
            assert!((r - want).abs() < 1e-5, "{r} vs {want}");
        }
    }
    let (a, b) = (m.plies()[0].points[0], m.plies()[1].points[0]);
    assert!((a.y + b.y).abs() < 1e-5);
    assert!((a.z + b.z).abs() < 1e-5);
}

#[test]
fn axis_spans_configured_length() {
    let mut res = ResourceRegistry::new();
    let g = StitchGeometry::derive(4.0, 6.0, 3).unwrap();
    let opts = YarnOpts {
        length: 2.0,
        samples: 11,
        ..Default::default()
    };
    let m = YarnModel::build(&strands(3, 0.0), &g, &opts, &mut res).unwrap();
    let pts = &m.plies()[2].points;
    assert!((pts[0].x + 1.0).abs() < 1e-6);
    assert!((pts[10].x - 1.0).abs() < 1e-6);
}

#[test]
fn twist_tightens_the_helix() {
    let mut res = ResourceRegistry::new();
    let g = StitchGeometry::derive(5.0, 8.0, 2).unwrap();
    let loose = YarnModel::build(&strands(2, 0.0), &g, &YarnOpts::default(), &mut res).unwrap();
    let tight = YarnModel::build(&strands(2, 1.0), &g, &YarnOpts::default(), &mut res).unwrap();
    assert_eq!(loose.turns_per_unit(), BASE_TURNS_PER_UNIT);
    assert!(tight.turns_per_unit() > loose.turns_per_unit());
}

#[test]
fn tick_spins_without_changing_radius() {
    let mut res = ResourceRegistry::new();
    let g = StitchGeometry::derive(5.0, 8.0, 3).unwrap();
    let mut m = YarnModel::build(&strands(3, 0.2), &g, &YarnOpts::default(), &mut res).unwrap();
    let before = m.plies()[0].points.clone();
    m.tick(1.0);
    assert_ne!(before, m.plies()[0].points);
    let r = |p: Vec3| (p.y * p.y + p.z * p.z).sqrt();
    assert!((r(before[5]) - r(m.plies()[0].points[5])).abs() < 1e-5);
}

#[test]
fn handle_lifecycle() {
    let mut res = ResourceRegistry::new();
    let g = StitchGeometry::derive(5.0, 5.0, 2).unwrap();
    let m = YarnModel::build(&strands(2, 0.0), &g, &YarnOpts::default(), &mut res).unwrap();
    assert_eq!(res.live(ResourceKind::Yarn), 1);
    m.dispose(&mut res);
    assert_eq!(res.live(ResourceKind::Yarn), 0);
}

#[test]
fn rejects_empty_strands_and_bad_opts() {
    let mut res = ResourceRegistry::new();
    let g = StitchGeometry::derive(5.0, 5.0, 1).unwrap();
    assert!(matches!(
        YarnModel::build(&[], &g, &YarnOpts::default(), &mut res),
        Err(SwatchError::EmptyInput)
    ));
    let bad = YarnOpts {
        samples: 1,
        ..Default::default()
    };
    assert!(YarnModel::build(&strands(1, 0.0), &g, &bad, &mut res).is_err());
    assert_eq!(res.live_total(), 0);
}
