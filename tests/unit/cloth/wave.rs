use super::*;

const HALF: f32 = 2.0;

fn times() -> impl Iterator<Item = f32> {
    (0..400).map(|i| i as f32 * 0.05)
}

#[test]
fn boundary_never_moves() {
    let b = BillowParams::default();
    for t in times() {
        for s in [-2.0, -1.3, 0.0, 0.7, 2.0] {
            assert_eq!(b.displacement(HALF, s, t, HALF, HALF), 0.0);
            assert_eq!(b.displacement(-HALF, s, t, HALF, HALF), 0.0);
            assert_eq!(b.displacement(s, HALF, t, HALF, HALF), 0.0);
            assert_eq!(b.displacement(s, -HALF, t, HALF, HALF), 0.0);
        }
        assert_eq!(b.displacement(2.5, 0.0, t, HALF, HALF), 0.0);
    }
}

#[test]
fn center_is_undamped() {
    let b = BillowParams::default();
    for t in times() {
        assert_eq!(b.displacement(0.0, 0.0, t, HALF, HALF), b.raw(0.0, 0.0, t));
    }
}

#[test]
fn motion_concentrates_toward_center() {
    let b = BillowParams::default();
    let peak = |x: f32| {
        times()
            .map(|t| b.displacement(x, 0.0, t, HALF, HALF).abs())
            .fold(0.0, f32::max)
    };
    let center = peak(0.0);
    let edge = peak(1.8);
    assert!(center > 0.0);
    assert!(center > edge, "center {center} edge {edge}");
}

#[test]
fn heavier_yarn_billows_slower_and_shallower() {
    let base = BillowParams::default();
    assert_eq!(base.for_combination(0.0), base);
    assert_eq!(base.for_combination(f64::NAN), base);

    let heavy = base.for_combination(f64::from(REFERENCE_THICKNESS));
    for (h, b) in heavy.waves.iter().zip(base.waves.iter()) {
        assert!((h.amplitude - b.amplitude * 0.5).abs() < 1e-6);
        assert!((h.speed - b.speed * 0.75).abs() < 1e-6);
    }

    let light = base.for_combination(2.0);
    assert!(light.waves[0].amplitude > heavy.waves[0].amplitude);
    assert!(light.waves[0].speed > heavy.waves[0].speed);
}

#[test]
fn counter_phase_component_travels_backwards() {
    let b = BillowParams::default();
    assert!(b.waves[3].speed < 0.0);
    assert!(b.waves.iter().take(3).all(|w| w.speed > 0.0));
}

#[test]
fn non_finite_parameters_are_rejected() {
    let mut b = BillowParams::default();
    assert!(b.validate().is_ok());
    b.waves[2].kx = f32::INFINITY;
    assert!(b.validate().is_err());
}
