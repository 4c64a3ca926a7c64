use super::*;
use crate::cloth::mesh::MeshOpts;
use crate::texture::synth::TextureOpts;

fn small_opts() -> SwatchOpts {
    SwatchOpts {
        texture: TextureOpts {
            target_size_px: 64,
            ..Default::default()
        },
        mesh: MeshOpts {
            segments: 8,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn session() -> SwatchSession {
    SwatchSession::new(WeightCatalog::standard(), small_opts()).unwrap()
}

fn worsted_pair() -> Vec<StrandSpec> {
    vec![
        StrandSpec::new("#aa3322", 4, 0.2),
        StrandSpec::new("2233aa", 4, 0.0),
    ]
}

#[test]
fn fresh_session_shows_placeholder() {
    let s = session();
    let snap = s.snapshot();
    assert_eq!(snap.scene, SceneKind::Placeholder);
    assert_eq!(
        (snap.live_textures, snap.live_meshes, snap.live_yarns),
        (1, 1, 0)
    );
    assert!(snap.report.is_none());
    assert!(snap.mesh_flat);
    assert!(snap.resize_listener_attached);
    assert!(!snap.destroyed);
    assert!(s.fabric().unwrap().texture().is_placeholder());
}

#[test]
fn empty_render_installs_placeholder() {
    let mut s = session();
    let out = s.render(&[], 5.0).unwrap();
    assert_eq!(out.scene, SceneKind::Placeholder);
    assert!(out.report.is_none());
    assert_eq!(out.needle_mm, None);
    assert_eq!(out.texture_size, (16, 16));
    assert_eq!(s.resources().live_total(), 2);
}

#[test]
fn render_installs_swatch_and_report() {
    let mut s = session();
    let out = s.render(&worsted_pair(), 5.0).unwrap();
    assert_eq!(out.scene, SceneKind::Swatch);
    assert_eq!(out.needle_mm, Some(5.0));

    let report = out.report.unwrap();
    assert_eq!(report.combined.exact_thickness, 10.0);
    assert_eq!(report.combined.strand_count, 2);
    assert_eq!(report.suggestion.map(|c| c.result_id), Some(6));

    let snap = s.snapshot();
    assert_eq!(
        (snap.live_textures, snap.live_meshes, snap.live_yarns),
        (1, 1, 1)
    );
    assert_eq!(s.yarn().unwrap().plies().len(), 2);
    assert_eq!(s.fabric().unwrap().tint(), Rgb8::new(0x66, 0x33, 0x66));
}

#[test]
fn repeated_renders_do_not_leak() {
    let mut s = session();
    for needle in [4.0, 5.0, 6.0] {
        s.render(&worsted_pair(), needle).unwrap();
    }
    s.render(&[StrandSpec::new("#ffffff", 0, 0.0)], 2.25).unwrap();
    assert_eq!(s.resources().live_total(), 3);
    let stats = s.resources().stats();
    assert_eq!(stats.acquired - stats.released, 3);
    assert_eq!(stats.ignored_releases, 0);
}

#[test]
fn malformed_color_renders_gray() {
    let mut s = session();
    s.render(&[StrandSpec::new("notahex", 4, 0.0)], 5.0)
        .unwrap();
    assert_eq!(s.fabric().unwrap().tint(), Rgb8::new(128, 128, 128));
    assert_eq!(
        s.yarn().unwrap().plies()[0].color,
        Rgb8::new(128, 128, 128)
    );
}

#[test]
fn invalid_needle_uses_recommended() {
    let mut s = session();
    for bad in [f64::NAN, 0.0, -3.0, f64::INFINITY] {
        let out = s.render(&worsted_pair(), bad).unwrap();
        let recommended = out.report.as_ref().map(|r| r.needle.mm);
        assert_eq!(out.needle_mm, recommended);
    }
}

#[test]
fn unknown_category_keeps_previous_scene() {
    let mut s = session();
    s.render(&worsted_pair(), 5.0).unwrap();
    let before = s.snapshot();
    let err = s
        .render(&[StrandSpec::new("#123456", 99, 0.0)], 5.0)
        .unwrap_err();
    assert!(matches!(err, SwatchError::UnknownCategory(99)));
    assert_eq!(s.snapshot(), before);
}

#[test]
fn failure_after_dispose_falls_back_to_placeholder() {
    let mut s = session();
    s.render(&worsted_pair(), 5.0).unwrap();
    s.opts.yarn.samples = 0;
    assert!(s.render(&worsted_pair(), 5.0).is_err());

    let snap = s.snapshot();
    assert_eq!(snap.scene, SceneKind::Placeholder);
    assert_eq!(
        (snap.live_textures, snap.live_meshes, snap.live_yarns),
        (1, 1, 0)
    );

    s.opts = small_opts();
    s.opts.texture.repeat = 0.0;
    assert!(s.render(&worsted_pair(), 5.0).is_err());
    assert_eq!(s.resources().live_total(), 2);
}

#[test]
fn tick_billows_swatch_but_not_placeholder() {
    let mut s = session();
    s.tick(10.0);
    assert!(s.fabric().unwrap().is_flat());

    s.render(&worsted_pair(), 5.0).unwrap();
    s.tick(10.0);
    s.tick(11.5);
    let fabric = s.fabric().unwrap();
    assert!(!fabric.is_flat());
    let [hw, hh] = fabric.half_extent();
    for (p, o) in fabric.positions().iter().zip(fabric.original_positions()) {
        if o.x.abs() == hw || o.y.abs() == hh {
            assert_eq!(p.z, 0.0);
        }
    }
}

#[test]
fn render_restarts_animation_clock() {
    let mut s = session();
    s.render(&worsted_pair(), 5.0).unwrap();
    s.tick(3.0);
    let at_start = s.fabric().unwrap().positions().to_vec();

    s.render(&worsted_pair(), 5.0).unwrap();
    s.tick(42.0);
    assert_eq!(s.fabric().unwrap().positions(), at_start.as_slice());
}

#[test]
fn destroy_releases_everything_and_is_idempotent() {
    let mut s = session();
    s.render(&worsted_pair(), 5.0).unwrap();
    let stop = s.stop_handle();
    assert!(s.resize(800, 600));

    s.destroy();
    assert!(stop.is_stopped());
    assert_eq!(s.resources().live_total(), 0);
    assert_eq!(s.scene_kind(), SceneKind::Empty);
    assert!(!s.resize(1, 1));
    assert_eq!(s.viewport(), Some((800, 600)));

    s.destroy();
    s.clear().unwrap();
    s.tick(1.0);
    assert!(matches!(
        s.render(&worsted_pair(), 5.0),
        Err(SwatchError::Destroyed)
    ));
    assert_eq!(s.resources().stats().ignored_releases, 0);
    let snap = s.snapshot();
    assert!(snap.destroyed);
    assert!(!snap.resize_listener_attached);
}

#[test]
fn clear_round_trips_to_fresh_state() {
    let fresh = session().snapshot();
    let mut s = session();
    s.render(&[], 5.0).unwrap();
    s.render(&worsted_pair(), 5.0).unwrap();
    s.tick(0.0);
    s.tick(2.0);
    s.clear().unwrap();
    assert_eq!(s.snapshot(), fresh);
}
