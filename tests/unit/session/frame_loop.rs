use super::*;
use crate::catalog::catalog::WeightCatalog;
use crate::cloth::mesh::MeshOpts;
use crate::session::config::SwatchOpts;
use crate::strand::model::StrandSpec;
use crate::texture::synth::TextureOpts;

fn session() -> SwatchSession {
    let opts = SwatchOpts {
        texture: TextureOpts {
            target_size_px: 48,
            ..Default::default()
        },
        mesh: MeshOpts {
            segments: 6,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut s = SwatchSession::new(WeightCatalog::standard(), opts).unwrap();
    s.render(&[StrandSpec::new("#336699", 3, 0.0)], 4.5)
        .unwrap();
    s
}

#[test]
fn step_ticks_until_stopped() {
    let mut s = session();
    let clock = ManualClock::new();
    let mut lp = FrameLoop::for_session(&s, clock.clone(), ImmediateScheduler::new());

    let first = lp.step(&mut s).unwrap();
    assert_eq!(first.index, 0);
    clock.advance(0.5);
    let second = lp.step(&mut s).unwrap();
    assert_eq!((second.index, second.now_secs), (1, 0.5));
    assert!(!s.fabric().unwrap().is_flat());

    lp.stop_handle().stop();
    assert!(lp.step(&mut s).is_none());
    assert_eq!(lp.frames(), 2);
}

#[test]
fn run_until_callback_breaks() {
    let mut s = session();
    let clock = ManualClock::new();
    let mut lp = FrameLoop::for_session(
        &s,
        clock.clone(),
        ImmediateScheduler::advancing(clock.clone(), 0.25),
    );

    let mut times = Vec::new();
    let n = lp.run_until_cancelled(&mut s, |_, info| {
        times.push(info.now_secs);
        if info.index == 3 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(n, 4);
    assert_eq!(times, vec![0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn destroy_cancels_the_loop() {
    let mut s = session();
    let mut lp = FrameLoop::for_session(&s, ManualClock::new(), ImmediateScheduler::new());

    let n = lp.run_until_cancelled(&mut s, |session, info| {
        if info.index == 2 {
            session.destroy();
        }
        ControlFlow::Continue(())
    });
    assert_eq!(n, 3);
    assert_eq!(s.resources().live_total(), 0);
    assert!(lp.step(&mut s).is_none());
}

#[test]
fn pre_stopped_loop_never_ticks() {
    let mut s = session();
    let stop = StopHandle::new();
    stop.stop();
    let mut lp = FrameLoop::new(ManualClock::new(), ImmediateScheduler::new(), stop);
    let n = lp.run_until_cancelled(&mut s, |_, _| ControlFlow::Continue(()));
    assert_eq!(n, 0);
    assert!(s.fabric().unwrap().is_flat());
}

#[test]
fn manual_clock_clones_share_time() {
    let a = ManualClock::new();
    let b = a.clone();
    a.advance(1.5);
    assert_eq!(b.now_secs(), 1.5);
    b.set(0.25);
    assert_eq!(a.now_secs(), 0.25);
}

#[test]
fn fixed_rate_scheduler_paces_frames() {
    let mut sched = FixedRateScheduler::new(200);
    assert_eq!(sched.interval(), Duration::from_millis(5));
    let t0 = Instant::now();
    for _ in 0..3 {
        sched.wait_next_frame();
    }
    assert!(t0.elapsed() >= Duration::from_millis(10));
    assert_eq!(FixedRateScheduler::new(0).interval(), Duration::from_secs(1));
}

#[test]
fn system_clock_is_monotonic() {
    let c = SystemClock::new();
    let a = c.now_secs();
    let b = c.now_secs();
    assert!(b >= a && a >= 0.0);
}
