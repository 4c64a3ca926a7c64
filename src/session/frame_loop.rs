//! Cooperative per-frame driver for a [`SwatchSession`].
//!
//! The loop owns no timer of its own: a [`FrameClock`] supplies wall time and a
//! [`FrameScheduler`] paces frames. Cancellation goes through a shared [`StopHandle`]; a raised
//! flag stops the loop before the next frame, never during one.

use crate::session::swatch_session::SwatchSession;
use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of frame timestamps, in seconds.
pub trait FrameClock {
    /// Current time in seconds from an arbitrary origin.
    fn now_secs(&self) -> f64;
}

/// Monotonic wall clock.
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Clock starting at zero now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock; clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Clock at `t = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `dt` seconds.
    pub fn advance(&self, dt: f64) {
        self.now.set(self.now.get() + dt);
    }

    /// Jump to `t` seconds.
    pub fn set(&self, t: f64) {
        self.now.set(t);
    }
}

impl FrameClock for ManualClock {
    fn now_secs(&self) -> f64 {
        self.now.get()
    }
}

/// Paces the frame loop.
pub trait FrameScheduler {
    /// Block until the next frame is due.
    fn wait_next_frame(&mut self);
}

/// Sleeps to hold a fixed frame rate. Late frames are not made up.
#[derive(Debug)]
pub struct FixedRateScheduler {
    interval: Duration,
    next: Option<Instant>,
}

impl FixedRateScheduler {
    /// Scheduler for `fps` frames per second (clamped to at least 1).
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            next: None,
        }
    }

    /// Time between frames.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn wait_next_frame(&mut self) {
        let now = Instant::now();
        let due = self.next.unwrap_or(now);
        if due > now {
            std::thread::sleep(due - now);
        }
        self.next = Some(due.max(now) + self.interval);
    }
}

/// Never waits; optionally advances a [`ManualClock`] by a fixed step per frame.
#[derive(Clone, Debug, Default)]
pub struct ImmediateScheduler {
    advance: Option<(ManualClock, f64)>,
}

impl ImmediateScheduler {
    /// Scheduler that returns immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler that moves `clock` forward by `dt` before each frame.
    pub fn advancing(clock: ManualClock, dt: f64) -> Self {
        Self {
            advance: Some((clock, dt)),
        }
    }
}

impl FrameScheduler for ImmediateScheduler {
    fn wait_next_frame(&mut self) {
        if let Some((clock, dt)) = &self.advance {
            clock.advance(*dt);
        }
    }
}

/// Shared cancellation flag. Once raised it stays raised.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Rc<Cell<bool>>,
}

impl StopHandle {
    /// Fresh, un-raised flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag.
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    /// Return `true` once [`StopHandle::stop`] has been called on any clone.
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Timing of one delivered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInfo {
    /// Zero-based frame counter.
    pub index: u64,
    /// Clock time the frame was ticked at.
    pub now_secs: f64,
}

/// Drives `SwatchSession::tick` once per frame until stopped.
pub struct FrameLoop<C, S> {
    clock: C,
    scheduler: S,
    stop: StopHandle,
    frames: u64,
}

impl<C: FrameClock, S: FrameScheduler> FrameLoop<C, S> {
    /// Loop cancelled through `stop`.
    pub fn new(clock: C, scheduler: S, stop: StopHandle) -> Self {
        Self {
            clock,
            scheduler,
            stop,
            frames: 0,
        }
    }

    /// Loop cancelled when `session` is destroyed.
    pub fn for_session(session: &SwatchSession, clock: C, scheduler: S) -> Self {
        Self::new(clock, scheduler, session.stop_handle())
    }

    /// Frames delivered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Cancellation flag of this loop.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Tick `session` once without waiting. Returns `None` if the loop is stopped.
    pub fn step(&mut self, session: &mut SwatchSession) -> Option<FrameInfo> {
        if self.stop.is_stopped() {
            return None;
        }
        let now_secs = self.clock.now_secs();
        session.tick(now_secs);
        let info = FrameInfo {
            index: self.frames,
            now_secs,
        };
        self.frames += 1;
        Some(info)
    }

    /// Run `wait → tick → on_frame` until the stop flag is raised or `on_frame` breaks.
    ///
    /// Returns the number of frames delivered by this call.
    pub fn run_until_cancelled<F>(&mut self, session: &mut SwatchSession, mut on_frame: F) -> u64
    where
        F: FnMut(&mut SwatchSession, FrameInfo) -> ControlFlow<()>,
    {
        let start = self.frames;
        while !self.stop.is_stopped() {
            self.scheduler.wait_next_frame();
            let Some(info) = self.step(session) else {
                break;
            };
            if on_frame(session, info).is_break() {
                break;
            }
        }
        let delivered = self.frames - start;
        tracing::debug!(
            delivered,
            stopped = self.stop.is_stopped(),
            "frame loop finished"
        );
        delivered
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/frame_loop.rs"]
mod tests;
