//! Playback controller
//!
//! Position-based navigation over the currently attached trace: play, pause,
//! single-step, reset, plus timed auto-advance. Execution is single-threaded
//! and cooperative; the only asynchronous element is a cancellable deadline
//! that the owning event loop pumps through [`Playback::tick`]. The ordering
//! rule everywhere is cancel-before-replace: `attach`, `pause` and `reset`
//! clear the deadline before touching anything else, so a stale advance can
//! never fire against a superseded trace.

use crate::trace::{Step, Trace};
use std::time::{Duration, Instant};

/// Default delay between auto-advanced steps
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    AtStart,
    Playing,
    Paused,
    Finished,
}

/// Stateful driver over one trace. The position is always a valid index into
/// the attached trace.
#[derive(Debug)]
pub struct Playback {
    trace: Trace,
    position: usize,
    state: PlaybackState,
    interval: Duration,
    /// Armed auto-advance deadline; `None` means cancelled
    deadline: Option<Instant>,
}

impl Playback {
    pub fn new(trace: Trace) -> Self {
        Self::with_interval(trace, DEFAULT_INTERVAL)
    }

    pub fn with_interval(trace: Trace, interval: Duration) -> Self {
        Playback {
            trace,
            position: 0,
            state: PlaybackState::AtStart,
            interval,
            deadline: None,
        }
    }

    /// Replace the trace wholesale and reset. Required whenever the input or
    /// the algorithm variant changes.
    pub fn attach(&mut self, trace: Trace) {
        self.deadline = None;
        self.trace = trace;
        self.reset();
    }

    /// Begin auto-advance. Playing from the finished state restarts from the
    /// beginning.
    pub fn play(&mut self, now: Instant) {
        if self.state == PlaybackState::Finished {
            self.reset();
        }
        self.state = PlaybackState::Playing;
        self.deadline = Some(now + self.interval);
    }

    /// Cancel auto-advance, keep the position
    pub fn pause(&mut self) {
        self.deadline = None;
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Advance one step, clamped to the last index. Reaching the last index
    /// finishes playback and cancels any pending deadline.
    pub fn step(&mut self) {
        let last = self.trace.len().saturating_sub(1);
        if self.position < last {
            self.position += 1;
            if self.state == PlaybackState::AtStart {
                self.state = PlaybackState::Paused;
            }
        }
        if self.position >= last {
            self.state = PlaybackState::Finished;
            self.deadline = None;
        }
    }

    pub fn reset(&mut self) {
        self.deadline = None;
        self.position = 0;
        self.state = PlaybackState::AtStart;
    }

    /// Pump the cooperative timer. When playing and the deadline has passed,
    /// advances one step and re-arms; returns whether a step fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.step();
        if self.state == PlaybackState::Playing {
            self.deadline = Some(now + self.interval);
        }
        true
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.trace.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }
}
