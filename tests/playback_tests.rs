// Playback controller tests: navigation, state transitions, timed auto-advance

use algotty::playback::{Playback, PlaybackState};
use algotty::trace::{Action, Recorder, StepBuilder, Trace};
use std::time::{Duration, Instant};

/// A short synthetic trace with `steps` total steps, the last one terminal
fn short_trace(steps: usize) -> Trace {
    let mut rec = Recorder::new();
    for index in 1..steps {
        rec.push(StepBuilder::new(
            Action::Visit,
            format!("working step {}", index),
        ));
    }
    rec.push(StepBuilder::new(Action::Complete, "done"));
    rec.finish()
}

#[test]
fn starts_at_the_first_step() {
    let playback = Playback::new(short_trace(4));
    assert_eq!(playback.position(), 0);
    assert_eq!(playback.state(), PlaybackState::AtStart);
    assert_eq!(playback.current_step().expect("first step").seq, 1);
}

#[test]
fn step_advances_and_clamps_at_the_end() {
    let mut playback = Playback::new(short_trace(3));

    playback.step();
    assert_eq!(playback.position(), 1);
    assert_eq!(playback.state(), PlaybackState::Paused);

    playback.step();
    assert_eq!(playback.position(), 2);
    assert_eq!(playback.state(), PlaybackState::Finished);

    // Further steps are no-ops at the last index.
    playback.step();
    playback.step();
    assert_eq!(playback.position(), 2);
    assert_eq!(playback.state(), PlaybackState::Finished);
}

#[test]
fn single_step_trace_finishes_immediately() {
    let mut playback = Playback::new(short_trace(1));
    assert_eq!(playback.len(), 1);

    playback.step();
    assert_eq!(playback.position(), 0);
    assert_eq!(playback.state(), PlaybackState::Finished);
}

#[test]
fn play_and_pause_toggle_without_moving() {
    let mut playback = Playback::new(short_trace(5));
    let now = Instant::now();

    playback.play(now);
    assert!(playback.is_playing());
    assert_eq!(playback.position(), 0);

    playback.pause();
    assert_eq!(playback.state(), PlaybackState::Paused);
    assert_eq!(playback.position(), 0);
}

#[test]
fn pause_before_playing_stays_at_start() {
    let mut playback = Playback::new(short_trace(5));
    playback.pause();
    assert_eq!(playback.state(), PlaybackState::AtStart);
}

#[test]
fn play_from_finished_restarts_from_the_beginning() {
    let mut playback = Playback::new(short_trace(3));
    playback.step();
    playback.step();
    assert_eq!(playback.state(), PlaybackState::Finished);

    playback.play(Instant::now());
    assert_eq!(playback.position(), 0);
    assert!(playback.is_playing());
}

#[test]
fn reset_returns_to_the_first_step() {
    let mut playback = Playback::new(short_trace(4));
    playback.step();
    playback.step();
    playback.reset();

    assert_eq!(playback.position(), 0);
    assert_eq!(playback.state(), PlaybackState::AtStart);
    assert_eq!(playback.current_step().expect("first step").seq, 1);
}

#[test]
fn tick_fires_only_after_the_interval() {
    let interval = Duration::from_millis(100);
    let mut playback = Playback::with_interval(short_trace(4), interval);
    let t0 = Instant::now();

    playback.play(t0);
    assert!(!playback.tick(t0), "deadline not yet reached");
    assert!(!playback.tick(t0 + Duration::from_millis(50)));
    assert_eq!(playback.position(), 0);

    assert!(playback.tick(t0 + interval), "deadline passed");
    assert_eq!(playback.position(), 1);
    assert!(playback.is_playing());
}

#[test]
fn tick_rearms_until_the_trace_finishes() {
    let interval = Duration::from_millis(100);
    let mut playback = Playback::with_interval(short_trace(3), interval);
    let t0 = Instant::now();

    playback.play(t0);
    assert!(playback.tick(t0 + interval));
    assert!(playback.tick(t0 + interval * 2));
    assert_eq!(playback.position(), 2);
    assert_eq!(playback.state(), PlaybackState::Finished);

    // Finished playback never advances again.
    assert!(!playback.tick(t0 + interval * 3));
}

#[test]
fn pause_cancels_a_pending_deadline() {
    let interval = Duration::from_millis(100);
    let mut playback = Playback::with_interval(short_trace(4), interval);
    let t0 = Instant::now();

    playback.play(t0);
    playback.pause();

    assert!(!playback.tick(t0 + interval * 10), "cancelled deadline must not fire");
    assert_eq!(playback.position(), 0);
}

#[test]
fn manual_step_does_not_leave_a_stale_deadline() {
    let interval = Duration::from_millis(100);
    let mut playback = Playback::with_interval(short_trace(2), interval);
    let t0 = Instant::now();

    // Stepping onto the final index finishes playback even while playing.
    playback.play(t0);
    playback.step();
    assert_eq!(playback.state(), PlaybackState::Finished);
    assert!(!playback.tick(t0 + interval));
}

#[test]
fn attach_replaces_the_trace_and_resets() {
    let interval = Duration::from_millis(100);
    let mut playback = Playback::with_interval(short_trace(4), interval);
    let t0 = Instant::now();

    playback.play(t0);
    playback.step();
    playback.attach(short_trace(2));

    assert_eq!(playback.len(), 2);
    assert_eq!(playback.position(), 0);
    assert_eq!(playback.state(), PlaybackState::AtStart);
    assert!(
        !playback.tick(t0 + interval * 10),
        "a deadline armed against the old trace must not fire"
    );
}

#[test]
fn reset_cancels_auto_advance() {
    let interval = Duration::from_millis(100);
    let mut playback = Playback::with_interval(short_trace(4), interval);
    let t0 = Instant::now();

    playback.play(t0);
    playback.reset();

    assert!(!playback.tick(t0 + interval * 10));
    assert_eq!(playback.state(), PlaybackState::AtStart);
}
