#![forbid(unsafe_code)]

//! Normalized progress driver and frame clock.
//!
//! One [`ProgressDriver`] serves both transitions: opening plays the same
//! animation forward, closing plays it in reverse. An externally owned
//! scheduler feeds it elapsed time; the driver turns that into a clamped
//! fraction in `[0, 1]` and reports completion.
//!
//! # Invariants
//!
//! - At most one driver exists per widget; [`ProgressDriver::forward`] and
//!   [`ProgressDriver::reverse`] retarget the live run instead of spawning a
//!   second one.
//! - Progress is clamped to `[0.0, 1.0]` after every advance.
//! - Speed is constant at `1 / duration`, so a mid-flight reversal takes
//!   time proportional to the progress remaining.
//!
//! # Failure Modes
//!
//! - A zero configured duration falls back to the 200ms default rather than
//!   dividing by zero.
//! - `advance` while idle returns `None`; callers skip frame work.

use std::time::Duration;

use web_time::Instant;

/// Direction the progress value is being driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward 1.0 (opening).
    Forward,
    /// Toward 0.0 (closing).
    Reverse,
}

/// One advanced frame: the fraction to hand downstream, and whether the run
/// just reached its endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub fraction: f32,
    pub finished: bool,
}

/// Drives one normalized progress value over a fixed duration.
#[derive(Debug, Clone)]
pub struct ProgressDriver {
    duration: Duration,
    progress: f32,
    direction: Direction,
    running: bool,
}

impl ProgressDriver {
    /// Default transition duration when the host configures none.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

    #[must_use]
    pub fn new(duration: Duration) -> Self {
        let duration = if duration.is_zero() {
            Self::DEFAULT_DURATION
        } else {
            duration
        };
        Self {
            duration,
            progress: 0.0,
            direction: Direction::Forward,
            running: false,
        }
    }

    /// Retarget the driver toward 1.0, continuing from the current progress.
    ///
    /// Already at 1.0 the driver stays idle: there is nothing to animate.
    pub fn forward(&mut self) {
        self.direction = Direction::Forward;
        self.running = self.progress < 1.0;
    }

    /// Retarget the driver toward 0.0, continuing from the current progress.
    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.running = self.progress > 0.0;
    }

    /// Advance by `dt` and return the frame to apply, or `None` while idle.
    pub fn advance(&mut self, dt: Duration) -> Option<Tick> {
        if !self.running {
            return None;
        }

        let step = dt.as_secs_f32() / self.duration.as_secs_f32();
        self.progress = match self.direction {
            Direction::Forward => (self.progress + step).min(1.0),
            Direction::Reverse => (self.progress - step).max(0.0),
        };

        let finished = match self.direction {
            Direction::Forward => self.progress >= 1.0,
            Direction::Reverse => self.progress <= 0.0,
        };
        if finished {
            self.running = false;
        }

        Some(Tick {
            fraction: self.progress,
            finished,
        })
    }

    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}

/// Converts host frame timestamps into deltas for [`ProgressDriver::advance`].
///
/// The first tick after construction (or [`FrameClock::reset`]) yields a zero
/// delta; a non-monotone timestamp also yields zero rather than going
/// backwards.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous tick, using the current wall clock.
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    /// Delta since the previous tick, using a caller-supplied timestamp.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        dt
    }

    /// Forget the previous timestamp; the next tick yields zero.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
