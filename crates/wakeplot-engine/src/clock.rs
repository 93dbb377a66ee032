//! Playback clock. Turns wall-clock frame deltas into simulated elapsed time.
//!
//! States:
//! - `Stopped`: elapsed 0, not advancing.
//! - `Paused`: holding at some elapsed time.
//! - `Running`: each `tick(dt)` adds `dt * speed_multiplier`.
//!
//! Elapsed time is always clamped to [0, duration]. The clock owns the
//! session's baseline cache and resets it on `restart`.

use tracing::{debug, warn};

use wakeplot_core::constants::DEFAULT_SPEED_MULTIPLIER;
use wakeplot_core::enums::PlaybackPhase;
use wakeplot_core::events::PlaybackEvent;
use wakeplot_core::state::PlaybackState;
use wakeplot_core::types::{finite_or_zero, GeoPoint, VesselKinematics};

use crate::baseline::BaselineCache;
use crate::resolver;
use crate::trail::{self, Trail};

/// Variable-speed, pausable playback clock for one session.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    elapsed_secs: f64,
    duration_secs: f64,
    speed_multiplier: f64,
    phase: PlaybackPhase,
    baselines: BaselineCache,
}

impl PlaybackClock {
    /// Create a clock for a scenario of `duration_secs`.
    ///
    /// A zero, negative or non-finite duration yields a clock parked in
    /// `Paused` at 0 that refuses to play.
    pub fn new(duration_secs: f64) -> Self {
        let duration_secs = finite_or_zero(duration_secs).max(0.0);
        Self {
            elapsed_secs: 0.0,
            duration_secs,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            phase: Self::rest_phase(duration_secs),
            baselines: BaselineCache::new(),
        }
    }

    /// Builder-style initial speed.
    pub fn with_speed(mut self, multiplier: f64) -> Self {
        self.set_speed(multiplier);
        self
    }

    /// `Stopped | Paused -> Running`, keeping elapsed time.
    ///
    /// Returns false (no-op) when already running, when the duration is empty,
    /// or when elapsed time already sits at the end.
    pub fn play(&mut self) -> bool {
        if self.duration_secs <= 0.0 {
            debug!("play ignored: scenario has no duration");
            return false;
        }
        if self.elapsed_secs >= self.duration_secs {
            debug!(elapsed = self.elapsed_secs, "play ignored: already at end");
            return false;
        }
        match self.phase {
            PlaybackPhase::Running => false,
            PlaybackPhase::Stopped | PlaybackPhase::Paused => {
                self.phase = PlaybackPhase::Running;
                debug!(elapsed = self.elapsed_secs, "playback running");
                true
            }
        }
    }

    /// `Running -> Paused`, keeping elapsed time.
    pub fn pause(&mut self) -> bool {
        if self.phase != PlaybackPhase::Running {
            return false;
        }
        self.phase = PlaybackPhase::Paused;
        debug!(elapsed = self.elapsed_secs, "playback paused");
        true
    }

    /// Pause when running, play otherwise.
    pub fn toggle(&mut self) -> bool {
        if self.phase == PlaybackPhase::Running {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Jump to `secs` (clamped) and pause, from any state.
    pub fn seek(&mut self, secs: f64) {
        self.elapsed_secs = finite_or_zero(secs).clamp(0.0, self.duration_secs);
        self.phase = PlaybackPhase::Paused;
        debug!(elapsed = self.elapsed_secs, "seek");
    }

    /// Back to elapsed 0 and drop every baseline, from any state.
    pub fn restart(&mut self) {
        self.elapsed_secs = 0.0;
        self.phase = Self::rest_phase(self.duration_secs);
        self.baselines.reset();
        debug!("playback restarted");
    }

    /// Set the rate used by subsequent ticks. Time already elapsed is untouched.
    ///
    /// Non-finite or non-positive multipliers are rejected.
    pub fn set_speed(&mut self, multiplier: f64) -> bool {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            warn!(multiplier, "rejected playback speed");
            return false;
        }
        self.speed_multiplier = multiplier;
        true
    }

    /// Advance by a wall-clock delta. No-op unless running.
    ///
    /// Returns the completion event when elapsed time reaches the duration;
    /// the clock is paused at that point.
    pub fn tick(&mut self, real_delta_secs: f64) -> Option<PlaybackEvent> {
        if self.phase != PlaybackPhase::Running {
            return None;
        }

        let delta = finite_or_zero(real_delta_secs).max(0.0);
        self.elapsed_secs =
            (self.elapsed_secs + delta * self.speed_multiplier).clamp(0.0, self.duration_secs);

        if self.elapsed_secs >= self.duration_secs {
            self.phase = PlaybackPhase::Paused;
            debug!(elapsed = self.elapsed_secs, "playback complete");
            return Some(PlaybackEvent::Completed {
                elapsed_secs: self.elapsed_secs,
            });
        }
        None
    }

    /// Current state for the host.
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            elapsed_secs: self.elapsed_secs,
            is_playing: self.phase == PlaybackPhase::Running,
            speed_multiplier: self.speed_multiplier,
            duration_secs: self.duration_secs,
            phase: self.phase,
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn baselines(&self) -> &BaselineCache {
        &self.baselines
    }

    pub fn baselines_mut(&mut self) -> &mut BaselineCache {
        &mut self.baselines
    }

    /// Where `vessel` is at the current elapsed time.
    pub fn position_of(&mut self, vessel: &VesselKinematics) -> GeoPoint {
        resolver::resolve(&mut self.baselines, vessel, self.elapsed_secs)
    }

    /// Trail of `vessel` from session start to the current elapsed time.
    pub fn trail_of(&mut self, vessel: &VesselKinematics, samples: usize) -> Trail {
        trail::trail_at(&mut self.baselines, vessel, self.elapsed_secs, samples)
    }

    fn rest_phase(duration_secs: f64) -> PlaybackPhase {
        if duration_secs > 0.0 {
            PlaybackPhase::Stopped
        } else {
            PlaybackPhase::Paused
        }
    }
}
