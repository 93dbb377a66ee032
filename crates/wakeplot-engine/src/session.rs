//! Playback session. The engine's boundary with the host.
//!
//! `PlaybackSession` owns the vessel list, the session mode, the playback
//! clock (and through it the baseline cache), processes queued host commands
//! and produces a `FrameSnapshot` per tick. Completely headless; independent
//! sessions never share state.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use wakeplot_core::commands::PlaybackCommand;
use wakeplot_core::constants::{DEFAULT_SPEED_MULTIPLIER, DEFAULT_TRAIL_SAMPLES};
use wakeplot_core::enums::SessionMode;
use wakeplot_core::events::PlaybackEvent;
use wakeplot_core::state::{FrameSnapshot, PlaybackState, VesselView};
use wakeplot_core::types::{format_clock, Vessel, VesselId};

use crate::clock::PlaybackClock;

/// Configuration for a playback session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Points per vessel trail.
    pub trail_samples: usize,
    /// Playback rate applied when playback is entered.
    pub speed_multiplier: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            trail_samples: DEFAULT_TRAIL_SAMPLES,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
        }
    }
}

/// One operator session: vessels, mode, clock and pending commands.
pub struct PlaybackSession {
    config: SessionConfig,
    duration_secs: f64,
    mode: SessionMode,
    vessels: Vec<Vessel>,
    clock: PlaybackClock,
    command_queue: VecDeque<PlaybackCommand>,
    events: Vec<PlaybackEvent>,
}

impl PlaybackSession {
    /// Create a session in editing mode for a scenario of `duration_secs`.
    pub fn new(duration_secs: f64, config: SessionConfig) -> Self {
        let clock = PlaybackClock::new(duration_secs);
        Self {
            duration_secs: clock.duration_secs(),
            config,
            mode: SessionMode::Editing,
            vessels: Vec::new(),
            clock,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlaybackCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlaybackCommand>) {
        self.command_queue.extend(commands);
    }

    /// Add a vessel, or replace the one with the same id.
    ///
    /// Allowed in either mode. During playback the replayed track stays
    /// anchored to the baseline captured at session start.
    pub fn upsert_vessel(&mut self, vessel: Vessel) {
        if !vessel.kinematics.is_well_formed() {
            warn!(
                vessel = %vessel.id(),
                course = vessel.kinematics.course_degrees,
                speed = vessel.kinematics.speed_knots,
                "malformed kinematics will be neutralized"
            );
        }
        match self.vessels.iter_mut().find(|v| v.id() == vessel.id()) {
            Some(existing) => *existing = vessel,
            None => self.vessels.push(vessel),
        }
    }

    /// Remove a vessel by id.
    pub fn remove_vessel(&mut self, id: &VesselId) -> Option<Vessel> {
        let index = self.vessels.iter().position(|v| v.id() == id)?;
        Some(self.vessels.remove(index))
    }

    /// Change the scenario duration. Only honoured while editing.
    pub fn set_duration(&mut self, duration_secs: f64) -> bool {
        if self.mode != SessionMode::Editing {
            debug!("duration change ignored during playback");
            return false;
        }
        self.clock = PlaybackClock::new(duration_secs);
        self.duration_secs = self.clock.duration_secs();
        true
    }

    /// Advance the session by one host frame and return the resulting snapshot.
    pub fn tick(&mut self, real_delta_secs: f64) -> FrameSnapshot {
        self.process_commands();

        if self.mode == SessionMode::Playback {
            if let Some(event) = self.clock.tick(real_delta_secs) {
                info!(elapsed = self.clock.elapsed_secs(), "scenario playback complete");
                self.events.push(event);
            }
        }

        self.build_snapshot()
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn playback(&self) -> PlaybackState {
        self.clock.state()
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlaybackCommand) {
        match command {
            PlaybackCommand::EnterPlayback => {
                if self.mode == SessionMode::Editing {
                    self.clock = PlaybackClock::new(self.duration_secs)
                        .with_speed(self.config.speed_multiplier);
                    self.mode = SessionMode::Playback;
                    info!(
                        vessels = self.vessels.len(),
                        duration = self.duration_secs,
                        "entered playback"
                    );
                }
            }
            PlaybackCommand::EnterEditing => {
                if self.mode == SessionMode::Playback {
                    self.clock.restart();
                    self.mode = SessionMode::Editing;
                    info!("entered editing");
                }
            }
            PlaybackCommand::SetSpeed { multiplier } => {
                let accepted = match self.mode {
                    SessionMode::Playback => self.clock.set_speed(multiplier),
                    SessionMode::Editing => multiplier.is_finite() && multiplier > 0.0,
                };
                if accepted {
                    self.config.speed_multiplier = multiplier;
                }
            }
            command if self.mode == SessionMode::Editing => {
                debug!(?command, "transport command ignored while editing");
            }
            PlaybackCommand::Play => {
                self.clock.play();
            }
            PlaybackCommand::Pause => {
                self.clock.pause();
            }
            PlaybackCommand::TogglePlayPause => {
                self.clock.toggle();
            }
            PlaybackCommand::Seek { secs } => self.clock.seek(secs),
            PlaybackCommand::Restart => self.clock.restart(),
        }
    }

    fn build_snapshot(&mut self) -> FrameSnapshot {
        let vessels = match self.mode {
            SessionMode::Playback => self.build_playback_views(),
            SessionMode::Editing => self.build_editing_views(),
        };
        let playback = self.clock.state();

        FrameSnapshot {
            mode: self.mode,
            playback,
            clock_label: format_clock(playback.elapsed_secs),
            vessels,
            events: std::mem::take(&mut self.events),
        }
    }

    /// Replayed positions and trails at the clock's elapsed time.
    fn build_playback_views(&mut self) -> Vec<VesselView> {
        let samples = self.config.trail_samples;
        let clock = &mut self.clock;
        self.vessels
            .iter()
            .map(|vessel| {
                let kinematics = vessel.kinematics.sanitized();
                VesselView {
                    id: kinematics.id.clone(),
                    name: vessel.name.clone(),
                    class: vessel.class,
                    course_degrees: kinematics.course_degrees,
                    speed_knots: kinematics.speed_knots,
                    position: clock.position_of(&kinematics),
                    trail: clock.trail_of(&kinematics, samples),
                }
            })
            .collect()
    }

    /// Vessels where the host placed them, without trails.
    fn build_editing_views(&self) -> Vec<VesselView> {
        self.vessels
            .iter()
            .map(|vessel| {
                let kinematics = vessel.kinematics.sanitized();
                VesselView {
                    id: kinematics.id,
                    name: vessel.name.clone(),
                    class: vessel.class,
                    course_degrees: kinematics.course_degrees,
                    speed_knots: kinematics.speed_knots,
                    position: kinematics.position,
                    trail: Vec::new(),
                }
            })
            .collect()
    }
}
