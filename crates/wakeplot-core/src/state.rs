//! Frame snapshot. The complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SPEED_MULTIPLIER;
use crate::enums::*;
use crate::events::PlaybackEvent;
use crate::types::{GeoPoint, VesselId};

/// Playback clock state as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Simulated seconds since session start, within [0, duration_secs].
    pub elapsed_secs: f64,
    pub is_playing: bool,
    /// Simulated seconds per real second.
    pub speed_multiplier: f64,
    pub duration_secs: f64,
    pub phase: PlaybackPhase,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            elapsed_secs: 0.0,
            is_playing: false,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            duration_secs: 0.0,
            phase: PlaybackPhase::Stopped,
        }
    }
}

/// One vessel as it should be drawn this frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselView {
    pub id: VesselId,
    pub name: String,
    pub class: VesselClass,
    /// Course (degrees, 0 = North).
    pub course_degrees: f64,
    /// Speed (knots).
    pub speed_knots: f64,
    pub position: GeoPoint,
    /// `[lng, lat]` points from session start to now, oldest first.
    pub trail: Vec<[f64; 2]>,
}

/// Complete session state delivered after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub mode: SessionMode,
    pub playback: PlaybackState,
    /// Elapsed time as `HH:MM:SS`.
    pub clock_label: String,
    pub vessels: Vec<VesselView>,
    pub events: Vec<PlaybackEvent>,
}

impl FrameSnapshot {
    /// Whether this frame carries the completion signal.
    pub fn completed(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, PlaybackEvent::Completed { .. }))
    }

    pub fn vessel(&self, id: &VesselId) -> Option<&VesselView> {
        self.vessels.iter().find(|v| &v.id == id)
    }
}
