//! Playback commands sent from the host to the session.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All host-originated playback controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlaybackCommand {
    // --- Transport ---
    /// Start or resume advancing time.
    Play,
    /// Hold at the current elapsed time.
    Pause,
    /// Play when held, pause when running.
    TogglePlayPause,
    /// Jump to an elapsed time (seconds). Leaves the clock paused.
    Seek { secs: f64 },
    /// Back to elapsed 0 with fresh baselines.
    Restart,
    /// Change the playback rate for subsequent ticks.
    SetSpeed { multiplier: f64 },

    // --- Mode ---
    /// Leave editing and start a playback session.
    EnterPlayback,
    /// Leave playback and return to vessel editing.
    EnterEditing,
}
