//! Events emitted by the playback engine for the host.

use serde::{Deserialize, Serialize};

/// Host-visible playback signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlaybackEvent {
    /// Elapsed time reached the scenario duration; the clock is now paused.
    Completed { elapsed_secs: f64 },
}
