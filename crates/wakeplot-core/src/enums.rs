//! Enumeration types used throughout playback.

use serde::{Deserialize, Serialize};

/// Vessel class. Closed set; every consumer matches it exhaustively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VesselClass {
    /// Destroyers, frigates, cruisers.
    #[default]
    SurfaceWarship,
    Submarine,
    /// Cargo and container traffic.
    Merchant,
    Fishing,
    /// Marine life contacts (whale pods, dolphins).
    Biologic,
}

impl VesselClass {
    pub const ALL: [VesselClass; 5] = [
        VesselClass::SurfaceWarship,
        VesselClass::Submarine,
        VesselClass::Merchant,
        VesselClass::Fishing,
        VesselClass::Biologic,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            VesselClass::SurfaceWarship => "Surface Warship",
            VesselClass::Submarine => "Submarine",
            VesselClass::Merchant => "Merchant",
            VesselClass::Fishing => "Fishing",
            VesselClass::Biologic => "Biologic",
        }
    }

    /// Whether contacts of this class normally operate below the surface.
    pub fn is_subsurface(self) -> bool {
        match self {
            VesselClass::Submarine | VesselClass::Biologic => true,
            VesselClass::SurfaceWarship | VesselClass::Merchant | VesselClass::Fishing => false,
        }
    }
}

/// Playback clock state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackPhase {
    /// At elapsed 0, not advancing.
    #[default]
    Stopped,
    /// Holding at some elapsed time.
    Paused,
    /// Advancing with each tick at the speed multiplier.
    Running,
}

/// Top-level session mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMode {
    /// Vessels are being placed and edited; no playback clock.
    #[default]
    Editing,
    /// Vessel tracks are replayed from their baselines.
    Playback,
}
