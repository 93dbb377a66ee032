//! Per-session baseline positions.
//!
//! A baseline is captured the first time a vessel is resolved after a session
//! start or restart, and is never overwritten until `reset`. Replayed tracks
//! are therefore anchored to where each vessel stood when playback began.

use std::collections::HashMap;

use tracing::trace;

use wakeplot_core::types::{GeoPoint, VesselId};

/// Baseline positions for one playback session.
#[derive(Debug, Clone, Default)]
pub struct BaselineCache {
    entries: HashMap<VesselId, GeoPoint>,
}

impl BaselineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored baseline for `vessel_id`, capturing `current` on a miss.
    ///
    /// On a hit `current` is ignored, even if the host has since moved the vessel.
    pub fn ensure_baseline(&mut self, vessel_id: &VesselId, current: GeoPoint) -> GeoPoint {
        if let Some(baseline) = self.entries.get(vessel_id) {
            return *baseline;
        }
        trace!(vessel = %vessel_id, lat = current.lat, lng = current.lng, "baseline captured");
        self.entries.insert(vessel_id.clone(), current);
        current
    }

    /// Stored baseline, without capturing.
    pub fn get(&self, vessel_id: &VesselId) -> Option<GeoPoint> {
        self.entries.get(vessel_id).copied()
    }

    /// Drop every baseline. The next resolve re-anchors each vessel.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
