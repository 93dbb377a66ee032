//! Scenario definitions. The fleet and time window an operator sets up.
//!
//! Scenarios are exchanged as JSON. `Scenario::demo` builds a seeded random
//! fleet for headless runs; the same seed always yields the same fleet.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use wakeplot_core::constants::{
    DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, DEFAULT_DURATION_MINUTES,
};
use wakeplot_core::enums::VesselClass;
use wakeplot_core::types::{GeoPoint, Vessel, VesselKinematics};

use crate::error::{ScenarioError, ScenarioResult};
use crate::session::{PlaybackSession, SessionConfig};

/// Half-width of the box demo vessels are scattered in (degrees).
const DEMO_SCATTER_DEGREES: f64 = 1.0;

/// Flag states assigned to demo vessels.
const DEMO_NATIONALITIES: [&str; 7] = ["USA", "GBR", "RUS", "CHN", "JPN", "FRA", "DEU"];

/// A fleet placed on the chart plus the playback window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Chart centre.
    #[serde(default = "default_center")]
    pub center: GeoPoint,
    /// Playback window length in minutes.
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: f64,
    #[serde(default)]
    pub vessels: Vec<Vessel>,
}

fn default_center() -> GeoPoint {
    GeoPoint::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG)
}

fn default_duration_minutes() -> f64 {
    DEFAULT_DURATION_MINUTES
}

impl Scenario {
    /// Parse and validate a scenario from JSON.
    pub fn from_json(json: &str) -> ScenarioResult<Self> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn to_json(&self) -> ScenarioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject negative or non-finite durations and duplicate vessel ids.
    pub fn validate(&self) -> ScenarioResult<()> {
        if !self.duration_minutes.is_finite() || self.duration_minutes < 0.0 {
            return Err(ScenarioError::InvalidDuration {
                minutes: self.duration_minutes,
            });
        }

        let mut seen = HashSet::with_capacity(self.vessels.len());
        for vessel in &self.vessels {
            if !seen.insert(vessel.id()) {
                return Err(ScenarioError::DuplicateVessel {
                    id: vessel.id().clone(),
                });
            }
        }
        Ok(())
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_minutes * 60.0
    }

    /// Build an editing-mode session holding this scenario's fleet.
    pub fn into_session(self, config: SessionConfig) -> PlaybackSession {
        let mut session = PlaybackSession::new(self.duration_secs(), config);
        for vessel in self.vessels {
            session.upsert_vessel(vessel);
        }
        session
    }

    /// Seeded random fleet of `count` vessels around the default chart centre.
    pub fn demo(seed: u64, count: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let center = default_center();

        let vessels = (0..count)
            .map(|i| spawn_demo_vessel(&mut rng, center, i + 1))
            .collect();

        Self {
            id: format!("demo-{seed}"),
            name: "Demo Exercise".to_string(),
            description: format!("{count} randomly placed contacts (seed {seed})"),
            center,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            vessels,
        }
    }
}

fn spawn_demo_vessel(rng: &mut ChaCha8Rng, center: GeoPoint, number: usize) -> Vessel {
    let class = VesselClass::ALL[rng.gen_range(0..VesselClass::ALL.len())];
    let course: f64 = rng.gen_range(0.0..360.0);
    let speed: f64 = rng.gen_range(2.0..max_speed_knots(class));
    let lat = center.lat + rng.gen_range(-DEMO_SCATTER_DEGREES..DEMO_SCATTER_DEGREES);
    let lng = center.lng + rng.gen_range(-DEMO_SCATTER_DEGREES..DEMO_SCATTER_DEGREES);
    let nationality = match class {
        VesselClass::Biologic => None,
        _ => Some(DEMO_NATIONALITIES[rng.gen_range(0..DEMO_NATIONALITIES.len())].to_string()),
    };

    Vessel {
        name: format!("{} {number}", class.label()),
        hull_number: None,
        class,
        nationality,
        kinematics: VesselKinematics::new(
            format!("contact-{number}"),
            course,
            speed,
            GeoPoint::new(lat, lng),
        ),
    }
}

/// Typical top speed per class, used to bound demo speeds.
fn max_speed_knots(class: VesselClass) -> f64 {
    match class {
        VesselClass::SurfaceWarship => 30.0,
        VesselClass::Submarine => 25.0,
        VesselClass::Merchant => 22.0,
        VesselClass::Fishing => 12.0,
        VesselClass::Biologic => 15.0,
    }
}
