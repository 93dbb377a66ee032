//! Fundamental geographic and vessel types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::FULL_CIRCLE_DEGREES;
use crate::enums::VesselClass;

/// Geographic position in degrees (WGS84-style lat/lng, flat-earth arithmetic).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `[lng, lat]` pair, the axis order used by trail polylines.
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Stable vessel identifier supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VesselId(pub String);

impl VesselId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VesselId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for VesselId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Kinematic parameters of one vessel, owned by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselKinematics {
    pub id: VesselId,
    /// Course over ground in degrees (0 = North, clockwise).
    pub course_degrees: f64,
    /// Speed over ground in knots.
    pub speed_knots: f64,
    /// Current position. Only read when a baseline is captured.
    pub position: GeoPoint,
}

impl VesselKinematics {
    pub fn new(
        id: impl Into<VesselId>,
        course_degrees: f64,
        speed_knots: f64,
        position: GeoPoint,
    ) -> Self {
        Self {
            id: id.into(),
            course_degrees,
            speed_knots,
            position,
        }
    }

    /// True when every numeric field is finite and the speed is non-negative.
    pub fn is_well_formed(&self) -> bool {
        self.course_degrees.is_finite()
            && self.speed_knots.is_finite()
            && self.speed_knots >= 0.0
            && self.position.is_finite()
    }

    /// Copy with malformed numbers replaced by neutral values.
    ///
    /// Course is wrapped into [0, 360), negative or non-finite speed becomes 0,
    /// non-finite coordinates become 0.
    pub fn sanitized(&self) -> Self {
        Self {
            id: self.id.clone(),
            course_degrees: normalize_course(self.course_degrees),
            speed_knots: finite_or_zero(self.speed_knots).max(0.0),
            position: GeoPoint::new(
                finite_or_zero(self.position.lat),
                finite_or_zero(self.position.lng),
            ),
        }
    }
}

/// A vessel placed on the chart: display metadata plus kinematics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    pub name: String,
    #[serde(default)]
    pub hull_number: Option<String>,
    pub class: VesselClass,
    #[serde(default)]
    pub nationality: Option<String>,
    pub kinematics: VesselKinematics,
}

impl Vessel {
    pub fn id(&self) -> &VesselId {
        &self.kinematics.id
    }
}

/// Wrap a compass course into [0, 360). Non-finite input maps to 0.
pub fn normalize_course(course_degrees: f64) -> f64 {
    if !course_degrees.is_finite() {
        return 0.0;
    }
    let wrapped = course_degrees.rem_euclid(FULL_CIRCLE_DEGREES);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if wrapped >= FULL_CIRCLE_DEGREES {
        0.0
    } else {
        wrapped
    }
}

/// Replace NaN and infinities with 0.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Format elapsed seconds as `HH:MM:SS` (fractional seconds are floored).
pub fn format_clock(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
