//! Dead-reckoning position resolver.
//!
//! Flat-earth approximation: one knot is taken as 1/60 degree of latitude per
//! hour, and longitude displacement is stretched by 1 / cos(mean latitude) to
//! account for meridian convergence. No antimeridian or polar handling.

use glam::DVec2;

use wakeplot_core::constants::KNOTS_TO_DEGREES_PER_SEC;
use wakeplot_core::types::{finite_or_zero, normalize_course, GeoPoint, VesselKinematics};

use crate::baseline::BaselineCache;

/// Position reached after `elapsed_secs` on a constant course and speed.
///
/// Pure and deterministic. Non-finite or negative speed and elapsed time are
/// treated as zero, a non-finite course as due north.
pub fn position_at(
    baseline: GeoPoint,
    course_degrees: f64,
    speed_knots: f64,
    elapsed_secs: f64,
) -> GeoPoint {
    let origin = GeoPoint::new(finite_or_zero(baseline.lat), finite_or_zero(baseline.lng));
    let speed = finite_or_zero(speed_knots).max(0.0);
    let elapsed = finite_or_zero(elapsed_secs).max(0.0);

    if speed == 0.0 || elapsed == 0.0 {
        return origin;
    }

    let distance = speed * KNOTS_TO_DEGREES_PER_SEC * elapsed;

    // Compass course (0 = North, clockwise) to math bearing (0 = East, counter-clockwise).
    let bearing = (90.0 - normalize_course(course_degrees)).to_radians();
    let displacement = DVec2::from_angle(bearing) * distance;

    let lat_delta = displacement.y;
    let mean_lat = (origin.lat + lat_delta / 2.0).to_radians();
    let lng_delta = displacement.x / mean_lat.cos();

    GeoPoint::new(origin.lat + lat_delta, origin.lng + lng_delta)
}

/// Position of `vessel` at `elapsed_secs`, anchored to its session baseline.
///
/// Captures the baseline from the vessel's current position on first use.
pub fn resolve(
    cache: &mut BaselineCache,
    vessel: &VesselKinematics,
    elapsed_secs: f64,
) -> GeoPoint {
    let baseline = cache.ensure_baseline(&vessel.id, vessel.position);
    position_at(baseline, vessel.course_degrees, vessel.speed_knots, elapsed_secs)
}
