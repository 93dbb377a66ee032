//! Trail sampler: a fixed-length polyline from session start to now.
//!
//! Trails are derived views, recomputed on every query. Cost is
//! O(samples) per vessel.

use wakeplot_core::types::{finite_or_zero, VesselKinematics};

use crate::baseline::BaselineCache;
use crate::resolver;

/// `[lng, lat]` points in chronological order.
pub type Trail = Vec<[f64; 2]>;

/// Sample `samples` evenly spaced instants in [0, elapsed_secs] (both ends
/// included) and resolve each one.
///
/// The last point is computed at exactly `elapsed_secs`, so it always matches
/// `resolver::resolve(cache, vessel, elapsed_secs)`.
pub fn trail_at(
    cache: &mut BaselineCache,
    vessel: &VesselKinematics,
    elapsed_secs: f64,
    samples: usize,
) -> Trail {
    let elapsed = finite_or_zero(elapsed_secs).max(0.0);
    let mut trail = Vec::with_capacity(samples);

    for i in 0..samples {
        let t = sample_instant(i, samples, elapsed);
        trail.push(resolver::resolve(cache, vessel, t).lng_lat());
    }

    trail
}

/// Time of sample `i` of `samples` over [0, elapsed].
fn sample_instant(i: usize, samples: usize, elapsed: f64) -> f64 {
    if i + 1 >= samples {
        return elapsed;
    }
    let interval = elapsed / (samples - 1) as f64;
    i as f64 * interval
}

#[cfg(test)]
mod tests {
    use super::*;
    use wakeplot_core::types::GeoPoint;

    fn frigate() -> VesselKinematics {
        VesselKinematics::new("type-45", 45.0, 29.0, GeoPoint::new(19.5, -155.5))
    }

    #[test]
    fn test_sample_count_and_endpoints() {
        let mut cache = BaselineCache::new();
        let vessel = frigate();

        let trail = trail_at(&mut cache, &vessel, 1800.0, 10);
        assert_eq!(trail.len(), 10);
        assert_eq!(trail[0], GeoPoint::new(19.5, -155.5).lng_lat());

        let head = resolver::resolve(&mut cache, &vessel, 1800.0);
        assert_eq!(trail[9], head.lng_lat());
    }

    #[test]
    fn test_points_are_chronological() {
        let mut cache = BaselineCache::new();
        let vessel = frigate();
        let trail = trail_at(&mut cache, &vessel, 3600.0, 7);

        // NE course: both lng and lat grow with time
        for pair in trail.windows(2) {
            assert!(pair[1][0] > pair[0][0], "lng not increasing: {pair:?}");
            assert!(pair[1][1] > pair[0][1], "lat not increasing: {pair:?}");
        }
    }

    #[test]
    fn test_awkward_interval_ends_exactly_at_elapsed() {
        let mut cache = BaselineCache::new();
        let vessel = frigate();
        // 1000 / 6 is not representable; the last sample must not drift.
        let trail = trail_at(&mut cache, &vessel, 1000.0, 7);
        let head = resolver::resolve(&mut cache, &vessel, 1000.0);
        assert_eq!(trail.last().copied(), Some(head.lng_lat()));
    }

    #[test]
    fn test_degenerate_sample_counts() {
        let mut cache = BaselineCache::new();
        let vessel = frigate();

        assert!(trail_at(&mut cache, &vessel, 600.0, 0).is_empty());

        let single = trail_at(&mut cache, &vessel, 600.0, 1);
        let head = resolver::resolve(&mut cache, &vessel, 600.0);
        assert_eq!(single, vec![head.lng_lat()]);
    }

    #[test]
    fn test_zero_elapsed_collapses_to_baseline() {
        let mut cache = BaselineCache::new();
        let vessel = frigate();
        let trail = trail_at(&mut cache, &vessel, 0.0, 5);
        assert!(trail.iter().all(|p| *p == [-155.5, 19.5]));
    }

    #[test]
    fn test_trail_captures_baseline() {
        let mut cache = BaselineCache::new();
        let vessel = frigate();
        trail_at(&mut cache, &vessel, 60.0, 3);
        assert_eq!(cache.get(&vessel.id), Some(vessel.position));
    }
}
