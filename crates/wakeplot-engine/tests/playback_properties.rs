use wakeplot_engine::baseline::BaselineCache;
use wakeplot_engine::clock::PlaybackClock;
use wakeplot_engine::core::enums::PlaybackPhase;
use wakeplot_engine::core::types::{GeoPoint, VesselKinematics};
use wakeplot_engine::resolver::{position_at, resolve};
use wakeplot_engine::trail::trail_at;

const KONA: GeoPoint = GeoPoint {
    lat: 19.5,
    lng: -155.5,
};

fn destroyer() -> VesselKinematics {
    VesselKinematics::new("ddg-51", 90.0, 30.0, KONA)
}

#[test]
fn stationary_vessel_never_moves() {
    let mut course = 0.0;
    while course < 360.0 {
        for elapsed in [0.0, 0.5, 60.0, 3600.0, 86_400.0] {
            assert_eq!(position_at(KONA, course, 0.0, elapsed), KONA);
        }
        course += 7.5;
    }
}

#[test]
fn resolver_is_bit_identical_across_calls() {
    let inputs = [
        (KONA, 0.0, 12.0, 10.0),
        (KONA, 137.0, 25.5, 999.0),
        (GeoPoint::new(-33.9, 151.2), 271.0, 18.0, 7200.0),
    ];
    for (base, course, speed, elapsed) in inputs {
        let a = position_at(base, course, speed, elapsed);
        let b = position_at(base, course, speed, elapsed);
        assert_eq!(a.lat.to_bits(), b.lat.to_bits());
        assert_eq!(a.lng.to_bits(), b.lng.to_bits());
    }
}

#[test]
fn trail_has_n_points_ending_at_head() {
    for n in [2, 3, 10, 33] {
        let mut cache = BaselineCache::new();
        let vessel = VesselKinematics::new("ssn-688", 215.0, 18.0, KONA);
        let trail = trail_at(&mut cache, &vessel, 5000.0, n);

        assert_eq!(trail.len(), n);
        assert_eq!(trail[0], KONA.lng_lat());
        assert_eq!(trail[n - 1], resolve(&mut cache, &vessel, 5000.0).lng_lat());

        // SW course: every step moves further south and west
        for pair in trail.windows(2) {
            assert!(pair[1][1] < pair[0][1]);
            assert!(pair[1][0] < pair[0][0]);
        }
    }
}

#[test]
fn elapsed_tracks_scaled_real_time() {
    let deltas = [0.016, 0.017, 0.033, 0.016, 0.1, 0.25, 0.016];
    let total: f64 = deltas.iter().sum();

    for speed in [1.0, 2.0, 5.0, 10.0, 20.0, 50.0] {
        let mut clock = PlaybackClock::new(10_000.0).with_speed(speed);
        clock.play();
        for dt in deltas {
            clock.tick(dt);
        }
        assert!(
            (clock.elapsed_secs() - speed * total).abs() < 1e-9,
            "speed {speed}: {} vs {}",
            clock.elapsed_secs(),
            speed * total
        );
    }
}

#[test]
fn elapsed_never_exceeds_duration() {
    let mut clock = PlaybackClock::new(30.0).with_speed(50.0);
    clock.play();
    let event = clock.tick(10.0);
    assert!(event.is_some());
    assert_eq!(clock.elapsed_secs(), 30.0);
    assert_eq!(clock.phase(), PlaybackPhase::Paused);
}

#[test]
fn restart_anchors_to_fresh_baseline() {
    let mut clock = PlaybackClock::new(7200.0).with_speed(60.0);
    let mut vessel = destroyer();
    clock.play();
    clock.tick(30.0);
    let moved = clock.position_of(&vessel);
    assert!(moved.lng > KONA.lng);

    // Host repositions the vessel while the old baseline is still cached
    vessel.position = GeoPoint::new(21.3, -157.9);
    assert_eq!(clock.position_of(&vessel), moved);

    clock.restart();
    assert_eq!(clock.position_of(&vessel), GeoPoint::new(21.3, -157.9));

    clock.play();
    clock.tick(30.0);
    let fresh = clock.position_of(&vessel);
    assert!((fresh.lat - 21.3).abs() < 1e-12);
    assert!(fresh.lng > -157.9);
}

#[test]
fn speed_change_keeps_accumulated_time() {
    let mut clock = PlaybackClock::new(10_000.0).with_speed(2.0);
    clock.play();
    clock.tick(10.0);
    let before = clock.elapsed_secs();

    clock.set_speed(50.0);
    assert_eq!(clock.elapsed_secs(), before);

    clock.tick(1.0);
    assert!((clock.elapsed_secs() - (before + 50.0)).abs() < 1e-12);
}

#[test]
fn due_east_half_degree_scenario() {
    let p = position_at(KONA, 90.0, 30.0, 3600.0);
    assert!((p.lat - 19.5).abs() < 1e-9);
    let lng_gain = p.lng - KONA.lng;
    assert!((lng_gain - 0.5 / 19.5_f64.to_radians().cos()).abs() < 1e-9);
    assert!((lng_gain - 0.53).abs() < 0.001, "≈0.53°, got {lng_gain}");
}

#[test]
fn zero_duration_refuses_play() {
    let mut clock = PlaybackClock::new(0.0);
    assert!(!clock.play());
    let state = clock.state();
    assert_eq!(state.phase, PlaybackPhase::Paused);
    assert_eq!(state.elapsed_secs, 0.0);
    assert!(!state.is_playing);
}
