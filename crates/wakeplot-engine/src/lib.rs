//! Kinematic playback engine for WAKEPLOT.
//!
//! Dead-reckons vessel positions from session baselines, samples trails,
//! and turns wall-clock frame deltas into simulated elapsed time.
//! Completely headless and single-threaded, enabling deterministic testing.

pub mod baseline;
pub mod clock;
pub mod error;
pub mod resolver;
pub mod scenario;
pub mod session;
pub mod trail;

pub use wakeplot_core as core;
pub use clock::PlaybackClock;
pub use session::{PlaybackSession, SessionConfig};
