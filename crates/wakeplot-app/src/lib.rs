//! WAKEPLOT headless host.
//!
//! Drives a playback session from a frame-loop thread, the way a chart
//! front end would, and exposes the latest snapshot for polling.

pub mod playback_loop;
pub mod state;

pub use wakeplot_core as core;
