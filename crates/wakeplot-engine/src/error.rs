//! Error types for the fallible edges of the engine.
//!
//! Playback itself never fails: malformed numbers are neutralized instead.
//! Only loading and validating a scenario definition can be rejected.

use thiserror::Error;

use wakeplot_core::types::VesselId;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Scenario parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate vessel id: {id}")]
    DuplicateVessel { id: VesselId },

    #[error("Invalid scenario duration: {minutes} minutes")]
    InvalidDuration { minutes: f64 },
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
