//! Core types and definitions for WAKEPLOT.
//!
//! This crate defines the vocabulary shared across the other crates:
//! vessel kinematics, playback commands, events, frame snapshots and constants.
//! It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
