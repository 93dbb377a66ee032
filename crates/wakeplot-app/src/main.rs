//! Headless playback of a scenario.
//!
//! Usage: `wakeplot [scenario.json] [speed]`
//!
//! Without a scenario file a seeded demo fleet is played. The final frame is
//! printed to stdout as JSON.

use std::sync::mpsc;

use anyhow::{anyhow, Context};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wakeplot_app::playback_loop::{spawn_playback_loop, LoopConfig};
use wakeplot_app::state::AppState;
use wakeplot_core::commands::PlaybackCommand;
use wakeplot_core::constants::SPEED_PRESETS;
use wakeplot_engine::scenario::Scenario;
use wakeplot_engine::session::SessionConfig;

const DEMO_SEED: u64 = 42;
const DEMO_FLEET_SIZE: usize = 8;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let scenario = match args.next() {
        Some(path) => load_scenario(&path)?,
        None => Scenario::demo(DEMO_SEED, DEMO_FLEET_SIZE),
    };
    let speed = match args.next() {
        Some(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("invalid speed multiplier: {raw}"))?,
        None => SPEED_PRESETS[SPEED_PRESETS.len() - 1],
    };

    info!(
        scenario = %scenario.name,
        vessels = scenario.vessels.len(),
        minutes = scenario.duration_minutes,
        speed,
        "scenario loaded"
    );

    let config = SessionConfig {
        speed_multiplier: speed,
        ..Default::default()
    };
    let mut session = scenario.into_session(config);

    if session.duration_secs() <= 0.0 {
        warn!("scenario has no duration; nothing to play");
        println!("{}", serde_json::to_string_pretty(&session.tick(0.0))?);
        return Ok(());
    }

    let state = AppState::new();
    let (done_tx, done_rx) = mpsc::channel();
    let (cmd_tx, handle) = spawn_playback_loop(
        session,
        LoopConfig::default(),
        state.latest_snapshot.clone(),
        move |snapshot| {
            if snapshot.completed() {
                let _ = done_tx.send(());
            }
        },
    )
    .context("failed to spawn playback loop")?;
    state.attach(cmd_tx)?;

    state.send_command(PlaybackCommand::EnterPlayback)?;
    state.send_command(PlaybackCommand::Play)?;

    done_rx
        .recv()
        .context("playback loop stopped before completion")?;

    state.shutdown()?;
    handle
        .join()
        .map_err(|_| anyhow!("playback loop panicked"))?;

    let snapshot = state.snapshot().context("no frame was produced")?;
    info!(clock = %snapshot.clock_label, "playback finished");
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn load_scenario(path: &str) -> anyhow::Result<Scenario> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {path}"))?;
    Scenario::from_json(&json).with_context(|| format!("invalid scenario {path}"))
}
