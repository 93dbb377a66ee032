//! Playback loop thread. Delivers frames at a fixed rate and feeds the
//! session the measured wall-clock delta of each one.
//!
//! Commands arrive via an `mpsc` channel. Each snapshot is handed to a sink
//! and stored in shared state for synchronous polling. Because simulated time
//! is driven by measured deltas, late or dropped frames do not skew playback.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use wakeplot_core::constants::FRAME_RATE;
use wakeplot_core::state::FrameSnapshot;
use wakeplot_engine::session::PlaybackSession;

use crate::state::LoopCommand;

/// Frame pacing configuration.
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    /// Target frames per second.
    pub frame_rate: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
        }
    }
}

impl LoopConfig {
    /// Nominal duration of one frame. A zero rate is treated as 1 fps.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.frame_rate.max(1)))
    }
}

/// Spawns the playback loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_playback_loop<F>(
    session: PlaybackSession,
    config: LoopConfig,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    sink: F,
) -> io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>)>
where
    F: FnMut(&FrameSnapshot) + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("wakeplot-playback".into())
        .spawn(move || {
            run_playback_loop(session, config, cmd_rx, &latest_snapshot, sink);
        })?;

    Ok((cmd_tx, handle))
}

/// The loop. Runs until Shutdown or channel disconnect.
fn run_playback_loop<F>(
    mut session: PlaybackSession,
    config: LoopConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
    mut sink: F,
) where
    F: FnMut(&FrameSnapshot),
{
    let frame_duration = config.frame_duration();
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;
    info!(frame_rate = config.frame_rate, "playback loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Playback(cmd)) => session.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => {
                    info!("playback loop shut down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("command channel closed");
                    return;
                }
            }
        }

        // 2. Advance by the real time since the previous frame
        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;
        let snapshot = session.tick(delta);

        // 3. Hand the frame to the renderer side
        sink(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next frame
        next_frame_time += frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_duration * 2 {
            // Too far behind; the measured delta already covers the gap
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wakeplot_core::commands::PlaybackCommand;
    use wakeplot_core::enums::{PlaybackPhase, SessionMode, VesselClass};
    use wakeplot_core::types::{GeoPoint, Vessel, VesselKinematics};
    use wakeplot_engine::session::SessionConfig;

    fn short_session() -> PlaybackSession {
        let mut session = PlaybackSession::new(2.0, SessionConfig::default());
        session.upsert_vessel(Vessel {
            name: "Ever Given".into(),
            hull_number: Some("IMO-9811000".into()),
            class: VesselClass::Merchant,
            nationality: Some("JPN".into()),
            kinematics: VesselKinematics::new(
                "merchant-1",
                270.0,
                22.0,
                GeoPoint::new(19.5, -155.5),
            ),
        });
        session
    }

    #[test]
    fn test_frame_duration() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(
            LoopConfig::default().frame_duration().as_nanos(),
            expected_nanos as u128
        );
        assert_eq!(
            LoopConfig { frame_rate: 0 }.frame_duration(),
            Duration::from_secs(1)
        );
    }

    #[test]
    fn test_loop_plays_to_completion() {
        let latest = Arc::new(Mutex::new(None));
        let (done_tx, done_rx) = mpsc::channel();

        let (cmd_tx, handle) = spawn_playback_loop(
            short_session(),
            LoopConfig::default(),
            latest.clone(),
            move |snapshot: &FrameSnapshot| {
                if snapshot.completed() {
                    let _ = done_tx.send(snapshot.playback);
                }
            },
        )
        .unwrap();

        cmd_tx
            .send(LoopCommand::Playback(PlaybackCommand::EnterPlayback))
            .unwrap();
        cmd_tx
            .send(LoopCommand::Playback(PlaybackCommand::SetSpeed {
                multiplier: 50.0,
            }))
            .unwrap();
        cmd_tx
            .send(LoopCommand::Playback(PlaybackCommand::Play))
            .unwrap();

        let final_state = done_rx
            .recv_timeout(Duration::from_secs(10))
            .expect("playback should complete");
        assert_eq!(final_state.elapsed_secs, 2.0);
        assert_eq!(final_state.phase, PlaybackPhase::Paused);

        cmd_tx.send(LoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.mode, SessionMode::Playback);
        assert_eq!(snapshot.vessels.len(), 1);
        assert!(snapshot.vessels[0].position.lng < -155.5);
    }

    #[test]
    fn test_loop_exits_when_sender_dropped() {
        let latest = Arc::new(Mutex::new(None));
        let (cmd_tx, handle) =
            spawn_playback_loop(short_session(), LoopConfig::default(), latest, |_| {}).unwrap();
        drop(cmd_tx);
        handle.join().unwrap();
    }
}
