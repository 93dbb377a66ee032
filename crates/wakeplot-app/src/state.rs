//! Host state shared between the caller and the playback loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context};

use wakeplot_core::commands::PlaybackCommand;
use wakeplot_core::state::FrameSnapshot;

/// Commands sent to the playback loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A playback command to forward to the session.
    Playback(PlaybackCommand),
    /// Stop the loop thread.
    Shutdown,
}

/// Shared host state.
///
/// - `command_tx` is `None` until a loop is attached.
/// - `latest_snapshot` is written by the loop thread after every frame.
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route future commands to a running loop.
    pub fn attach(&self, tx: mpsc::Sender<LoopCommand>) -> anyhow::Result<()> {
        let mut lock = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command channel lock poisoned: {e}"))?;
        *lock = Some(tx);
        Ok(())
    }

    pub fn is_attached(&self) -> bool {
        self.command_tx
            .lock()
            .map(|lock| lock.is_some())
            .unwrap_or(false)
    }

    /// Forward a playback command to the loop.
    pub fn send_command(&self, command: PlaybackCommand) -> anyhow::Result<()> {
        self.send(LoopCommand::Playback(command))
    }

    /// Ask the loop to stop and detach from it.
    pub fn shutdown(&self) -> anyhow::Result<()> {
        self.send(LoopCommand::Shutdown)?;
        let mut lock = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command channel lock poisoned: {e}"))?;
        *lock = None;
        Ok(())
    }

    /// Most recent frame, if any has been produced.
    pub fn snapshot(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    fn send(&self, command: LoopCommand) -> anyhow::Result<()> {
        let lock = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command channel lock poisoned: {e}"))?;
        let tx = lock.as_ref().context("playback loop not started")?;
        tx.send(command)
            .map_err(|e| anyhow!("failed to send command: {e}"))
    }
}
