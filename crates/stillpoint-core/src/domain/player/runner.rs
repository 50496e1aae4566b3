//! Tokio glue for the player state machine
//!
//! The machine only records which timer it wants armed; the runner owns
//! the one real timer task. Arming spawns an abortable `sleep` tagged
//! with the machine's epoch, and the task is aborted before any re-arm,
//! so a late fire from an old task is rejected by the epoch check in
//! [`PlayerMachine::timer_fired`].

use super::machine::{PlayerMachine, PlayerMode};
use crate::domain::catalog::MeditationInstruction;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Drives a [`PlayerMachine`] with real tokio timers
#[derive(Debug)]
pub struct PlayerRunner {
    machine: PlayerMachine,
    fired_tx: mpsc::UnboundedSender<u64>,
    fired_rx: mpsc::UnboundedReceiver<u64>,
    timer_task: Option<JoinHandle<()>>,
    armed_epoch: Option<u64>,
}

impl PlayerRunner {
    /// Create a runner over a fixed instruction sequence
    pub fn new(instructions: Vec<MeditationInstruction>) -> Self {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        Self {
            machine: PlayerMachine::new(instructions),
            fired_tx,
            fired_rx,
            timer_task: None,
            armed_epoch: None,
        }
    }

    /// Read access to the underlying machine for display queries
    pub fn machine(&self) -> &PlayerMachine {
        &self.machine
    }

    /// Toggle play/pause and reconcile the timer task
    pub fn play_pause(&mut self) {
        self.machine.play_pause();
        self.sync_timer();
    }

    /// Advance one step and reconcile the timer task
    pub fn next(&mut self) {
        self.machine.next();
        self.sync_timer();
    }

    /// Go back one step and reconcile the timer task
    pub fn previous(&mut self) {
        self.machine.previous();
        self.sync_timer();
    }

    /// Reset to the start and reconcile the timer task
    pub fn restart(&mut self) {
        self.machine.restart();
        self.sync_timer();
    }

    /// Drain any delivered timer fires into the machine
    ///
    /// Returns true when a fire completed the session on this call; the
    /// caller surfaces that as the completion notification.
    pub fn poll_fired(&mut self) -> bool {
        let mut completed = false;
        while let Ok(epoch) = self.fired_rx.try_recv() {
            if self.machine.timer_fired(epoch) {
                completed = true;
            }
            // Auto-advance may have armed the next step
            self.sync_timer();
        }
        completed
    }

    /// Whether the machine has completed
    pub fn is_complete(&self) -> bool {
        self.machine.mode() == PlayerMode::Complete
    }

    /// Spawn or abort the timer task so exactly the machine's pending
    /// timer is live
    fn sync_timer(&mut self) {
        match self.machine.pending_timer() {
            Some(pending) if self.armed_epoch == Some(pending.epoch) => {}
            Some(pending) => {
                self.abort_timer();
                let tx = self.fired_tx.clone();
                let epoch = pending.epoch;
                let duration = pending.duration;
                self.timer_task = Some(tokio::spawn(async move {
                    sleep(duration).await;
                    // Receiver dropped means the runner is gone
                    let _ = tx.send(epoch);
                }));
                self.armed_epoch = Some(epoch);
            }
            None => self.abort_timer(),
        }
    }

    fn abort_timer(&mut self) {
        if let Some(task) = self.timer_task.take() {
            task.abort();
        }
        self.armed_epoch = None;
    }
}

impl Drop for PlayerRunner {
    fn drop(&mut self) {
        self.abort_timer();
    }
}
