//! Player state machine
//!
//! A single-threaded step sequencer over a fixed, ordered instruction
//! list. The machine never touches a clock: arming a timer means
//! recording a `PendingTimer`, and the owner reports expiry back through
//! [`PlayerMachine::timer_fired`]. Every transition that changes the index
//! or mode cancels the pending timer first and bumps the epoch, so at
//! most one timer is ever outstanding and a stale fire can never advance
//! the machine.

use crate::domain::catalog::MeditationInstruction;
use std::fmt;
use std::time::Duration;

/// Playback mode of the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMode {
    /// Loaded but not started, or reset via Restart
    Idle,
    /// Advancing; a timed step has a pending timer
    Playing,
    /// Suspended mid-step; no timer pending
    Paused,
    /// Walked past the last step; terminal until Restart
    Complete,
}

impl PlayerMode {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for PlayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The single timer the machine wants armed, tagged with the epoch it
/// was issued under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub epoch: u64,
    pub duration: Duration,
}

/// Timer-driven step sequencer for one open player view
#[derive(Debug)]
pub struct PlayerMachine {
    instructions: Vec<MeditationInstruction>,
    current: usize,
    mode: PlayerMode,
    epoch: u64,
    pending: Option<PendingTimer>,
}

impl PlayerMachine {
    /// Create an idle machine over a fixed instruction sequence
    pub fn new(instructions: Vec<MeditationInstruction>) -> Self {
        Self {
            instructions,
            current: 0,
            mode: PlayerMode::Idle,
            epoch: 0,
            pending: None,
        }
    }

    /// Toggle between playing and paused
    ///
    /// A no-op when the instruction list is empty or the machine has
    /// completed.
    pub fn play_pause(&mut self) {
        if self.instructions.is_empty() {
            return;
        }
        match self.mode {
            PlayerMode::Playing => {
                self.cancel_timer();
                self.mode = PlayerMode::Paused;
            }
            PlayerMode::Idle | PlayerMode::Paused => {
                self.mode = PlayerMode::Playing;
                self.arm_current_step();
            }
            PlayerMode::Complete => {}
        }
    }

    /// Advance to the next instruction; no-op at the last step or when
    /// completed
    pub fn next(&mut self) {
        if self.mode == PlayerMode::Complete {
            return;
        }
        if self.current + 1 >= self.instructions.len() {
            return;
        }
        self.cancel_timer();
        self.current += 1;
        if self.mode == PlayerMode::Playing {
            self.arm_current_step();
        }
    }

    /// Go back to the previous instruction; no-op at the first step or
    /// when completed
    pub fn previous(&mut self) {
        if self.mode == PlayerMode::Complete {
            return;
        }
        if self.current == 0 {
            return;
        }
        self.cancel_timer();
        self.current -= 1;
        if self.mode == PlayerMode::Playing {
            self.arm_current_step();
        }
    }

    /// Reset to the first instruction in idle mode; works from any mode
    pub fn restart(&mut self) {
        self.cancel_timer();
        self.current = 0;
        self.mode = PlayerMode::Idle;
    }

    /// Report that the timer armed under `epoch` has expired
    ///
    /// Stale fires (wrong epoch, paused, no timer outstanding) are
    /// ignored. Returns true when this fire completed the session.
    pub fn timer_fired(&mut self, epoch: u64) -> bool {
        if self.mode != PlayerMode::Playing {
            return false;
        }
        match self.pending {
            Some(pending) if pending.epoch == epoch => {}
            _ => return false,
        }

        self.cancel_timer();
        self.current += 1;

        if self.current >= self.instructions.len() {
            // Index parks at len so elapsed reads the full session
            self.mode = PlayerMode::Complete;
            return true;
        }

        self.arm_current_step();
        false
    }

    fn cancel_timer(&mut self) {
        self.pending = None;
        self.epoch += 1;
    }

    /// Arm a timer for the current step when it has a positive duration.
    /// Zero or absent duration means the step waits for manual Next.
    fn arm_current_step(&mut self) {
        if let Some(instruction) = self.instructions.get(self.current) {
            if let Some(seconds) = instruction.duration_seconds {
                if seconds > 0 {
                    self.pending = Some(PendingTimer {
                        epoch: self.epoch,
                        duration: Duration::from_secs(seconds as u64),
                    });
                }
            }
        }
    }

    // ========== Queries ==========

    /// Current playback mode
    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    /// Whether the machine has walked past the last step
    pub fn is_complete(&self) -> bool {
        self.mode == PlayerMode::Complete
    }

    /// Zero-based index of the current step; equals `total_steps` once
    /// complete
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of instructions in the sequence
    pub fn total_steps(&self) -> usize {
        self.instructions.len()
    }

    /// The instruction at the current index, if any
    pub fn current_instruction(&self) -> Option<&MeditationInstruction> {
        self.instructions.get(self.current)
    }

    /// The timer the owner should have armed, if any
    pub fn pending_timer(&self) -> Option<PendingTimer> {
        self.pending
    }

    /// Sum of step durations strictly before the current index, with
    /// untimed steps counted as zero
    ///
    /// A pure function of the index and the instruction list; it changes
    /// only at step boundaries, never within a step.
    pub fn elapsed_seconds(&self) -> i64 {
        self.instructions[..self.current.min(self.instructions.len())]
            .iter()
            .map(|i| i.duration_seconds.unwrap_or(0))
            .sum()
    }

    /// Elapsed time as MM:SS
    pub fn elapsed_display(&self) -> String {
        let total = self.elapsed_seconds();
        format!("{:02}:{:02}", total / 60, total % 60)
    }

    /// Fraction of the sequence walked, for progress display
    pub fn progress(&self) -> f64 {
        let total = self.instructions.len();
        if total == 0 || self.mode == PlayerMode::Complete {
            return if total == 0 { 0.0 } else { 1.0 };
        }
        self.current as f64 / (total.saturating_sub(1).max(1)) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn instruction(step_order: i64, duration_seconds: Option<i64>) -> MeditationInstruction {
        MeditationInstruction {
            id: step_order,
            session_id: 1,
            step_order,
            instruction_text: format!("Step {}", step_order),
            duration_seconds,
            is_pause: false,
            created_at: Utc::now(),
        }
    }

    fn machine(durations: &[Option<i64>]) -> PlayerMachine {
        PlayerMachine::new(
            durations
                .iter()
                .enumerate()
                .map(|(i, d)| instruction((i + 1) as i64, *d))
                .collect(),
        )
    }

    /// Fire the machine's currently pending timer, panicking if none is armed
    fn fire(m: &mut PlayerMachine) -> bool {
        let pending = m.pending_timer().expect("timer should be armed");
        m.timer_fired(pending.epoch)
    }

    #[test]
    fn test_initial_state() {
        let m = machine(&[Some(30), Some(60)]);
        assert_eq!(m.mode(), PlayerMode::Idle);
        assert_eq!(m.current_index(), 0);
        assert_eq!(m.total_steps(), 2);
        assert!(m.pending_timer().is_none());
        assert_eq!(m.elapsed_display(), "00:00");
    }

    #[test]
    fn test_play_arms_timer_for_timed_step() {
        let mut m = machine(&[Some(30), Some(60)]);
        m.play_pause();
        assert_eq!(m.mode(), PlayerMode::Playing);
        let pending = m.pending_timer().expect("armed");
        assert_eq!(pending.duration, Duration::from_secs(30));
    }

    #[test]
    fn test_play_with_empty_instructions_is_noop() {
        let mut m = machine(&[]);
        m.play_pause();
        assert_eq!(m.mode(), PlayerMode::Idle);
        assert!(m.pending_timer().is_none());
        m.next();
        m.previous();
        assert_eq!(m.current_index(), 0);
    }

    #[test]
    fn test_zero_and_absent_durations_do_not_arm() {
        let mut m = machine(&[Some(0), None]);
        m.play_pause();
        assert_eq!(m.mode(), PlayerMode::Playing);
        assert!(m.pending_timer().is_none());

        m.next();
        assert!(m.pending_timer().is_none());
    }

    #[test]
    fn test_pause_cancels_timer_and_blocks_stale_fire() {
        let mut m = machine(&[Some(30), Some(60)]);
        m.play_pause();
        let armed = m.pending_timer().expect("armed");

        m.play_pause();
        assert_eq!(m.mode(), PlayerMode::Paused);
        assert!(m.pending_timer().is_none());

        // The cancelled timer firing late must not move the index
        assert!(!m.timer_fired(armed.epoch));
        assert_eq!(m.current_index(), 0);
        assert_eq!(m.mode(), PlayerMode::Paused);
    }

    #[test]
    fn test_resume_rearms_current_step() {
        let mut m = machine(&[Some(30), Some(60)]);
        m.play_pause();
        m.play_pause(); // pause
        m.play_pause(); // resume
        assert_eq!(m.mode(), PlayerMode::Playing);
        let pending = m.pending_timer().expect("re-armed");
        assert_eq!(pending.duration, Duration::from_secs(30));
    }

    #[test]
    fn test_next_rearms_only_while_playing() {
        let mut m = machine(&[Some(30), Some(60), Some(90)]);

        // Idle: moving does not arm
        m.next();
        assert_eq!(m.current_index(), 1);
        assert!(m.pending_timer().is_none());

        // Playing: moving re-arms for the new step
        m.play_pause();
        let first = m.pending_timer().expect("armed");
        assert_eq!(first.duration, Duration::from_secs(60));
        m.next();
        let second = m.pending_timer().expect("armed");
        assert_eq!(second.duration, Duration::from_secs(90));
        assert_ne!(first.epoch, second.epoch);

        // The old step's timer is stale now
        assert!(!m.timer_fired(first.epoch));
        assert_eq!(m.current_index(), 2);
    }

    #[test]
    fn test_boundary_noops() {
        let mut m = machine(&[Some(30), Some(60)]);

        m.previous();
        assert_eq!(m.current_index(), 0);

        m.next();
        m.next(); // already at the last step
        assert_eq!(m.current_index(), 1);
    }

    #[test]
    fn test_previous_while_playing() {
        let mut m = machine(&[Some(30), Some(60)]);
        m.play_pause();
        m.next();
        m.previous();
        assert_eq!(m.current_index(), 0);
        let pending = m.pending_timer().expect("armed");
        assert_eq!(pending.duration, Duration::from_secs(30));
    }

    #[test]
    fn test_auto_advance_chain_to_complete() {
        let mut m = machine(&[Some(10), Some(20)]);
        m.play_pause();

        assert!(!fire(&mut m));
        assert_eq!(m.current_index(), 1);
        assert_eq!(m.mode(), PlayerMode::Playing);

        assert!(fire(&mut m));
        assert_eq!(m.mode(), PlayerMode::Complete);
        assert_eq!(m.current_index(), 2);
        assert!(m.pending_timer().is_none());
        assert!(m.current_instruction().is_none());
    }

    #[test]
    fn test_complete_is_terminal_until_restart() {
        let mut m = machine(&[Some(10)]);
        m.play_pause();
        assert!(fire(&mut m));

        // Everything but restart is a no-op now
        m.play_pause();
        m.next();
        m.previous();
        assert!(!m.timer_fired(0));
        assert_eq!(m.mode(), PlayerMode::Complete);
        assert!(m.pending_timer().is_none());

        m.restart();
        assert_eq!(m.mode(), PlayerMode::Idle);
        assert_eq!(m.current_index(), 0);
        assert_eq!(m.elapsed_seconds(), 0);
    }

    #[test]
    fn test_elapsed_is_prefix_sum() {
        let mut m = machine(&[Some(30), None, Some(45), Some(15)]);

        assert_eq!(m.elapsed_seconds(), 0);
        m.next();
        assert_eq!(m.elapsed_seconds(), 30);
        m.next();
        assert_eq!(m.elapsed_seconds(), 30); // None counts as zero
        m.next();
        assert_eq!(m.elapsed_seconds(), 75);
        assert_eq!(m.elapsed_display(), "01:15");
    }

    #[test]
    fn test_elapsed_at_complete_is_total() {
        let mut m = machine(&[Some(30), Some(45)]);
        m.play_pause();
        fire(&mut m);
        fire(&mut m);
        assert!(m.is_complete());
        assert_eq!(m.elapsed_seconds(), 75);
    }

    #[test]
    fn test_at_most_one_pending_timer_across_sequences() {
        let mut m = machine(&[Some(5), Some(5), Some(5), Some(5)]);

        m.play_pause();
        m.next();
        m.previous();
        m.play_pause();
        m.play_pause();
        m.next();
        m.restart();
        m.play_pause();

        // pending is an Option by construction; the live timer must carry
        // the machine's current epoch so every older handle is stale
        let pending = m.pending_timer().expect("armed");
        assert!(m.timer_fired(pending.epoch));
        assert_eq!(m.current_index(), 1);
    }

    #[test]
    fn test_mixed_timed_and_untimed_walkthrough() {
        let mut m = machine(&[Some(30), Some(0), Some(45)]);

        m.play_pause();
        let first = m.pending_timer().expect("armed for 30s");
        assert_eq!(first.duration, Duration::from_secs(30));

        // 30s elapses: advance to the untimed step, nothing armed
        assert!(!m.timer_fired(first.epoch));
        assert_eq!(m.current_index(), 1);
        assert!(m.pending_timer().is_none());
        assert_eq!(m.mode(), PlayerMode::Playing);

        // Manual next arms the 45s step
        m.next();
        let last = m.pending_timer().expect("armed for 45s");
        assert_eq!(last.duration, Duration::from_secs(45));

        // 45s elapses: past the end, complete
        assert!(m.timer_fired(last.epoch));
        assert_eq!(m.mode(), PlayerMode::Complete);
        assert_eq!(m.elapsed_seconds(), 75);
    }

    #[test]
    fn test_progress() {
        let mut m = machine(&[Some(1), Some(1), Some(1)]);
        assert_eq!(m.progress(), 0.0);
        m.next();
        assert_eq!(m.progress(), 0.5);
        m.next();
        assert_eq!(m.progress(), 1.0);

        let empty = machine(&[]);
        assert_eq!(empty.progress(), 0.0);
    }
}
