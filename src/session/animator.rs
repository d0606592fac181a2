//! Placeholder typing animation.
//!
//! Cycles through `"<command> -> <description>"` samples in the input
//! placeholder: a quiet period on startup, characters revealed left to right,
//! a hold on the full text, then deletion right to left before moving to the
//! next command. The first real keystroke absorbs the animation for good.
//!
//! The animator owns no timers. It is a pure state machine: the host asks
//! [`PlaceholderAnimator::next_delay`] how long to wait, then calls
//! [`PlaceholderAnimator::tick`] once that delay has elapsed. Tests step it
//! directly.

use std::time::Duration;

use super::registry::CommandRegistry;

/// Quiet period before the first animation starts.
pub const INITIAL_DELAY: Duration = Duration::from_secs(2);
/// Interval between revealing or removing a single character.
pub const STEP_INTERVAL: Duration = Duration::from_millis(50);
/// Hold on the fully typed sample before deletion begins.
pub const FULL_TEXT_PAUSE: Duration = Duration::from_millis(1500);

/// Animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Startup quiet period
    WaitingInitial,
    /// Revealing characters left to right
    TypingForward,
    /// Holding the fully typed sample
    PausingFull,
    /// Removing characters right to left
    Deleting,
    /// The user typed; absorbing, never exited
    UserTyped,
}

#[derive(Debug, Clone)]
pub struct PlaceholderAnimator {
    samples: Vec<String>,
    sample_idx: usize,
    shown: usize,
    phase: Phase,
}

impl PlaceholderAnimator {
    /// Animate over the registry's commands, in declaration order.
    pub fn new(registry: &CommandRegistry) -> Self {
        let samples: Vec<String> = registry
            .specs()
            .iter()
            .map(|spec| format!("{} -> {}", spec.name, spec.description))
            .collect();
        let phase = if samples.is_empty() {
            Phase::UserTyped
        } else {
            Phase::WaitingInitial
        };
        Self {
            samples,
            sample_idx: 0,
            shown: 0,
            phase,
        }
    }

    /// An animator that starts (and stays) absorbed.
    pub fn disabled() -> Self {
        Self {
            samples: Vec::new(),
            sample_idx: 0,
            shown: 0,
            phase: Phase::UserTyped,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Delay until the next `tick`, or `None` once the animation is absorbed.
    pub fn next_delay(&self) -> Option<Duration> {
        match self.phase {
            Phase::UserTyped => None,
            Phase::WaitingInitial => Some(INITIAL_DELAY),
            Phase::PausingFull => Some(FULL_TEXT_PAUSE),
            Phase::TypingForward | Phase::Deleting => Some(STEP_INTERVAL),
        }
    }

    /// The placeholder text currently visible.
    pub fn placeholder(&self) -> String {
        match self.samples.get(self.sample_idx) {
            Some(sample) => sample.chars().take(self.shown).collect(),
            None => String::new(),
        }
    }

    /// Permanently disable the animation (the user typed).
    pub fn notify_user_typed(&mut self) {
        self.phase = Phase::UserTyped;
    }

    /// Advance one step. Call after `next_delay` has elapsed.
    pub fn tick(&mut self) {
        match self.phase {
            Phase::UserTyped => {}
            Phase::WaitingInitial => {
                self.shown = 0;
                self.phase = Phase::TypingForward;
            }
            Phase::TypingForward => {
                let len = self.current_len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::PausingFull;
                }
            }
            Phase::PausingFull => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                }
                if self.shown == 0 {
                    self.sample_idx = (self.sample_idx + 1) % self.samples.len();
                    self.phase = Phase::TypingForward;
                }
            }
        }
    }

    fn current_len(&self) -> usize {
        self.samples
            .get(self.sample_idx)
            .map(|s| s.chars().count())
            .unwrap_or(0)
    }
}
