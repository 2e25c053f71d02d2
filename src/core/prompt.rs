//! # Search Prompt Animation
//!
//! Generates the placeholder of the search box as if someone were typing it:
//!
//! ```text
//! "S" "Se" … "Search by "            prefix, typed once per mount
//! "Search by l" … "Search by location"   word typed at typing speed
//! (hold for dwell)
//! "Search by locatio" … "Search by "      word deleted at deleting speed
//! "Search by u" … "Search by user"        next word, wrapping forever
//! ```
//!
//! The animator is pure: it never looks at a clock. Each `tick()` performs one
//! transition and returns the delay before the next one, and the caller keeps
//! a single `TickSchedule` deadline. Since `tick` takes `&mut self` there is
//! no way for two ticks to interleave.
//!
//! ## Suspension
//!
//! While the search box has focus the animator is suspended: `tick()` does
//! nothing and `placeholder()` is empty. Resuming continues from the frozen
//! state, including a half-typed prefix.

use std::time::{Duration, Instant};

use log::debug;

use crate::core::config::ConfigError;

pub const DEFAULT_PREFIX: &str = "Search by ";
pub const DEFAULT_WORDS: [&str; 4] = ["location", "user", "project", "contractor"];
pub const DEFAULT_TYPING_SPEED: Duration = Duration::from_millis(100);
pub const DEFAULT_DELETING_SPEED: Duration = Duration::from_millis(50);
pub const DEFAULT_DWELL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq)]
pub struct PromptConfig {
    pub prefix: String,
    pub words: Vec<String>,
    pub typing_speed: Duration,
    pub deleting_speed: Duration,
    pub dwell: Duration,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            typing_speed: DEFAULT_TYPING_SPEED,
            deleting_speed: DEFAULT_DELETING_SPEED,
            dwell: DEFAULT_DWELL,
        }
    }
}

/// Snapshot of everything the animation has produced so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationState {
    /// Part of the prefix typed so far. Only ever grows.
    pub prefix_typed: String,
    /// Revealed part of the current word.
    pub keyword: String,
    pub keyword_index: usize,
    /// Number of characters of the current word revealed.
    pub cursor_index: usize,
    pub deleting: bool,
    pub suspended: bool,
}

pub struct PromptAnimator {
    config: PromptConfig,
    state: AnimationState,
    /// Set between the tick that finishes a word and the tick that starts
    /// deleting it; that gap is the dwell.
    dwelling: bool,
}

impl PromptAnimator {
    pub fn new(config: PromptConfig) -> Result<Self, ConfigError> {
        if config.words.is_empty() {
            return Err(ConfigError::Invalid(
                "search prompt needs at least one word".to_string(),
            ));
        }
        Ok(Self {
            config,
            state: AnimationState::default(),
            dwelling: false,
        })
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn is_suspended(&self) -> bool {
        self.state.suspended
    }

    fn current_word(&self) -> &str {
        &self.config.words[self.state.keyword_index]
    }

    /// Delay before the next tick, given the current state.
    pub fn next_delay(&self) -> Duration {
        if self.dwelling {
            self.config.dwell
        } else if self.state.deleting {
            self.config.deleting_speed
        } else {
            self.config.typing_speed
        }
    }

    /// Performs one transition.
    ///
    /// Returns the delay until the next tick, or `None` while suspended, in
    /// which case nothing changed and nothing should be scheduled.
    pub fn tick(&mut self) -> Option<Duration> {
        if self.state.suspended {
            return None;
        }

        let typed = self.state.prefix_typed.chars().count();
        let word_len = self.current_word().chars().count();

        if let Some(next) = self.config.prefix.chars().nth(typed) {
            self.state.prefix_typed.push(next);
        } else if self.dwelling {
            self.dwelling = false;
            self.state.deleting = true;
        } else if !self.state.deleting && self.state.cursor_index < word_len {
            if let Some(next) = self.current_word().chars().nth(self.state.cursor_index) {
                self.state.keyword.push(next);
            }
            self.state.cursor_index += 1;
        } else if !self.state.deleting {
            self.dwelling = true;
        } else if self.state.cursor_index > 0 {
            self.state.keyword.pop();
            self.state.cursor_index -= 1;
        } else {
            self.state.deleting = false;
            self.state.keyword_index = (self.state.keyword_index + 1) % self.config.words.len();
            debug!("Prompt moving to word {:?}", self.current_word());
        }

        Some(self.next_delay())
    }

    /// Freezes the animation. The placeholder blanks until `resume`.
    pub fn suspend(&mut self) {
        self.state.suspended = true;
    }

    /// Unfreezes and returns the delay before the next tick.
    pub fn resume(&mut self) -> Duration {
        self.state.suspended = false;
        self.next_delay()
    }

    /// Text to show in the empty search box.
    pub fn placeholder(&self) -> String {
        if self.state.suspended {
            return String::new();
        }
        format!("{}{}", self.state.prefix_typed, self.state.keyword)
    }
}

/// The single pending animation tick.
///
/// Re-armed after every tick, so a change of cadence takes effect on the very
/// next one. Arming replaces any previous deadline; there is never more than
/// one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickSchedule {
    deadline: Option<Instant>,
}

impl TickSchedule {
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consumes the deadline if it has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline, zero if already due.
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
