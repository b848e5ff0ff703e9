//! Deadline tracking for the chip poll loops.
//!
//! A [`Deadline`] is started from a [`WaitBudget`] and charged once
//! per poll; it expires either after a number of polls or after wall-clock
//! time has elapsed, whichever the budget names.

use std::time::{Duration, Instant};

use crate::config::WaitBudget;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// A running wait started from a [`WaitBudget`].
#[derive(Debug)]
pub struct Deadline {
    budget: WaitBudget,
    started: Instant,
    polls: u32,
}

impl Deadline {
    pub fn start(budget: WaitBudget) -> Self {
        Self {
            budget,
            started: Instant::now(),
            polls: 0,
        }
    }

    /// Account for one poll and report whether the budget is now spent.
    pub fn tick(&mut self) -> bool {
        self.polls = self.polls.saturating_add(1);
        match self.budget {
            WaitBudget::Polls(max) => self.polls >= max,
            WaitBudget::Elapsed(limit) => self.started.elapsed() >= limit,
        }
    }

    /// Polls charged so far.
    pub fn polls(&self) -> u32 {
        self.polls
    }
}
