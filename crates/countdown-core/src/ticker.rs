//! Tick Scheduler
//!
//! One interval drives one recompute pass over every countdown currently on
//! screen. Views subscribe on mount and unsubscribe on teardown, so nothing
//! keeps ticking for a countdown that is gone.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::{compute_remaining, TimeRemaining};

/// Handle returned by [`TickScheduler::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(u64);

#[derive(Debug, Clone)]
struct Watch {
    countdown_id: String,
    target: DateTime<Utc>,
}

/// Registry of displayed countdowns
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    next: u64,
    watches: BTreeMap<Subscription, Watch>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start recomputing `countdown_id` on every tick
    pub fn subscribe(&mut self, countdown_id: impl Into<String>, target: DateTime<Utc>) -> Subscription {
        self.next += 1;
        let subscription = Subscription(self.next);
        self.watches.insert(
            subscription,
            Watch {
                countdown_id: countdown_id.into(),
                target,
            },
        );
        subscription
    }

    /// Point an existing subscription at a new target (after an edit)
    pub fn retarget(&mut self, subscription: Subscription, target: DateTime<Utc>) -> bool {
        match self.watches.get_mut(&subscription) {
            Some(watch) => {
                watch.target = target;
                true
            }
            None => false,
        }
    }

    /// Stop ticking; false if the handle was already released
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.watches.remove(&subscription).is_some()
    }

    /// One pass: remaining time for every subscription, oldest first
    pub fn tick(&self, now: DateTime<Utc>) -> Vec<(String, TimeRemaining)> {
        self.watches
            .values()
            .map(|watch| (watch.countdown_id.clone(), compute_remaining(watch.target, now)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.watches.len()
    }

    /// No subscribers; the driving interval may pause
    pub fn is_idle(&self) -> bool {
        self.watches.is_empty()
    }
}
