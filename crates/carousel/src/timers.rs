//! Cancel-and-replace timers keyed by purpose.
//!
//! Time is a virtual offset (`Duration` since mount) supplied by the caller,
//! so the same queue works under a real clock and in tests.

use std::collections::BTreeMap;
use std::time::Duration;

/// What a pending timer is for. At most one timer per key is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKey {
    /// Snap the target to the nearest sector once scrolling goes quiet.
    Snap,
    /// Advance the wheel by one panel after a period without interaction.
    IdleAdvance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    deadline: Duration,
    period: Option<Duration>,
}

#[derive(Debug, Default, Clone)]
pub struct Timers {
    pending: BTreeMap<TimerKey, Pending>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to fire once at `now + delay`, replacing any pending
    /// timer of that key. Returns true when a pending timer was replaced.
    pub fn schedule_once(&mut self, key: TimerKey, now: Duration, delay: Duration) -> bool {
        self.pending
            .insert(
                key,
                Pending {
                    deadline: now + delay,
                    period: None,
                },
            )
            .is_some()
    }

    /// Schedule `key` to fire every `period` starting at `now + period`,
    /// replacing any pending timer of that key.
    pub fn schedule_repeating(&mut self, key: TimerKey, now: Duration, period: Duration) -> bool {
        // A zero period would fire forever within one advance
        let period = period.max(Duration::from_millis(1));
        self.pending
            .insert(
                key,
                Pending {
                    deadline: now + period,
                    period: Some(period),
                },
            )
            .is_some()
    }

    /// Returns true when a pending timer was removed.
    pub fn cancel(&mut self, key: TimerKey) -> bool {
        self.pending.remove(&key).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.pending.contains_key(&key)
    }

    pub fn deadline(&self, key: TimerKey) -> Option<Duration> {
        self.pending.get(&key).map(|p| p.deadline)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns the earliest timer due at or before `now`.
    ///
    /// Ties go to the lower key. Repeating timers are re-armed one period
    /// after the deadline that fired, so a long advance yields every
    /// missed occurrence in order.
    pub fn pop_due(&mut self, now: Duration) -> Option<(TimerKey, Duration)> {
        let (key, pending) = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .min_by_key(|(key, p)| (p.deadline, **key))
            .map(|(key, p)| (*key, *p))?;

        match pending.period {
            Some(period) => {
                self.pending.insert(
                    key,
                    Pending {
                        deadline: pending.deadline + period,
                        period: Some(period),
                    },
                );
            }
            None => {
                self.pending.remove(&key);
            }
        }

        Some((key, pending.deadline))
    }

    /// Fires everything due at or before `now` and returns the keys in
    /// firing order.
    pub fn advance(&mut self, now: Duration) -> Vec<TimerKey> {
        std::iter::from_fn(|| self.pop_due(now))
            .map(|(key, _)| key)
            .collect()
    }
}
