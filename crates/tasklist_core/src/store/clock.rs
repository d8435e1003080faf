//! Creation-time source for task ids.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the current time in Unix epoch milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Manually driven clock for deterministic ids.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: Cell<i64>,
}

impl FixedClock {
    pub fn new(now: i64) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.set(now);
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get().saturating_add(millis));
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}
