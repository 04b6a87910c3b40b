//! Time source for menu rendering and last-use stamps.

use chrono::{DateTime, FixedOffset, Local};

/// Provides the current local time together with its UTC offset.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Host wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().into()
    }
}

/// Clock that only moves when told to.
#[cfg(test)]
pub struct ManualClock(parking_lot::Mutex<DateTime<FixedOffset>>);

#[cfg(test)]
impl ManualClock {
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        Self(parking_lot::Mutex::new(start))
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.0.lock();
        *now += by;
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.0.lock()
    }
}
