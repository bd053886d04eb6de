//! See [`Clock`].

use chrono::{DateTime, FixedOffset, Local};

/// A source of the current wall-clock time.
pub(crate) trait Clock: Send + Sync {
    /// Returns the current instant, expressed in the UTC offset it should be displayed in.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// A [`Clock`] reading the system time in the system's local time zone.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A [`Clock`] stuck at one instant.
#[cfg(test)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct FixedClock(pub(crate) DateTime<FixedOffset>);

#[cfg(test)]
impl FixedClock {
    /// Constructs a [`FixedClock`] from an RFC 3339 timestamp.
    ///
    /// # Panics
    ///
    /// Panics if the timestamp isn't valid RFC 3339.
    pub(crate) fn at(timestamp: &str) -> Self {
        Self(DateTime::parse_from_rfc3339(timestamp).expect("timestamp should be valid RFC 3339"))
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
