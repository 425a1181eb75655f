//! Inter-arrival period tracking.
//!
//! Each transaction accepted into a store gets one period: the elapsed
//! time, in microseconds, since the previous acceptance. The first
//! acceptance is always period zero. Periods describe when things
//! happened, not what currently occupies a store slot, so removal never
//! touches them.

use std::time::Instant;

/// Records the gap between consecutive transaction acceptances.
///
/// Timing uses [`Instant`], which is monotonic, so a period can never be
/// negative even if the system wall clock steps backwards.
#[derive(Debug, Clone, Default)]
pub struct PeriodTracker {
    periods: Vec<u64>,
    last_arrival: Option<Instant>,
}

impl PeriodTracker {
    /// Creates an empty, uninitialized tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a live arrival.
    ///
    /// The very first call appends a period of zero without computing a
    /// delta. Every later call appends the microseconds elapsed since the
    /// previous recording, rounded to the nearest integer. The arrival
    /// timestamp is updated unconditionally on every call.
    pub fn record_arrival(&mut self) {
        let now = Instant::now();

        let period = match self.last_arrival {
            None => 0,
            Some(last) => {
                let elapsed = now.duration_since(last);
                ((elapsed.as_nanos() + 500) / 1_000) as u64
            }
        };

        self.periods.push(period);
        self.last_arrival = Some(now);
    }

    /// Records a period computed upstream, verbatim.
    ///
    /// Used when timing was captured elsewhere, e.g. a transaction replayed
    /// from a log. The arrival timestamp is still updated so that a
    /// subsequent live recording measures from this point.
    ///
    /// # Arguments
    ///
    /// * `period` - Elapsed microseconds supplied by the caller
    pub fn record_external(&mut self, period: u64) {
        self.periods.push(period);
        self.last_arrival = Some(Instant::now());
    }

    /// The recorded periods, in acceptance order, in microseconds.
    pub fn periods(&self) -> &[u64] {
        &self.periods
    }

    /// Number of recorded periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Drops all recorded periods and returns to the uninitialized state.
    ///
    /// The next [`record_arrival`](Self::record_arrival) after a clear
    /// produces a fresh zero period.
    pub fn clear(&mut self) {
        self.periods.clear();
        self.last_arrival = None;
    }
}
