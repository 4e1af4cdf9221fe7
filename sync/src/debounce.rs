use std::time::{Duration, Instant};

use log::{trace, warn};

/// Trailing-edge debounce timer owned by a single host
///
/// Every [`schedule`](Debouncer::schedule) supersedes the pending deadline,
/// so only the last request of a burst is ever due. The timer does not fire
/// on its own: the owner polls [`take_due`](Debouncer::take_due) each turn.
///
/// A delay too large to be represented as an [`Instant`] keeps the request
/// pending without ever making it due.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Deadline>,
    superseded: u64,
}

#[derive(Debug, Clone, Copy)]
enum Deadline {
    At(Instant),
    Never,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            superseded: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Requests a run `delay` after `now`, replacing any pending request
    pub fn schedule(&mut self, now: Instant) {
        if self.pending.is_some() {
            self.superseded += 1;
        }
        let deadline = match now.checked_add(self.delay) {
            Some(instant) => Deadline::At(instant),
            None => {
                warn!("Debounce delay {:?} overflows, request will never be due", self.delay);
                Deadline::Never
            }
        };
        trace!("Debouncer::schedule(deadline in {:?})", self.delay);
        self.pending = Some(deadline);
    }

    /// Drops the pending request, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending request becomes due. `None` if nothing is pending or
    /// the deadline is out of range.
    pub fn deadline(&self) -> Option<Instant> {
        match self.pending {
            Some(Deadline::At(instant)) => Some(instant),
            _ => None,
        }
    }

    /// Number of requests that were replaced before they ran
    pub fn superseded(&self) -> u64 {
        self.superseded
    }

    /// Consumes the pending request if its deadline has been reached
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(Deadline::At(deadline)) if now >= deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
