//! Trailing-edge debounce without a clock.
//!
//! The caller owns the timer: after every [`Debounce::push`] it schedules a
//! callback that hands the returned ticket to [`Debounce::fire`] once the
//! delay has passed. Only the newest ticket yields a value, so a burst of
//! pushes collapses into one delivery of the last value.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Debounce<T> {
    issued: u64,
    pending: Option<(Ticket, T)>,
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debounce<T> {
    pub fn new() -> Self {
        Self {
            issued: 0,
            pending: None,
        }
    }

    /// Replace the pending value; earlier tickets become stale.
    pub fn push(&mut self, value: T) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some((ticket, value));
        ticket
    }

    /// Take the pending value if `ticket` is the newest one.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        match self.pending.take() {
            Some((latest, value)) if latest == ticket => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }
}
