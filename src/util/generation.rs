//! Stale-response guard for async work started from effects.
//!
//! Each new request takes a ticket; a result is applied only if no newer
//! request started since.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Start a new request and return its ticket.
    pub fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    #[must_use]
    pub fn is_current(self, ticket: u64) -> bool {
        self.0 == ticket
    }
}
