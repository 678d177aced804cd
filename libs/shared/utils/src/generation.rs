//! Request-generation tokens.
//!
//! Every fetch started on behalf of a selection takes a [`Ticket`]. Starting
//! a newer fetch (or clearing the selection) advances the generation, and a
//! completion holding an older ticket is dropped instead of applied.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default, Clone)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersedes everything issued so far and returns the new current ticket.
    pub fn issue(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    /// Supersedes everything issued so far without starting a new request.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}
