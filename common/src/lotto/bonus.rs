use std::fmt;

use crate::error::TicketError;

use super::number::TicketNumber;
use super::ticket::Ticket;

/// The supplementary number drawn alongside the winning ticket.
///
/// Only ever checked for membership; it never contributes to the primary
/// match count. An independent peer of the winning ticket, not owned by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BonusNumber(TicketNumber);

impl BonusNumber {
    /// Same range rule as any other playable number.
    pub fn new(value: u32) -> Result<Self, TicketError> {
        Ok(Self(TicketNumber::new(value)?))
    }

    pub fn number(&self) -> TicketNumber {
        self.0
    }

    /// Whether `ticket` carries this bonus number.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        ticket.contains(self.0)
    }

    /// Negation of [`BonusNumber::matches`].
    pub fn misses(&self, ticket: &Ticket) -> bool {
        !self.matches(ticket)
    }
}

impl fmt::Display for BonusNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
