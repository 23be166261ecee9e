use std::fmt;

use crate::config::{MAX_NUMBER, MIN_NUMBER};
use crate::error::TicketError;

/// A single playable number.
///
/// Once constructed, the value is guaranteed to lie within
/// `[MIN_NUMBER, MAX_NUMBER]`. Ordering follows the underlying integer so
/// sets of numbers stay sorted ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TicketNumber(u32);

impl TicketNumber {
    pub fn new(value: u32) -> Result<Self, TicketError> {
        if !Self::is_valid(value) {
            return Err(TicketError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Range check without constructing anything.
    ///
    /// Accepts exactly what [`TicketNumber::new`] accepts.
    pub fn is_valid(value: u32) -> bool {
        (MIN_NUMBER..=MAX_NUMBER).contains(&value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for TicketNumber {
    type Error = TicketError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
