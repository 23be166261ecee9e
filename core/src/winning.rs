//! # Winning Draw
//!
//! Pairs the winning ticket with its bonus number and evaluates played
//! tickets against it.

use pickr_common::error::TicketError;
use pickr_common::lotto::bonus::BonusNumber;
use pickr_common::lotto::tally::MatchCount;
use pickr_common::lotto::ticket::Ticket;

/// The official result of a draw.
///
/// Construction guarantees the bonus number does not appear among the
/// winning numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningDraw {
    winning: Ticket,
    bonus: BonusNumber,
}

impl WinningDraw {
    pub fn new(winning: Ticket, bonus: BonusNumber) -> Result<Self, TicketError> {
        if bonus.matches(&winning) {
            return Err(TicketError::BonusOverlap {
                value: bonus.number().value(),
            });
        }

        Ok(Self { winning, bonus })
    }

    pub fn winning(&self) -> &Ticket {
        &self.winning
    }

    pub fn bonus(&self) -> BonusNumber {
        self.bonus
    }

    /// How many of `entry`'s numbers appear among the winning numbers.
    pub fn match_count(&self, entry: &Ticket) -> MatchCount {
        self.winning.match_count(entry)
    }

    /// Whether `entry` carries the bonus number.
    pub fn bonus_matches(&self, entry: &Ticket) -> bool {
        self.bonus.matches(entry)
    }
}
