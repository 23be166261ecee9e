//! # Ticket Model
//!
//! Defines the possible ways a ticket comes into existence.
//!
//! This module handles parsing and representing a played ticket, which can be
//! built from:
//! * A raw input line (e.g., `"1, 2, 3, 4, 5, 6"`).
//! * A plain collection of integers.
//!
//! Random generation lives in the engine crate; the model itself is fully
//! deterministic.

use std::collections::BTreeSet;
use std::str::FromStr;

use tracing::debug;

use crate::config::TICKET_SIZE;
use crate::error::TicketError;

use super::bonus::BonusNumber;
use super::number::TicketNumber;
use super::tally::MatchCount;

/// A played ticket: exactly six distinct numbers, kept sorted ascending.
///
/// Immutable once constructed. No mutation methods exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    numbers: BTreeSet<TicketNumber>,
}

impl Ticket {
    /// Builds a ticket from raw integers.
    ///
    /// Every number is range-checked on its way into the set. Duplicates
    /// collapse inside the set, so an input with repeated entries fails the
    /// cardinality check the same way a short one does.
    pub fn from_numbers<I>(numbers: I) -> Result<Self, TicketError>
    where
        I: IntoIterator<Item = u32>,
    {
        let numbers: BTreeSet<TicketNumber> = numbers
            .into_iter()
            .map(TicketNumber::new)
            .collect::<Result<_, _>>()?;

        if numbers.len() != TICKET_SIZE {
            return Err(TicketError::WrongCount {
                actual: numbers.len(),
            });
        }

        Ok(Self { numbers })
    }

    /// Checks a raw input line without constructing anything.
    ///
    /// Accepts exactly the inputs [`Ticket::from_str`] accepts: six
    /// comma-separated numeric tokens after whitespace removal, no
    /// duplicates, all within range. Any violation returns `false` instead
    /// of failing.
    pub fn validate(text: &str) -> bool {
        let tokens = split_tokens(text);

        if tokens.len() != TICKET_SIZE {
            return false;
        }

        let mut seen: BTreeSet<u32> = BTreeSet::new();
        for token in &tokens {
            match token.parse::<u32>() {
                Ok(value) if TicketNumber::is_valid(value) => {
                    if !seen.insert(value) {
                        return false;
                    }
                }
                _ => return false,
            }
        }

        true
    }

    /// How many of `other`'s numbers this ticket also carries.
    ///
    /// Order-independent; equivalent to the intersection size.
    pub fn match_count(&self, other: &Ticket) -> MatchCount {
        other.numbers().fold(MatchCount::zero(), |count, number| {
            if self.contains(number) {
                count + MatchCount::one()
            } else {
                count
            }
        })
    }

    pub fn contains(&self, number: TicketNumber) -> bool {
        self.numbers.contains(&number)
    }

    /// Whether this ticket carries the bonus number.
    pub fn contains_bonus(&self, bonus: &BonusNumber) -> bool {
        self.contains(bonus.number())
    }

    /// Read-only view over the numbers, ascending.
    pub fn numbers(&self) -> impl Iterator<Item = TicketNumber> + '_ {
        self.numbers.iter().copied()
    }
}

impl FromStr for Ticket {
    type Err = TicketError;

    /// Parses an input line into a `Ticket`.
    ///
    /// All whitespace is stripped before splitting on commas, so
    /// `"1, 2,3 ,4,5,6"` parses the same as `"1,2,3,4,5,6"`. A token that is
    /// not an unsigned integer fails with [`TicketError::InvalidToken`];
    /// everything else delegates to [`Ticket::from_numbers`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numbers: Vec<u32> = split_tokens(s)
            .into_iter()
            .map(|token| {
                token.parse::<u32>().map_err(|_| {
                    debug!("rejecting ticket input, bad token: '{token}'");
                    TicketError::InvalidToken { token }
                })
            })
            .collect::<Result<_, _>>()?;

        Self::from_numbers(numbers)
    }
}

/// Strips every whitespace character, then splits on commas.
fn split_tokens(text: &str) -> Vec<String> {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    stripped.split(',').map(str::to_string).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
