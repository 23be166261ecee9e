//! # Lotto Domain Models
//!
//! The value objects of the game.
//!
//! ## Value Objects
//! * [`ticket::Ticket`]: A played ticket of six distinct numbers, kept sorted.
//! * [`number::TicketNumber`]: A single number, guaranteed in range.
//! * [`bonus::BonusNumber`]: The supplementary drawn number.
//! * [`tally::MatchCount`]: How many numbers two tickets share.
//!
//! ## Design Principles
//! * **Rich Models**: Parsing, validation and comparison live on the types.
//! * **Immutability**: Constructed once, never mutated afterwards.

pub mod bonus;
pub mod number;
pub mod tally;
pub mod ticket;
