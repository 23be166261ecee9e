use thiserror::Error;

use crate::config::TICKET_SIZE;

/// Validation failures reported by the domain constructors.
///
/// Every variant is a caller-input problem; nothing here is transient or
/// retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicketError {
    #[error("number {value} is outside the playable range")]
    OutOfRange { value: u32 },

    #[error("expected {TICKET_SIZE} distinct numbers, got {actual}")]
    WrongCount { actual: usize },

    #[error("'{token}' is not a number")]
    InvalidToken { token: String },

    #[error("bonus number {value} already belongs to the winning ticket")]
    BonusOverlap { value: u32 },
}
