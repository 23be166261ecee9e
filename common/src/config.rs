/// Smallest playable number, inclusive.
pub const MIN_NUMBER: u32 = 1;

/// Largest playable number, inclusive.
pub const MAX_NUMBER: u32 = 45;

/// How many distinct numbers a ticket carries.
pub const TICKET_SIZE: usize = 6;

/// Unit price of a single ticket.
///
/// Currency-agnostic; comparison logic never reads it.
pub const TICKET_PRICE: u32 = 1000;
