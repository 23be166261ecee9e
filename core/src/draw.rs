//! # Quick-Pick Generation
//!
//! Draws tickets at random. The candidate pool is rebuilt on every call, so
//! no state is shared between draws; the only process-wide resource touched
//! is the thread RNG.

use pickr_common::config::{MAX_NUMBER, MIN_NUMBER, TICKET_SIZE};
use pickr_common::lotto::ticket::Ticket;
use rand::seq::SliceRandom;
use tracing::debug;

/// Draws one ticket uniformly without replacement.
///
/// A partial Fisher–Yates shuffle over the freshly materialized range picks
/// six numbers, so every 6-number combination is equally likely. Repeated
/// calls are independent.
pub fn quick_pick() -> Ticket {
    let mut pool: Vec<u32> = (MIN_NUMBER..=MAX_NUMBER).collect();
    let mut rng = rand::rng();

    let (picked, _) = pool.partial_shuffle(&mut rng, TICKET_SIZE);
    debug!("quick pick drew {picked:?}");

    Ticket::from_numbers(picked.iter().copied())
        .expect("partial shuffle of the candidate pool yields six distinct in-range numbers")
}
