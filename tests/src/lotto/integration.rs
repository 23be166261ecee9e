#![cfg(test)]
use std::collections::BTreeSet;

use pickr_common::config::{MAX_NUMBER, MIN_NUMBER, TICKET_SIZE};
use pickr_common::lotto::bonus::BonusNumber;
use pickr_common::lotto::tally::MatchCount;
use pickr_common::lotto::ticket::Ticket;
use pickr_core::draw::quick_pick;
use pickr_core::winning::WinningDraw;

/// This test walks the whole manual flow: an input line is pre-validated,
/// parsed into the winning ticket, paired with a bonus number, and played
/// entries are evaluated against the result.
#[test]
fn manual_flow_from_text_to_match_count() -> anyhow::Result<()> {
    let line = "1, 2, 3, 4, 5, 6";
    assert!(Ticket::validate(line), "pre-validation must accept the line");

    let winning: Ticket = line.parse()?;
    let draw = WinningDraw::new(winning, BonusNumber::new(7)?)?;

    let entry: Ticket = "4,5,6,7,8,9".parse()?;
    assert_eq!(draw.match_count(&entry).value(), 3);
    assert!(draw.bonus_matches(&entry), "entry carries the bonus number 7");

    let disjoint: Ticket = "40,41,42,43,44,45".parse()?;
    assert_eq!(draw.match_count(&disjoint).value(), 0);
    assert!(!draw.bonus_matches(&disjoint));

    Ok(())
}

/// Auto-generated tickets must plug into the same evaluation path as parsed
/// ones, and comparing a ticket against itself always yields a full match.
#[test]
fn quick_picks_evaluate_like_parsed_tickets() {
    for _ in 0..50 {
        let ticket = quick_pick();

        assert_eq!(
            ticket.match_count(&ticket).value(),
            TICKET_SIZE as u32,
            "a ticket matches itself completely"
        );
    }
}

/// Distribution sanity: repeated draws are independent and cover the whole
/// candidate range. Exact uniformity is not testable here, but a number that
/// never shows up across a thousand draws would point at a biased pool.
#[test]
fn quick_pick_covers_the_full_range() {
    let mut seen: BTreeSet<u32> = BTreeSet::new();

    for _ in 0..1000 {
        for number in quick_pick().numbers() {
            seen.insert(number.value());
        }
    }

    let expected: BTreeSet<u32> = (MIN_NUMBER..=MAX_NUMBER).collect();
    assert_eq!(
        seen, expected,
        "every candidate number should appear across a thousand draws"
    );
}

/// Summing one unit per shared number must agree with `match_count`.
#[test]
fn unit_sums_agree_with_match_count() -> anyhow::Result<()> {
    let mine: Ticket = "2,13,17,25,38,44".parse()?;
    let other: Ticket = "2,13,18,26,38,45".parse()?;

    let by_units: MatchCount = other
        .numbers()
        .filter(|number| mine.contains(*number))
        .map(|_| MatchCount::one())
        .sum();

    assert_eq!(by_units, mine.match_count(&other));
    Ok(())
}

/// Members of a manually built ticket, fed back in as raw numbers, rebuild
/// an equal ticket.
#[test]
fn tickets_round_trip_through_their_members() -> anyhow::Result<()> {
    let original = Ticket::from_numbers([3, 9, 14, 27, 33, 41])?;
    let rebuilt = Ticket::from_numbers(original.numbers().map(|n| n.value()))?;

    assert_eq!(original, rebuilt);
    Ok(())
}
