/// Match Engine - Multiset White Ball Matching
///
/// Compares a ticket against the drawing. White balls are matched as a
/// multiset: every drawn copy can satisfy at most one selected ball, so a
/// ticket holding `7, 7` against a drawing holding a single `7` scores one
/// match, not two.
///
/// ## Performance
/// The drawn balls are copied into a `SmallVec<[u32; 5]>` per ticket, which
/// lives on the stack. Matching is at most 5 x 5 comparisons.

use crate::domain::entities::{DrawResult, TicketRecord};
use smallvec::SmallVec;

/// Match counts for one ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCounts {
    /// Number of matched white balls, in `0..=5`
    pub white_matches: u8,
    pub powerball_matched: bool,
}

/// Counts selected balls found in `drawn`, consuming one drawn copy per match
#[inline]
pub fn count_white_matches(selected: &[u32], drawn: &[u32]) -> u8 {
    let mut remaining: SmallVec<[u32; 5]> = SmallVec::from_slice(drawn);
    let mut matches = 0u8;

    for number in selected {
        if let Some(pos) = remaining.iter().position(|candidate| candidate == number) {
            remaining.swap_remove(pos);
            matches += 1;
        }
    }

    matches
}

#[inline]
pub fn powerball_matches(ticket: &TicketRecord, draw: &DrawResult) -> bool {
    ticket.powerball == draw.powerball()
}

/// Stateless matcher for tickets against a drawing
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchEngine;

impl MatchEngine {
    pub fn new() -> Self {
        MatchEngine
    }

    /// Matches one ticket against the drawing
    ///
    /// Each call works on its own copy of the drawn balls; nothing carries
    /// over between tickets.
    #[inline]
    pub fn evaluate(&self, ticket: &TicketRecord, draw: &DrawResult) -> MatchCounts {
        MatchCounts {
            white_matches: count_white_matches(&ticket.white_balls, draw.white_balls()),
            powerball_matched: powerball_matches(ticket, draw),
        }
    }
}
