/// Domain Entities - Tickets and Drawings
///
/// Both entities are only ever built by the validators in
/// `domain::validation`, so a value of either type always carries exactly
/// five white balls and one powerball.

use serde::{Deserialize, Serialize};

/// 每张彩票和每次开奖的白球数量
pub const WHITE_BALL_COUNT: usize = 5;

/// A purchased ticket
///
/// White balls keep the purchase order and any duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Display identifier, not required to be unique
    pub ticket_number: String,
    pub white_balls: [u32; WHITE_BALL_COUNT],
    pub powerball: u32,
}

impl TicketRecord {
    pub fn new(
        ticket_number: impl Into<String>,
        white_balls: [u32; WHITE_BALL_COUNT],
        powerball: u32,
    ) -> Self {
        Self {
            ticket_number: ticket_number.into(),
            white_balls,
            powerball,
        }
    }
}

/// The official drawing result
///
/// White balls are stored sorted ascending; matching does not depend on
/// their order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    white_balls: [u32; WHITE_BALL_COUNT],
    powerball: u32,
}

impl DrawResult {
    pub fn new(mut white_balls: [u32; WHITE_BALL_COUNT], powerball: u32) -> Self {
        white_balls.sort_unstable();
        Self {
            white_balls,
            powerball,
        }
    }

    /// Sorted view of the drawn white balls
    #[inline]
    pub fn white_balls(&self) -> &[u32; WHITE_BALL_COUNT] {
        &self.white_balls
    }

    #[inline]
    pub fn powerball(&self) -> u32 {
        self.powerball
    }
}
