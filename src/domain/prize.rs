/// Prize Calculator - Fixed Tier Table
///
/// Maps match counts to a prize tier. Rows are checked top-down and the first
/// matching row wins:
///
/// | white | powerball | tier          |
/// |-------|-----------|---------------|
/// | 5     | yes       | GrandPrize    |
/// | 5     | no        | OneMillion    |
/// | 4     | yes       | FiftyThousand |
/// | 4     | no        | OneHundred    |
/// | 3     | yes       | OneHundred    |
/// | 3     | no        | Seven         |
/// | 2     | yes       | Seven         |
/// | 0, 1  | yes       | Four          |
/// | other |           | NoWin         |
///
/// Two match profiles share `OneHundred` and two share `Seven`; the official
/// rules pay the same amount for them.

use crate::domain::matching::MatchCounts;
use serde::{Deserialize, Serialize};

/// Prize tiers, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrizeTier {
    /// 5 white + powerball, jackpot amount varies per drawing
    GrandPrize,
    OneMillion,
    FiftyThousand,
    OneHundred,
    Seven,
    Four,
    NoWin,
}

impl PrizeTier {
    pub const ALL: [PrizeTier; 7] = [
        PrizeTier::GrandPrize,
        PrizeTier::OneMillion,
        PrizeTier::FiftyThousand,
        PrizeTier::OneHundred,
        PrizeTier::Seven,
        PrizeTier::Four,
        PrizeTier::NoWin,
    ];

    #[inline]
    pub fn is_win(self) -> bool {
        self != PrizeTier::NoWin
    }

    /// Fixed payout in dollars; `None` for the jackpot and for no win
    pub fn payout(self) -> Option<u64> {
        match self {
            PrizeTier::GrandPrize => None,
            PrizeTier::OneMillion => Some(1_000_000),
            PrizeTier::FiftyThousand => Some(50_000),
            PrizeTier::OneHundred => Some(100),
            PrizeTier::Seven => Some(7),
            PrizeTier::Four => Some(4),
            PrizeTier::NoWin => None,
        }
    }

    /// Human readable winnings label
    pub fn label(self) -> &'static str {
        match self {
            PrizeTier::GrandPrize => "GRAND PRIZE",
            PrizeTier::OneMillion => "$1,000,000",
            PrizeTier::FiftyThousand => "$50,000",
            PrizeTier::OneHundred => "$100",
            PrizeTier::Seven => "$7",
            PrizeTier::Four => "$4",
            PrizeTier::NoWin => "no win",
        }
    }

    /// Stable identifier used for metric labels
    pub fn as_str(self) -> &'static str {
        match self {
            PrizeTier::GrandPrize => "grand_prize",
            PrizeTier::OneMillion => "one_million",
            PrizeTier::FiftyThousand => "fifty_thousand",
            PrizeTier::OneHundred => "one_hundred",
            PrizeTier::Seven => "seven",
            PrizeTier::Four => "four",
            PrizeTier::NoWin => "no_win",
        }
    }
}

impl std::fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Prize table lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct PrizeCalculator;

impl PrizeCalculator {
    pub fn new() -> Self {
        PrizeCalculator
    }

    /// Returns the tier for a white-ball match count and powerball result
    pub fn prize(&self, white_matches: u8, powerball_matched: bool) -> PrizeTier {
        match (white_matches, powerball_matched) {
            (5, true) => PrizeTier::GrandPrize,
            (5, false) => PrizeTier::OneMillion,
            (4, true) => PrizeTier::FiftyThousand,
            (4, false) | (3, true) => PrizeTier::OneHundred,
            (3, false) | (2, true) => PrizeTier::Seven,
            (2, false) => PrizeTier::NoWin,
            (0 | 1, true) => PrizeTier::Four,
            _ => PrizeTier::NoWin,
        }
    }

    #[inline]
    pub fn prize_for(&self, counts: MatchCounts) -> PrizeTier {
        self.prize(counts.white_matches, counts.powerball_matched)
    }
}
