/// Check Tickets Use Case
///
/// Runs every ticket through the match engine and the prize calculator and
/// collects the winners.
///
/// ## Workflow
/// 1. For each ticket, in input order, count matches against the drawing
/// 2. Look up the prize tier
/// 3. Keep the ticket if it won, count it either way
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use powerball_checker::application::use_cases::CheckRunner;
/// use powerball_checker::domain::{DrawResult, PrizeTier, TicketRecord};
///
/// let tickets = vec![Arc::new(TicketRecord::new("T1", [1, 2, 3, 4, 5], 6))];
/// let draw = DrawResult::new([1, 2, 3, 4, 5], 6);
///
/// let report = CheckRunner::new().run(&tickets, &draw);
/// assert!(report.grand_prize_won);
/// assert_eq!(report.outcomes[0].tier, PrizeTier::GrandPrize);
/// ```

use crate::domain::entities::{DrawResult, TicketRecord};
use crate::domain::matching::MatchEngine;
use crate::domain::prize::{PrizeCalculator, PrizeTier};
use crate::shared::metrics::METRICS;
use std::sync::Arc;
use std::time::Instant;

/// A winning ticket and its tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Shared with the loaded ticket set
    pub ticket: Arc<TicketRecord>,
    pub tier: PrizeTier,
}

/// Overall result announcement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    GrandPrize,
    SomeWinners,
    NoWinners,
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::GrandPrize => "GRAND PRIZE WON!",
            Verdict::SomeWinners => "Some winning tickets found...",
            Verdict::NoWinners => "Sorry to announce... no tickets have won",
        }
    }
}

/// Result of one check over the whole ticket set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Winning tickets in ticket order
    pub outcomes: Vec<Outcome>,

    /// True iff some outcome is `GrandPrize`
    pub grand_prize_won: bool,

    /// Every ticket evaluated, winners or not
    pub tickets_checked: usize,
}

impl CheckReport {
    pub fn verdict(&self) -> Verdict {
        if self.grand_prize_won {
            Verdict::GrandPrize
        } else if !self.outcomes.is_empty() {
            Verdict::SomeWinners
        } else {
            Verdict::NoWinners
        }
    }

    /// Sum of fixed payouts; the jackpot is not included
    pub fn fixed_winnings(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.tier.payout())
            .sum()
    }
}

/// Sequential ticket checker
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckRunner {
    engine: MatchEngine,
    calculator: PrizeCalculator,
}

impl CheckRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks all tickets against the drawing
    ///
    /// Produces a fresh report on every call; nothing is carried over from a
    /// previous run.
    pub fn run(&self, tickets: &[Arc<TicketRecord>], draw: &DrawResult) -> CheckReport {
        let started = Instant::now();
        let mut outcomes = Vec::new();
        let mut grand_prize_won = false;

        for ticket in tickets {
            let counts = self.engine.evaluate(ticket, draw);
            let tier = self.calculator.prize_for(counts);

            tracing::debug!(
                ticket = %ticket.ticket_number,
                white_matches = counts.white_matches,
                powerball_matched = counts.powerball_matched,
                tier = tier.as_str(),
                "ticket evaluated"
            );

            METRICS.outcomes_total.with_label_values(&[tier.as_str()]).inc();

            if !tier.is_win() {
                continue;
            }
            if tier == PrizeTier::GrandPrize {
                grand_prize_won = true;
            }
            outcomes.push(Outcome {
                ticket: Arc::clone(ticket),
                tier,
            });
        }

        METRICS
            .check_duration
            .observe(started.elapsed().as_secs_f64() * 1_000_000.0);

        CheckReport {
            outcomes,
            grand_prize_won,
            tickets_checked: tickets.len(),
        }
    }
}
