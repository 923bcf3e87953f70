/// Data Transfer Objects
///
/// Flat, serializable views of a check for the interfaces layer. Domain
/// types stay free of presentation concerns.

use crate::application::use_cases::{CheckReport, Outcome, TicketLoadSummary, Verdict};
use crate::domain::entities::DrawResult;
use crate::domain::prize::PrizeTier;
use serde::Serialize;

/// One winning ticket
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeDto {
    pub ticket_number: String,
    pub white_balls: [u32; 5],
    pub powerball: u32,
    pub tier: PrizeTier,
    pub winnings: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout: Option<u64>,
}

impl From<&Outcome> for OutcomeDto {
    fn from(outcome: &Outcome) -> Self {
        Self {
            ticket_number: outcome.ticket.ticket_number.clone(),
            white_balls: outcome.ticket.white_balls,
            powerball: outcome.ticket.powerball,
            tier: outcome.tier,
            winnings: outcome.tier.label(),
            payout: outcome.tier.payout(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DrawDto {
    pub white_balls: [u32; 5],
    pub powerball: u32,
}

impl From<&DrawResult> for DrawDto {
    fn from(draw: &DrawResult) -> Self {
        Self {
            white_balls: *draw.white_balls(),
            powerball: draw.powerball(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadDto {
    pub validated: usize,
    pub rejected: usize,
}

impl From<&TicketLoadSummary> for LoadDto {
    fn from(summary: &TicketLoadSummary) -> Self {
        Self {
            validated: summary.validated_count(),
            rejected: summary.rejected_count(),
        }
    }
}

/// Complete check result as emitted by `--format json`
#[derive(Debug, Clone, Serialize)]
pub struct CheckReportDto {
    pub verdict: &'static str,
    pub grand_prize_won: bool,
    pub tickets_checked: usize,
    pub fixed_winnings: u64,
    pub draw: DrawDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<LoadDto>,
    pub winners: Vec<OutcomeDto>,
}

impl CheckReportDto {
    pub fn new(report: &CheckReport, draw: &DrawResult, load: Option<&TicketLoadSummary>) -> Self {
        let verdict = match report.verdict() {
            Verdict::GrandPrize => "grand_prize",
            Verdict::SomeWinners => "some_winners",
            Verdict::NoWinners => "no_winners",
        };

        Self {
            verdict,
            grand_prize_won: report.grand_prize_won,
            tickets_checked: report.tickets_checked,
            fixed_winnings: report.fixed_winnings(),
            draw: DrawDto::from(draw),
            load: load.map(LoadDto::from),
            winners: report.outcomes.iter().map(OutcomeDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::CheckRunner;
    use crate::domain::entities::TicketRecord;
    use std::sync::Arc;

    #[test]
    fn test_report_dto_json() {
        let tickets = vec![
            Arc::new(TicketRecord::new("T1", [1, 2, 3, 4, 5], 6)),
            Arc::new(TicketRecord::new("T2", [1, 2, 3, 40, 50], 7)),
        ];
        let draw = DrawResult::new([5, 4, 3, 2, 1], 6);
        let report = CheckRunner::new().run(&tickets, &draw);

        let dto = CheckReportDto::new(&report, &draw, None);
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["verdict"], "grand_prize");
        assert_eq!(json["tickets_checked"], 2);
        assert_eq!(json["fixed_winnings"], 7);
        assert_eq!(json["draw"]["white_balls"], serde_json::json!([1, 2, 3, 4, 5]));
        assert_eq!(json["winners"][0]["tier"], "grand_prize");
        assert!(json["winners"][0].get("payout").is_none());
        assert_eq!(json["winners"][1]["winnings"], "$7");
        assert_eq!(json["winners"][1]["payout"], 7);
        assert!(json.get("load").is_none());
    }
}
