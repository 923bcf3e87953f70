/// Checker Service - Session State for One Checking Run
///
/// Owns the loaded tickets, the loaded drawing, the readiness gate and the
/// most recent check report. The caller owns the service; there is no global
/// session state.
///
/// ## Invalidation
/// Loading tickets or a drawing drops the cached report, so `last_report`
/// only ever returns a report computed from the current inputs.
///
/// ## Usage
/// ```rust
/// use powerball_checker::application::services::CheckerService;
///
/// let mut service = CheckerService::new();
/// service.load_tickets(&[["T1", "1", "2", "3", "4", "5", "6"]]);
/// service.load_draw(&["5", "4", "3", "2", "1", "6"]).unwrap();
///
/// let report = service.check().unwrap();
/// assert!(report.grand_prize_won);
/// ```

use crate::application::readiness::{MissingInput, NotReadyError, ReadinessGate, ReadinessState};
use crate::application::use_cases::{CheckReport, CheckRunner, LoadTicketsUseCase, TicketLoadSummary};
use crate::domain::entities::{DrawResult, TicketRecord};
use crate::domain::validation::{DrawValidator, TicketValidator, ValidationConfig};
use crate::shared::error::{CheckerError, Result};
use crate::shared::metrics::METRICS;
use std::sync::Arc;

/// Single-run ticket checker
#[derive(Debug, Default)]
pub struct CheckerService {
    load_tickets: LoadTicketsUseCase,
    draw_validator: DrawValidator,
    runner: CheckRunner,
    gate: ReadinessGate,
    tickets: Vec<Arc<TicketRecord>>,
    draw: Option<DrawResult>,
    last_report: Option<CheckReport>,
}

impl CheckerService {
    /// Creates a service accepting any positive ball number
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with a custom ball range
    pub fn with_config(config: ValidationConfig) -> Self {
        Self {
            load_tickets: LoadTicketsUseCase::new(TicketValidator::with_config(config.clone())),
            draw_validator: DrawValidator::with_config(config),
            ..Self::default()
        }
    }

    /// Validates and loads a set of ticket rows
    ///
    /// A load with at least one valid ticket replaces the ticket set and
    /// clears the cached report. A load with no valid ticket changes nothing.
    pub fn load_tickets<R, S>(&mut self, rows: &[R]) -> TicketLoadSummary
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let summary = self.load_tickets.execute(rows);

        if summary.validated_count() == 0 {
            tracing::warn!(
                rows = summary.total_rows(),
                "no valid tickets loaded, keeping previous ticket set"
            );
            return summary;
        }

        self.tickets = summary.tickets.clone();
        self.last_report = None;
        let state = self.gate.mark_tickets_loaded();

        tracing::info!(
            validated = summary.validated_count(),
            rejected = summary.rejected_count(),
            state = ?state,
            "tickets loaded"
        );

        summary
    }

    /// Validates and loads the drawing: five white balls, then the powerball
    ///
    /// On error the previously loaded drawing is kept.
    pub fn load_draw<S: AsRef<str>>(&mut self, raw: &[S]) -> Result<&DrawResult> {
        let draw = match self.draw_validator.validate(raw) {
            Ok(draw) => draw,
            Err(e) => {
                tracing::warn!(error = %e, "draw rejected");
                METRICS.draws_total.with_label_values(&["rejected"]).inc();
                return Err(CheckerError::InvalidDraw(e));
            }
        };

        METRICS.draws_total.with_label_values(&["valid"]).inc();
        self.last_report = None;
        let state = self.gate.mark_draw_loaded();

        tracing::info!(
            white_balls = ?draw.white_balls(),
            powerball = draw.powerball(),
            state = ?state,
            "draw loaded"
        );

        Ok(&*self.draw.insert(draw))
    }

    pub fn is_ready(&self) -> ReadinessState {
        self.gate.state()
    }

    /// Checks all loaded tickets against the loaded drawing
    ///
    /// Replaces the cached report with a freshly computed one.
    pub fn check(&mut self) -> Result<&CheckReport> {
        if let Err(e) = self.gate.require_ready() {
            METRICS.checks_total.with_label_values(&["not_ready"]).inc();
            return Err(e.into());
        }

        let draw = self.draw.as_ref().ok_or_else(|| NotReadyError {
            missing: vec![MissingInput::DrawWhiteBalls, MissingInput::DrawPowerball],
        })?;

        let report = self.runner.run(&self.tickets, draw);
        METRICS.checks_total.with_label_values(&["ok"]).inc();

        tracing::info!(
            checked = report.tickets_checked,
            winners = report.outcomes.len(),
            grand_prize_won = report.grand_prize_won,
            "check complete"
        );

        Ok(&*self.last_report.insert(report))
    }

    /// Report from the last check, unless an input changed since
    pub fn last_report(&self) -> Option<&CheckReport> {
        self.last_report.as_ref()
    }

    pub fn tickets(&self) -> &[Arc<TicketRecord>] {
        &self.tickets
    }

    pub fn draw(&self) -> Option<&DrawResult> {
        self.draw.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prize::PrizeTier;

    fn loaded_service() -> CheckerService {
        let mut service = CheckerService::new();
        service.load_tickets(&[
            ["T1", "1", "2", "3", "4", "5", "6"],
            ["T2", "1", "2", "3", "4", "9", "6"],
        ]);
        service.load_draw(&["1", "2", "3", "4", "5", "6"]).unwrap();
        service
    }

    #[test]
    fn test_check_before_any_input() {
        let mut service = CheckerService::new();
        assert_eq!(service.is_ready(), ReadinessState::NoInputs);

        match service.check() {
            Err(CheckerError::NotReady(e)) => assert_eq!(e.missing.len(), 3),
            other => panic!("expected NotReady, got {:?}", other),
        }
    }

    #[test]
    fn test_check_with_tickets_only() {
        let mut service = CheckerService::new();
        service.load_tickets(&[["T1", "1", "2", "3", "4", "5", "6"]]);
        assert_eq!(service.is_ready(), ReadinessState::TicketsOnly);

        match service.check() {
            Err(CheckerError::NotReady(e)) => assert_eq!(
                e.missing,
                vec![MissingInput::DrawWhiteBalls, MissingInput::DrawPowerball]
            ),
            other => panic!("expected NotReady, got {:?}", other),
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut service = loaded_service();
        assert_eq!(service.is_ready(), ReadinessState::Ready);

        let report = service.check().unwrap();
        assert!(report.grand_prize_won);
        let tiers: Vec<(&str, PrizeTier)> = report
            .outcomes
            .iter()
            .map(|o| (o.ticket.ticket_number.as_str(), o.tier))
            .collect();
        assert_eq!(
            tiers,
            vec![("T1", PrizeTier::GrandPrize), ("T2", PrizeTier::FiftyThousand)]
        );
    }

    #[test]
    fn test_check_is_idempotent() {
        let mut service = loaded_service();
        let first = service.check().unwrap().clone();
        let second = service.check().unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_new_draw_invalidates_report() {
        let mut service = loaded_service();
        service.check().unwrap();
        assert!(service.last_report().is_some());

        service.load_draw(&["10", "20", "30", "40", "50", "60"]).unwrap();
        assert_eq!(service.is_ready(), ReadinessState::Ready);
        assert!(service.last_report().is_none());

        let report = service.check().unwrap();
        assert!(report.outcomes.is_empty());
        assert!(!report.grand_prize_won);
    }

    #[test]
    fn test_new_tickets_invalidate_report() {
        let mut service = loaded_service();
        service.check().unwrap();

        let summary = service.load_tickets(&[["T9", "1", "2", "3", "40", "50", "6"]]);
        assert_eq!(summary.validated_count(), 1);
        assert!(service.last_report().is_none());

        let report = service.check().unwrap();
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.outcomes[0].tier, PrizeTier::OneHundred);
    }

    #[test]
    fn test_invalid_draw_keeps_previous() {
        let mut service = loaded_service();
        service.check().unwrap();

        let result = service.load_draw(&["1", "2", "3", "4", "6"]);
        assert!(matches!(result, Err(CheckerError::InvalidDraw(_))));
        assert_eq!(service.draw().unwrap().powerball(), 6);
        assert!(service.last_report().is_some());
    }

    #[test]
    fn test_empty_ticket_load_keeps_previous() {
        let mut service = loaded_service();
        let summary = service.load_tickets(&[["bad", "x", "2", "3", "4", "5", "6"]]);

        assert_eq!(summary.validated_count(), 0);
        assert_eq!(summary.rejected_count(), 1);
        assert_eq!(service.tickets().len(), 2);
    }

    #[test]
    fn test_custom_range_applies_to_draw() {
        let config = ValidationConfig {
            max_white_ball: 69,
            max_powerball: 26,
            ..Default::default()
        };
        let mut service = CheckerService::with_config(config);
        assert!(service.load_draw(&["1", "2", "3", "4", "5", "27"]).is_err());
        assert_eq!(service.is_ready(), ReadinessState::NoInputs);
    }
}
