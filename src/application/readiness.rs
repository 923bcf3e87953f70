/// Readiness Gate - Check Precondition Tracking
///
/// Tracks which inputs are loaded and refuses a check until both the ticket
/// set and the drawing are present.
///
/// ```text
///  NoInputs ──tickets──▶ TicketsOnly
///     │                      │
///    draw                   draw
///     ▼                      ▼
///  DrawOnly ──tickets──▶   Ready ◀── reload either (stays Ready)
/// ```

use serde::Serialize;
use thiserror::Error;

/// Gate state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessState {
    NoInputs,
    TicketsOnly,
    DrawOnly,
    Ready,
}

impl ReadinessState {
    #[inline]
    pub fn is_ready(self) -> bool {
        self == ReadinessState::Ready
    }
}

/// An input that must be loaded before checking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingInput {
    Tickets,
    DrawWhiteBalls,
    DrawPowerball,
}

impl MissingInput {
    /// Hint for how to supply the missing input
    pub fn hint(self) -> &'static str {
        match self {
            MissingInput::Tickets => "load tickets from a CSV file",
            MissingInput::DrawWhiteBalls => "enter the five white balls drawn",
            MissingInput::DrawPowerball => "enter the powerball drawn",
        }
    }
}

impl std::fmt::Display for MissingInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingInput::Tickets => write!(f, "tickets"),
            MissingInput::DrawWhiteBalls => write!(f, "white balls"),
            MissingInput::DrawPowerball => write!(f, "powerball"),
        }
    }
}

/// Check refused because inputs are missing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not all inputs are loaded, still needed: {}", join_missing(.missing))]
pub struct NotReadyError {
    pub missing: Vec<MissingInput>,
}

fn join_missing(missing: &[MissingInput]) -> String {
    missing
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Readiness gate
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadinessGate {
    tickets_loaded: bool,
    draw_loaded: bool,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ReadinessState {
        match (self.tickets_loaded, self.draw_loaded) {
            (false, false) => ReadinessState::NoInputs,
            (true, false) => ReadinessState::TicketsOnly,
            (false, true) => ReadinessState::DrawOnly,
            (true, true) => ReadinessState::Ready,
        }
    }

    /// Records a validated ticket set
    pub fn mark_tickets_loaded(&mut self) -> ReadinessState {
        self.tickets_loaded = true;
        self.state()
    }

    /// Records a validated drawing
    pub fn mark_draw_loaded(&mut self) -> ReadinessState {
        self.draw_loaded = true;
        self.state()
    }

    /// Inputs still needed, in display order
    pub fn missing(&self) -> Vec<MissingInput> {
        let mut missing = Vec::with_capacity(3);
        if !self.tickets_loaded {
            missing.push(MissingInput::Tickets);
        }
        if !self.draw_loaded {
            missing.push(MissingInput::DrawWhiteBalls);
            missing.push(MissingInput::DrawPowerball);
        }
        missing
    }

    /// Fails with the missing inputs unless the gate is `Ready`
    pub fn require_ready(&self) -> Result<(), NotReadyError> {
        if self.state().is_ready() {
            Ok(())
        } else {
            Err(NotReadyError {
                missing: self.missing(),
            })
        }
    }
}
