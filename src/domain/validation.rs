/// Ticket and Draw Validators - Shape and Range Rules
///
/// Turns raw tokens delivered by the loader into validated domain entities.
///
/// ## Validation Rules
/// - A ticket row needs at least 7 columns: number, 5 white balls, powerball
/// - A draw needs exactly 6 values: 5 white balls, then the powerball
/// - Every ball must parse as an integer
/// - Every ball must fall inside the configured range
///
/// ## Usage
/// ```rust
/// use powerball_checker::domain::validation::TicketValidator;
///
/// let validator = TicketValidator::new();
/// let ticket = validator.validate_row(&["T1", "1", "2", "3", "4", "5", "6"]).unwrap();
/// assert_eq!(ticket.powerball, 6);
/// ```

use crate::domain::entities::{DrawResult, TicketRecord, WHITE_BALL_COUNT};
use thiserror::Error;

/// Columns in a ticket row: number + white balls + powerball
pub const TICKET_COLUMNS: usize = WHITE_BALL_COUNT + 2;

/// Values in a draw input: white balls + powerball
pub const DRAW_VALUES: usize = WHITE_BALL_COUNT + 1;

/// Which ball a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallField {
    /// White ball at the given 1-based position
    WhiteBall(usize),
    Powerball,
}

impl std::fmt::Display for BallField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BallField::WhiteBall(position) => write!(f, "white ball {}", position),
            BallField::Powerball => write!(f, "powerball"),
        }
    }
}

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Ticket row is too short
    #[error("expected at least {expected} columns, found {found}")]
    MissingColumns { expected: usize, found: usize },

    /// Draw input has the wrong number of values
    #[error("expected {expected} numbers, found {found}")]
    WrongBallCount { expected: usize, found: usize },

    /// Value does not parse as an integer
    #[error("{field} is not a valid number: {value:?}")]
    NotAnInteger { field: BallField, value: String },

    /// Value parses but falls outside the configured range
    #[error("{field} value {value} is outside {min}..={max}")]
    OutOfRange {
        field: BallField,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// Ball range configuration
///
/// Narrows which numbers are accepted. It never changes the prize table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Smallest accepted ball, white or red (inclusive)
    pub min_ball: u32,

    /// Largest accepted white ball (inclusive)
    pub max_white_ball: u32,

    /// Largest accepted powerball (inclusive)
    pub max_powerball: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_ball: 1,
            max_white_ball: u32::MAX,
            max_powerball: u32::MAX,
        }
    }
}

impl ValidationConfig {
    /// Parses and range-checks a single ball token
    fn parse_ball(&self, field: BallField, raw: &str) -> Result<u32, ValidationError> {
        let trimmed = raw.trim();
        let value: u32 = trimmed.parse().map_err(|_| ValidationError::NotAnInteger {
            field,
            value: trimmed.to_string(),
        })?;

        let max = match field {
            BallField::WhiteBall(_) => self.max_white_ball,
            BallField::Powerball => self.max_powerball,
        };

        if value < self.min_ball || value > max {
            return Err(ValidationError::OutOfRange {
                field,
                value,
                min: self.min_ball,
                max,
            });
        }

        Ok(value)
    }

    fn parse_white_balls<S: AsRef<str>>(
        &self,
        raw: &[S],
    ) -> Result<[u32; WHITE_BALL_COUNT], ValidationError> {
        let mut white_balls = [0u32; WHITE_BALL_COUNT];
        for (i, (slot, token)) in white_balls.iter_mut().zip(raw).enumerate() {
            *slot = self.parse_ball(BallField::WhiteBall(i + 1), token.as_ref())?;
        }
        Ok(white_balls)
    }
}

/// Ticket row validator
#[derive(Debug, Clone, Default)]
pub struct TicketValidator {
    config: ValidationConfig,
}

impl TicketValidator {
    /// Creates a new validator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates one tokenized ticket row
    ///
    /// # Arguments
    /// * `columns` - `[ticket_number, wb1, wb2, wb3, wb4, wb5, powerball, ..]`;
    ///   columns past the seventh are ignored
    ///
    /// # Returns
    /// * `Ok(TicketRecord)` if every field is valid
    /// * `Err(ValidationError)` for the first field that fails
    pub fn validate_row<S: AsRef<str>>(&self, columns: &[S]) -> Result<TicketRecord, ValidationError> {
        if columns.len() < TICKET_COLUMNS {
            return Err(ValidationError::MissingColumns {
                expected: TICKET_COLUMNS,
                found: columns.len(),
            });
        }

        let ticket_number = columns[0].as_ref().trim();
        let white_balls = self.config.parse_white_balls(&columns[1..=WHITE_BALL_COUNT])?;
        let powerball = self
            .config
            .parse_ball(BallField::Powerball, columns[WHITE_BALL_COUNT + 1].as_ref())?;

        Ok(TicketRecord::new(ticket_number, white_balls, powerball))
    }
}

/// Drawing result validator
#[derive(Debug, Clone, Default)]
pub struct DrawValidator {
    config: ValidationConfig,
}

impl DrawValidator {
    /// Creates a new validator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validates the raw draw numbers: five white balls in any order,
    /// followed by the powerball.
    pub fn validate<S: AsRef<str>>(&self, raw: &[S]) -> Result<DrawResult, ValidationError> {
        if raw.len() != DRAW_VALUES {
            return Err(ValidationError::WrongBallCount {
                expected: DRAW_VALUES,
                found: raw.len(),
            });
        }

        let white_balls = self.config.parse_white_balls(&raw[..WHITE_BALL_COUNT])?;
        let powerball = self
            .config
            .parse_ball(BallField::Powerball, raw[WHITE_BALL_COUNT].as_ref())?;

        Ok(DrawResult::new(white_balls, powerball))
    }
}
