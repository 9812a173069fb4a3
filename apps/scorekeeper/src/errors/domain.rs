//! Domain-level error type used by the round engine.
//!
//! Every variant is non-fatal: the engine applies any local correction
//! (reverting an entry, reopening bidding) before returning the error, and
//! the service surfaces the message as the single current error.
//! `AppError` wraps this type through `From<DomainError>`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::state::Seat;
use crate::errors::ErrorCode;

/// Validation kinds for rejected input or phase violations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// A player name is empty after trimming.
    EmptyName,
    /// Player count, round count or name count is unusable.
    InvalidSetup,
    /// Bid value is not in the player's legal-bid set.
    InvalidBid,
    /// Hand count is not in the player's legal-hand set.
    InvalidHands,
    /// Bids cannot be confirmed because their total equals the trick count.
    TotalBidsMatchTricks,
    /// Bids cannot be confirmed because at least one is missing.
    BidsIncomplete,
    /// Operation not allowed in the current phase.
    PhaseMismatch,
    /// Operation targets a round other than the active one.
    RoundNotActive,
    /// Player index is outside the table.
    UnknownPlayer,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Bid submitted out of turn; carries the player who is on turn.
    TurnViolation { on_turn: Option<Seat>, detail: String },
    /// Recorded hands would exceed the round's trick count.
    CapacityExceeded { limit: u8, detail: String },
    /// Defensive re-validation failed; state was corrected before returning.
    InconsistentState(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(_, d) => write!(f, "{d}"),
            DomainError::TurnViolation { detail, .. } => write!(f, "{detail}"),
            DomainError::CapacityExceeded { detail, .. } => write!(f, "{detail}"),
            DomainError::InconsistentState(d) => write!(f, "{d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn turn_violation(on_turn: Option<Seat>, detail: impl Into<String>) -> Self {
        Self::TurnViolation {
            on_turn,
            detail: detail.into(),
        }
    }

    pub fn capacity_exceeded(limit: u8) -> Self {
        Self::CapacityExceeded {
            limit,
            detail: format!("Total hands cannot exceed {limit}"),
        }
    }

    pub fn inconsistent(detail: impl Into<String>) -> Self {
        Self::InconsistentState(detail.into())
    }

    /// Stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::EmptyName => ErrorCode::EmptyName,
                ValidationKind::InvalidSetup => ErrorCode::InvalidSetup,
                ValidationKind::InvalidBid => ErrorCode::InvalidBid,
                ValidationKind::InvalidHands => ErrorCode::InvalidHands,
                ValidationKind::TotalBidsMatchTricks => ErrorCode::TotalBidsMatchTricks,
                ValidationKind::BidsIncomplete => ErrorCode::BidsIncomplete,
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::RoundNotActive => ErrorCode::RoundNotActive,
                ValidationKind::UnknownPlayer => ErrorCode::UnknownPlayer,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::TurnViolation { .. } => ErrorCode::OutOfTurn,
            DomainError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
            DomainError::InconsistentState(_) => ErrorCode::InconsistentState,
        }
    }
}
