//! Error codes for the scorekeeper.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE.

use core::fmt;

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in JSON snapshots and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Setup
    /// General validation error
    ValidationError,
    /// A player name is blank
    EmptyName,
    /// Player or round counts are unusable
    InvalidSetup,

    // Bidding
    /// Bid submitted out of turn
    OutOfTurn,
    /// Bid outside the legal set
    InvalidBid,
    /// Bids sum to the trick count
    TotalBidsMatchTricks,
    /// Confirmation attempted with missing bids
    BidsIncomplete,

    // Hand recording
    /// Hand count outside the legal set
    InvalidHands,
    /// Hand total would exceed the trick count
    CapacityExceeded,

    // Flow
    /// Operation not allowed in the current phase
    PhaseMismatch,
    /// Operation targets an inactive round
    RoundNotActive,
    /// Player index out of range
    UnknownPlayer,
    /// Defensive re-validation failed
    InconsistentState,

    // System
    /// Filesystem failure
    IoError,
    /// Snapshot (de)serialization failure
    SerdeError,
    /// Configuration error
    ConfigError,
    /// Persisted snapshot is structurally invalid
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::EmptyName => "EMPTY_NAME",
            Self::InvalidSetup => "INVALID_SETUP",

            Self::OutOfTurn => "OUT_OF_TURN",
            Self::InvalidBid => "INVALID_BID",
            Self::TotalBidsMatchTricks => "TOTAL_BIDS_MATCH_TRICKS",
            Self::BidsIncomplete => "BIDS_INCOMPLETE",

            Self::InvalidHands => "INVALID_HANDS",
            Self::CapacityExceeded => "CAPACITY_EXCEEDED",

            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::RoundNotActive => "ROUND_NOT_ACTIVE",
            Self::UnknownPlayer => "UNKNOWN_PLAYER",
            Self::InconsistentState => "INCONSISTENT_STATE",

            Self::IoError => "IO_ERROR",
            Self::SerdeError => "SERDE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }

    /// Every code, for uniqueness checks.
    pub const ALL: [ErrorCode; 17] = [
        Self::ValidationError,
        Self::EmptyName,
        Self::InvalidSetup,
        Self::OutOfTurn,
        Self::InvalidBid,
        Self::TotalBidsMatchTricks,
        Self::BidsIncomplete,
        Self::InvalidHands,
        Self::CapacityExceeded,
        Self::PhaseMismatch,
        Self::RoundNotActive,
        Self::UnknownPlayer,
        Self::InconsistentState,
        Self::IoError,
        Self::SerdeError,
        Self::ConfigError,
        Self::DataCorruption,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
