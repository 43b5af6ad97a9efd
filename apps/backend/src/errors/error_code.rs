//! Error codes for the Contamina backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Contamina backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Missing or wrong game password
    InvalidCredentials,
    /// Player is not a member of the game
    NotAMember,
    /// Only the game owner may do this
    NotOwner,
    /// Only the round leader may propose a group
    NotLeader,
    /// Player is not part of the proposed group
    NotInGroup,
    /// Only enemies may sabotage a mission
    SabotageNotAllowed,

    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Invalid round ID provided
    InvalidRoundId,
    /// Invalid or missing player name
    InvalidPlayerName,
    /// Invalid game name
    InvalidGameName,
    /// Invalid password format
    InvalidPassword,
    /// Invalid game status filter
    InvalidGameStatus,
    /// Invalid pagination parameters
    InvalidPagination,
    /// Proposed group has the wrong size
    InvalidGroupSize,
    /// Proposed group names the same player twice
    DuplicateGroupMember,
    /// Proposed group names someone who is not in the game
    UnknownGroupMember,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Lifecycle Preconditions
    /// Action not allowed in the current round or game state
    PhaseMismatch,
    /// Not enough players to start
    NotEnoughPlayers,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Round not found
    RoundNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Game name already in use
    GameNameTaken,
    /// Game already has the maximum number of players
    GameFull,
    /// Player already part of the game
    AlreadyJoined,
    /// Game already started
    AlreadyStarted,
    /// Roles were already handed out
    RolesAlreadyAssigned,
    /// A group was already proposed for this attempt
    GroupAlreadyProposed,
    /// Player already voted
    AlreadyVoted,
    /// Player already submitted a mission action
    AlreadyActed,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Store unavailable
    StoreUnavailable,
    /// Data corruption detected
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Authentication & Authorization
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotAMember => "NOT_A_MEMBER",
            Self::NotOwner => "NOT_OWNER",
            Self::NotLeader => "NOT_LEADER",
            Self::NotInGroup => "NOT_IN_GROUP",
            Self::SabotageNotAllowed => "SABOTAGE_NOT_ALLOWED",

            // Request Validation
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidRoundId => "INVALID_ROUND_ID",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::InvalidGameName => "INVALID_GAME_NAME",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::InvalidGameStatus => "INVALID_GAME_STATUS",
            Self::InvalidPagination => "INVALID_PAGINATION",
            Self::InvalidGroupSize => "INVALID_GROUP_SIZE",
            Self::DuplicateGroupMember => "DUPLICATE_GROUP_MEMBER",
            Self::UnknownGroupMember => "UNKNOWN_GROUP_MEMBER",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            // Lifecycle Preconditions
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",

            // Resource Not Found
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Business Logic Conflicts
            Self::GameNameTaken => "GAME_NAME_TAKEN",
            Self::GameFull => "GAME_FULL",
            Self::AlreadyJoined => "ALREADY_JOINED",
            Self::AlreadyStarted => "ALREADY_STARTED",
            Self::RolesAlreadyAssigned => "ROLES_ALREADY_ASSIGNED",
            Self::GroupAlreadyProposed => "GROUP_ALREADY_PROPOSED",
            Self::AlreadyVoted => "ALREADY_VOTED",
            Self::AlreadyActed => "ALREADY_ACTED",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
