/// Error type for game operations
///
/// Validation happens before any mutation, so an `Err` always leaves the
/// object in the state it had before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Player name can't be empty")]
    InvalidName,
    #[error("Invalid points: {0}")]
    InvalidPoints(i64),
    #[error("Target must be at least 1, got {0}")]
    InvalidTarget(u32),
    #[error("Player number must be 1 or 2, got {0}")]
    InvalidPlayerNumber(u8),
    #[error("Game is already over")]
    GameAlreadyOver,
    #[error("Game isn't finished yet")]
    NotFinished,
}

pub type Result<T> = std::result::Result<T, PigError>;
