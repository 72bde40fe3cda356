use thiserror::Error;

/// Recoverable failures reported to adapters. None of them leave a session partially mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No game is active in this channel")]
    NoActiveSession,

    #[error("It is not this player's turn")]
    NotYourTurn,

    #[error("Position is outside the board")]
    OutOfRange,

    #[error("Cell is already occupied")]
    CellOccupied,

    #[error("Column is full")]
    ColumnFull,

    #[error("Malformed move: {0}")]
    MalformedMove(String),

    #[error("A game is already active in this channel")]
    SessionAlreadyActive,
}

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write config file: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Failed to deserialize config: {0}")]
    Deserialize(String),

    #[error("Config validation error: {0}")]
    Invalid(String),
}
