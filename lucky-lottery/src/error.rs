use std::collections::TryReserveError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LotteryError>;

/// Process exit codes reported by the `lucky` binary.
pub const EXIT_ALL_OK: i32 = 0;
pub const EXIT_BAD_ALLOC: i32 = 1;
pub const EXIT_NO_WINNER: i32 = 2;
pub const EXIT_INPUT_EXHAUSTED: i32 = 3;
pub const EXIT_FAILURE: i32 = 4;

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("Player record allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("Input ended before a name was read for player {player}")]
    InputExhausted { player: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Dialog error: {0}")]
    Dialog(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LotteryError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            LotteryError::Allocation(_) => EXIT_BAD_ALLOC,
            LotteryError::InputExhausted { .. } => EXIT_INPUT_EXHAUSTED,
            _ => EXIT_FAILURE,
        }
    }
}

// conversion from dialoguer::Error
impl From<dialoguer::Error> for LotteryError {
    fn from(err: dialoguer::Error) -> Self {
        LotteryError::Dialog(err.to_string())
    }
}
