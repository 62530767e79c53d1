use crate::error::{LotteryError, Result};
use serde::{Deserialize, Serialize};

/// Number of players asked for by default
pub const MAX_NAMES: usize = 3;
/// Highest lucky number drawn by default
pub const MAX_LUCKY: u32 = 10;

pub const PLAYER_LIMIT: usize = 100;
pub const LUCKY_LIMIT: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub players: usize,
    pub max_lucky: u32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: MAX_NAMES,
            max_lucky: MAX_LUCKY,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(players: usize, max_lucky: u32) -> Self {
        Self {
            players,
            max_lucky,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.players == 0 {
            return Err(LotteryError::config("At least one player is required"));
        }

        if self.players > PLAYER_LIMIT {
            return Err(LotteryError::config(format!(
                "At most {} players are supported",
                PLAYER_LIMIT
            )));
        }

        if self.max_lucky == 0 || self.max_lucky > LUCKY_LIMIT {
            return Err(LotteryError::config(format!(
                "Max lucky number must be between 1 and {}",
                LUCKY_LIMIT
            )));
        }

        Ok(())
    }
}
