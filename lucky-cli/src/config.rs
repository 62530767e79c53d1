use lucky_lottery::{GameConfig, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    pub game: GameConfig,
    pub json: bool,
    pub interactive: bool,
    pub verbose: bool,
}

impl CliConfig {
    pub fn log_filter(&self) -> String {
        let log_level = if self.verbose { "debug" } else { "warn" };
        format!("lucky={},lucky_lottery={}", log_level, log_level)
    }

    pub fn validate(&self) -> Result<()> {
        self.game.validate()
    }
}
