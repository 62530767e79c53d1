//! Lucky number lottery over a singly linked list
//!
//! Player names are collected one at a time, each gets a random lucky
//! number and is inserted at the head of the list. A winning number is then
//! drawn from the same stream and the list is scanned from the head until
//! the first matching player.

pub mod config;
pub mod draw;
pub mod error;
pub mod game;
pub mod list;
pub mod names;
pub mod player;
pub mod report;

pub use config::{GameConfig, MAX_LUCKY, MAX_NAMES};
pub use draw::{FixedDraws, LuckySource, SeededDraws};
pub use error::{LotteryError, Result};
pub use game::{DrawSummary, Lottery};
pub use list::LuckyList;
pub use names::{NameSource, TokenNames};
pub use player::{LuckyNumber, PlayerRecord};
pub use report::{report_result, ConsoleReporter, Outcome, Reporter};

/// Create a lottery whose draws come from `config.seed`, or from a fresh
/// seed when none is set
pub fn create_lottery(config: GameConfig) -> Result<Lottery<SeededDraws>> {
    let draws = match config.seed {
        Some(seed) => SeededDraws::from_seed(seed),
        None => SeededDraws::from_entropy(),
    };
    tracing::debug!("Draw seed: {}", draws.seed());

    Lottery::new(config, draws)
}
