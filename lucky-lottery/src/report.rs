use crate::error::{EXIT_ALL_OK, EXIT_NO_WINNER};
use crate::{LuckyNumber, PlayerRecord, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Result of a completed draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Winner { player: PlayerRecord },
    NoWinner { winning: LuckyNumber },
}

impl Outcome {
    pub fn winner(&self) -> Option<&PlayerRecord> {
        match self {
            Outcome::Winner { player } => Some(player),
            Outcome::NoWinner { .. } => None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Winner { .. } => EXIT_ALL_OK,
            Outcome::NoWinner { .. } => EXIT_NO_WINNER,
        }
    }
}

/// Observer for everything a lottery run shows to the operator
pub trait Reporter {
    fn players(&mut self, count: usize) -> Result<()>;
    fn winning_number(&mut self, winning: LuckyNumber) -> Result<()>;
    fn visited(&mut self, record: &PlayerRecord) -> Result<()>;
    fn scan_finished(&mut self) -> Result<()>;
    fn outcome(&mut self, outcome: &Outcome) -> Result<()>;
}

/// Turn the search result into an [`Outcome`] and report it
pub fn report_result<R>(
    winner: Option<&PlayerRecord>,
    winning: LuckyNumber,
    reporter: &mut R,
) -> Result<Outcome>
where
    R: Reporter + ?Sized,
{
    let outcome = match winner {
        Some(player) => Outcome::Winner {
            player: player.clone(),
        },
        None => Outcome::NoWinner { winning },
    };

    match &outcome {
        Outcome::Winner { player } => tracing::info!("Winner: {}", player.name()),
        Outcome::NoWinner { winning } => tracing::info!("No winner for {}", winning),
    }

    reporter.outcome(&outcome)?;
    Ok(outcome)
}

/// Writes the human readable console transcript
pub struct ConsoleReporter<W> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn players(&mut self, count: usize) -> Result<()> {
        write!(self.out, "\nEnter names for {} players.\n", count)?;
        self.out.flush()?;
        Ok(())
    }

    fn winning_number(&mut self, winning: LuckyNumber) -> Result<()> {
        write!(self.out, "\nThe winning number is {}!\n", winning)?;
        Ok(())
    }

    fn visited(&mut self, record: &PlayerRecord) -> Result<()> {
        write!(self.out, "\n{}\n", record)?;
        Ok(())
    }

    fn scan_finished(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    fn outcome(&mut self, outcome: &Outcome) -> Result<()> {
        match outcome {
            Outcome::Winner { player } => write!(
                self.out,
                "\nThe winner is {} with lucky number {}\n",
                player.name(),
                player.lucky()
            )?,
            Outcome::NoWinner { winning } => write!(
                self.out,
                "\nSorry, there's no winner for lucky number {}\n",
                winning
            )?,
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut ConsoleReporter<Vec<u8>>) -> Result<()>) -> String {
        let mut reporter = ConsoleReporter::new(Vec::new());
        f(&mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_console_lines() {
        assert_eq!(rendered(|r| r.players(3)), "\nEnter names for 3 players.\n");
        assert_eq!(
            rendered(|r| r.winning_number(LuckyNumber::new(7))),
            "\nThe winning number is 7!\n"
        );
        assert_eq!(
            rendered(|r| r.visited(&PlayerRecord::new("Cy", LuckyNumber::new(5)))),
            "\nCy has lucky number 5\n"
        );
    }

    #[test]
    fn test_outcome_lines() {
        let winner = Outcome::Winner {
            player: PlayerRecord::new("Bo", LuckyNumber::new(7)),
        };
        assert_eq!(
            rendered(|r| r.outcome(&winner)),
            "\nThe winner is Bo with lucky number 7\n"
        );
        assert_eq!(winner.exit_code(), 0);
        assert_eq!(winner.winner().unwrap().name(), "Bo");

        let none = Outcome::NoWinner {
            winning: LuckyNumber::new(9),
        };
        assert_eq!(
            rendered(|r| r.outcome(&none)),
            "\nSorry, there's no winner for lucky number 9\n"
        );
        assert_eq!(none.exit_code(), 2);
        assert!(none.winner().is_none());
    }

    #[test]
    fn test_outcome_json() {
        let none = Outcome::NoWinner {
            winning: LuckyNumber::new(9),
        };
        assert_eq!(
            serde_json::to_string(&none).unwrap(),
            r#"{"result":"no_winner","winning":9}"#
        );
    }
}
