use crate::report::report_result;
use crate::{
    GameConfig, LuckyList, LuckyNumber, LuckySource, NameSource, Outcome, PlayerRecord, Reporter,
    Result,
};
use serde::{Deserialize, Serialize};

/// One lottery run: the configuration, the draw source and the list of
/// players built from it.
#[derive(Debug)]
pub struct Lottery<D> {
    config: GameConfig,
    draws: D,
    list: LuckyList,
}

impl<D: LuckySource> Lottery<D> {
    pub fn new(config: GameConfig, draws: D) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            draws,
            list: LuckyList::new(),
        })
    }

    pub fn list(&self) -> &LuckyList {
        &self.list
    }

    /// Ask for `count` names, draw a lucky number for each and insert the
    /// records at the head of the list.
    pub fn build_list<N, R>(
        &mut self,
        count: usize,
        names: &mut N,
        reporter: &mut R,
    ) -> Result<()>
    where
        N: NameSource + ?Sized,
        R: Reporter + ?Sized,
    {
        reporter.players(count)?;

        self.list.reserve(count)?;

        for player in 1..=count {
            let name = names.next_name(player)?;
            let lucky = self.draws.draw(self.config.max_lucky);
            let record = PlayerRecord::new(name, lucky);

            tracing::info!("Player {} is {}", player, record);
            self.list.push_front(record)?;
        }

        Ok(())
    }

    /// Draw, announce and return the winning number.
    pub fn draw_winning_number<R>(&mut self, reporter: &mut R) -> Result<LuckyNumber>
    where
        R: Reporter + ?Sized,
    {
        let winning = self.draws.draw(self.config.max_lucky);
        tracing::info!("Winning number drawn: {}", winning);

        reporter.winning_number(winning)?;
        Ok(winning)
    }

    /// Scan from the head, reporting each record, and stop at the first one
    /// holding `winning`.
    pub fn find_winner<R>(
        &self,
        winning: LuckyNumber,
        reporter: &mut R,
    ) -> Result<Option<&PlayerRecord>>
    where
        R: Reporter + ?Sized,
    {
        let mut visit = Ok(());

        let winner = self.list.find_first(|record| {
            visit = reporter.visited(record);
            if visit.is_err() {
                return true;
            }

            let found = record.matches(winning);
            if !found {
                tracing::debug!("{} does not hold {}", record.name(), winning);
            }
            found
        });
        visit?;

        reporter.scan_finished()?;
        Ok(winner)
    }

    /// Run the whole game: build, draw, search and report.
    pub fn play<N, R>(&mut self, names: &mut N, reporter: &mut R) -> Result<DrawSummary>
    where
        N: NameSource + ?Sized,
        R: Reporter + ?Sized,
    {
        self.build_list(self.config.players, names, reporter)?;

        let winning = self.draw_winning_number(reporter)?;
        let winner = self.find_winner(winning, reporter)?;
        let outcome = report_result(winner, winning, reporter)?;

        Ok(DrawSummary {
            config: self.config.clone(),
            players: self.list.iter().cloned().collect(),
            winning,
            exit_code: outcome.exit_code(),
            outcome,
        })
    }
}

/// Machine readable record of a finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawSummary {
    pub config: GameConfig,
    /// Players in list order, most recent first
    pub players: Vec<PlayerRecord>,
    pub winning: LuckyNumber,
    pub outcome: Outcome,
    pub exit_code: i32,
}

impl DrawSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConsoleReporter, FixedDraws, LotteryError, TokenNames};
    use std::io::Cursor;

    #[derive(Default)]
    struct Recorder {
        visited: Vec<String>,
        winning: Option<u32>,
        outcome: Option<Outcome>,
    }

    impl Reporter for Recorder {
        fn players(&mut self, _count: usize) -> Result<()> {
            Ok(())
        }

        fn winning_number(&mut self, winning: LuckyNumber) -> Result<()> {
            self.winning = Some(winning.get());
            Ok(())
        }

        fn visited(&mut self, record: &PlayerRecord) -> Result<()> {
            self.visited.push(record.name().to_string());
            Ok(())
        }

        fn scan_finished(&mut self) -> Result<()> {
            Ok(())
        }

        fn outcome(&mut self, outcome: &Outcome) -> Result<()> {
            self.outcome = Some(outcome.clone());
            Ok(())
        }
    }

    fn ann_bo_cy() -> TokenNames<Cursor<&'static str>, std::io::Sink> {
        TokenNames::new(Cursor::new("Ann\nBo\nCy\n"), std::io::sink())
    }

    #[test]
    fn test_winner_found() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let mut lottery =
            Lottery::new(GameConfig::default(), FixedDraws::new(vec![3, 7, 5, 7])).unwrap();
        let mut reporter = ConsoleReporter::new(Vec::new());

        let summary = lottery.play(&mut ann_bo_cy(), &mut reporter).unwrap();

        let names: Vec<&str> = lottery.list().iter().map(PlayerRecord::name).collect();
        assert_eq!(names, vec!["Cy", "Bo", "Ann"]);
        assert_eq!(summary.exit_code, 0);
        assert_eq!(summary.outcome.winner().unwrap().name(), "Bo");

        let transcript = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            transcript,
            "\nEnter names for 3 players.\n\
             \nThe winning number is 7!\n\
             \nCy has lucky number 5\n\
             \nBo has lucky number 7\n\
             \n\
             \nThe winner is Bo with lucky number 7\n"
        );
    }

    #[test]
    fn test_no_winner() {
        let mut lottery =
            Lottery::new(GameConfig::default(), FixedDraws::new(vec![3, 7, 5, 9])).unwrap();
        let mut recorder = Recorder::default();

        let summary = lottery.play(&mut ann_bo_cy(), &mut recorder).unwrap();

        assert_eq!(recorder.visited, vec!["Cy", "Bo", "Ann"]);
        assert_eq!(recorder.winning, Some(9));
        assert_eq!(
            recorder.outcome,
            Some(Outcome::NoWinner {
                winning: LuckyNumber::new(9)
            })
        );
        assert_eq!(summary.exit_code, 2);
    }

    #[test]
    fn test_tie_goes_to_most_recent() {
        let mut lottery =
            Lottery::new(GameConfig::default(), FixedDraws::new(vec![4, 4, 1])).unwrap();
        let mut recorder = Recorder::default();
        lottery.build_list(3, &mut ann_bo_cy(), &mut recorder).unwrap();

        let winner = lottery
            .find_winner(LuckyNumber::new(4), &mut recorder)
            .unwrap()
            .unwrap();
        assert_eq!(winner.name(), "Bo");
        assert_eq!(recorder.visited, vec!["Cy", "Bo"]);
    }

    struct FailingReporter {
        visited: usize,
    }

    impl Reporter for FailingReporter {
        fn players(&mut self, _count: usize) -> Result<()> {
            Ok(())
        }

        fn winning_number(&mut self, _winning: LuckyNumber) -> Result<()> {
            Ok(())
        }

        fn visited(&mut self, _record: &PlayerRecord) -> Result<()> {
            self.visited += 1;
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
        }

        fn scan_finished(&mut self) -> Result<()> {
            panic!("scan must not finish after a reporting error");
        }

        fn outcome(&mut self, _outcome: &Outcome) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_find_winner_stops_on_report_error() {
        let mut lottery =
            Lottery::new(GameConfig::default(), FixedDraws::new(vec![3, 7, 5])).unwrap();
        lottery.build_list(3, &mut ann_bo_cy(), &mut Recorder::default()).unwrap();

        let mut reporter = FailingReporter { visited: 0 };
        let err = lottery.find_winner(LuckyNumber::new(3), &mut reporter).unwrap_err();
        assert!(matches!(err, LotteryError::Io(_)));
        assert_eq!(reporter.visited, 1);
    }

    #[test]
    fn test_build_list_appends_at_head() {
        let mut lottery = Lottery::new(GameConfig::default(), FixedDraws::constant(2)).unwrap();
        let mut recorder = Recorder::default();
        let mut names = TokenNames::new(Cursor::new("Ann Bo Cy Di"), std::io::sink());

        lottery.build_list(2, &mut names, &mut recorder).unwrap();
        lottery.build_list(2, &mut names, &mut recorder).unwrap();

        let names: Vec<&str> = lottery.list().iter().map(PlayerRecord::name).collect();
        assert_eq!(names, vec!["Di", "Cy", "Bo", "Ann"]);
    }

    #[test]
    fn test_lucky_numbers_in_range() {
        let config = GameConfig::new(50, 10).with_seed(11);
        let mut lottery = Lottery::new(config, crate::SeededDraws::from_seed(11)).unwrap();
        let input = (1..=50).map(|i| format!("p{i}\n")).collect::<String>();
        let mut names = TokenNames::new(Cursor::new(input), std::io::sink());

        let summary = lottery.play(&mut names, &mut Recorder::default()).unwrap();

        assert_eq!(summary.players.len(), 50);
        assert_eq!(summary.players.last().unwrap().name(), "p1");
        assert!(summary
            .players
            .iter()
            .all(|p| (1..=10).contains(&p.lucky().get())));
        assert!((1..=10).contains(&summary.winning.get()));
    }

    #[test]
    fn test_input_exhausted() {
        let mut lottery = Lottery::new(GameConfig::default(), FixedDraws::constant(1)).unwrap();
        let mut names = TokenNames::new(Cursor::new("Ann Bo"), std::io::sink());

        let err = lottery.play(&mut names, &mut Recorder::default()).unwrap_err();
        assert!(matches!(err, LotteryError::InputExhausted { player: 3 }));
        assert_eq!(err.exit_code(), 3);
        assert_eq!(lottery.list().len(), 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Lottery::new(GameConfig::new(0, 10), FixedDraws::constant(1)).unwrap_err();
        assert!(matches!(err, LotteryError::Config(_)));
    }

    #[test]
    fn test_summary_json() {
        let mut lottery =
            Lottery::new(GameConfig::new(1, 10), FixedDraws::new(vec![6, 6])).unwrap();
        let mut names = TokenNames::new(Cursor::new("Ann"), std::io::sink());
        let summary = lottery.play(&mut names, &mut Recorder::default()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(value["winning"], 6);
        assert_eq!(value["outcome"]["result"], "winner");
        assert_eq!(value["outcome"]["player"]["name"], "Ann");
        assert_eq!(value["exit_code"], 0);
    }
}
