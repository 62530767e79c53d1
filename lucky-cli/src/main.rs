mod config;
mod prompt;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use config::CliConfig;
use lucky_lottery::error::{EXIT_ALL_OK, EXIT_FAILURE};
use lucky_lottery::{
    create_lottery, ConsoleReporter, GameConfig, LotteryError, TokenNames, MAX_LUCKY, MAX_NAMES,
};
use prompt::DialoguerNames;
use std::io::{self, IsTerminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "lucky")]
#[command(about = "Lucky number lottery over a linked list")]
#[command(version)]
struct Cli {
    /// Number of players to enter
    #[arg(short, long, default_value_t = MAX_NAMES)]
    players: usize,

    /// Highest lucky number that can be drawn
    #[arg(short, long, default_value_t = MAX_LUCKY)]
    max_lucky: u32,

    /// Seed for a reproducible draw
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print a JSON summary after the draw
    #[arg(long)]
    json: bool,

    /// Read names from stdin even when it is a terminal
    #[arg(long)]
    no_prompt: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self, stdin_is_terminal: bool) -> CliConfig {
        let mut game = GameConfig::new(self.players, self.max_lucky);
        game.seed = self.seed;

        CliConfig {
            game,
            json: self.json,
            interactive: stdin_is_terminal && !self.no_prompt,
            verbose: self.verbose,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_error_code(&e));
        }
    };
    let config = cli.into_config(io::stdin().is_terminal());

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_filter()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let code = match run(&config) {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<LotteryError>() {
                Some(LotteryError::Allocation(err)) => {
                    eprintln!("Player record allocation failed: {}", err);
                }
                Some(LotteryError::InputExhausted { player }) => {
                    eprintln!("Error: Input ended before player {} was named", player);
                }
                _ => {
                    eprintln!("Error: {:#}", e);
                }
            }
            e.downcast_ref::<LotteryError>().map_or(EXIT_FAILURE, LotteryError::exit_code)
        }
    };

    std::process::exit(code);
}

/// Help and version exit 0, any other argument error is a failure.
fn parse_error_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_ALL_OK,
        _ => EXIT_FAILURE,
    }
}

fn run(config: &CliConfig) -> anyhow::Result<i32> {
    config.validate()?;
    tracing::debug!("Config: {}", serde_json::to_string(config)?);

    let mut lottery = create_lottery(config.game.clone())?;
    let mut reporter = ConsoleReporter::new(io::stdout());

    let summary = if config.interactive {
        lottery.play(&mut DialoguerNames::new(), &mut reporter)
    } else {
        let mut names = TokenNames::new(io::stdin().lock(), io::stdout());
        lottery.play(&mut names, &mut reporter)
    }
    .context("Lottery run failed")?;

    if config.json {
        println!("{}", summary.to_json()?);
    }

    Ok(summary.exit_code)
}
