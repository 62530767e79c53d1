use dialoguer::Input;
use lucky_lottery::{LotteryError, NameSource, Result};
use std::io;

/// Terminal prompt for player names. Blank answers are rejected and asked
/// again; only the first word of an answer is kept.
#[derive(Debug, Default)]
pub struct DialoguerNames;

impl DialoguerNames {
    pub fn new() -> Self {
        Self
    }
}

impl NameSource for DialoguerNames {
    fn next_name(&mut self, player: usize) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(format!("Name for player {}", player))
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Name cannot be blank")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(|err| prompt_error(err, player))?;

        Ok(first_word(&answer).to_string())
    }
}

// end of input on the terminal counts as running out of names
fn prompt_error(err: dialoguer::Error, player: usize) -> LotteryError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            LotteryError::InputExhausted { player }
        }
        other => other.into(),
    }
}

fn first_word(answer: &str) -> &str {
    answer.split_whitespace().next().unwrap_or(answer)
}
