use crate::{LotteryError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Supplies player names during list construction
pub trait NameSource {
    /// Name for the 1-based `player`. Whitespace is never returned as a name.
    fn next_name(&mut self, player: usize) -> Result<String>;
}

/// Reads whitespace-delimited tokens from a reader, prompting on a writer.
///
/// Several names may share a line and blank lines are skipped. Running out
/// of input is reported as [`LotteryError::InputExhausted`].
pub struct TokenNames<R, W> {
    reader: R,
    prompt: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> TokenNames<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self {
            reader,
            prompt,
            pending: VecDeque::new(),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.prompt)
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

impl<R: BufRead, W: Write> NameSource for TokenNames<R, W> {
    fn next_name(&mut self, player: usize) -> Result<String> {
        write!(self.prompt, "\nName for player {}: ", player)?;
        self.prompt.flush()?;

        self.next_token()?.ok_or(LotteryError::InputExhausted { player })
    }
}
