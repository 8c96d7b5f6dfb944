//! Line-oriented prompts over any reader/writer pair.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Context;

/// Asks questions on `out` and reads one answer per line from `input`.
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Writer the prompts go to
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Print `question` and read the answer without its line ending.
    ///
    /// Returns `None` once input is exhausted.
    pub fn ask(&mut self, question: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{}", question)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Ask for text, substituting `default` for an empty answer.
    pub fn ask_or(&mut self, question: &str, default: &str) -> anyhow::Result<Option<String>> {
        Ok(self
            .ask(question)?
            .map(|answer| if answer.is_empty() { default.to_string() } else { answer }))
    }

    /// Ask for a number, substituting `default` for an empty answer.
    ///
    /// Anything that does not parse is an error.
    pub fn ask_number<T>(&mut self, question: &str, default: T) -> anyhow::Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let Some(answer) = self.ask(question)? else {
            return Ok(None);
        };
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(Some(default));
        }
        let value = answer
            .parse()
            .with_context(|| format!("invalid number: '{}'", answer))?;
        Ok(Some(value))
    }
}
