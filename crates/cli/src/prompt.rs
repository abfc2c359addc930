//! Line-based prompting.
//!
//! Malformed input is never fatal: the prompt is repeated until a value
//! parses. End of input is reported as `None` so callers can shut down
//! cleanly.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Sink for everything that is not a prompt.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prompt for a whole number.
    pub fn integer(&mut self, prompt: &str) -> Result<Option<i64>> {
        self.parsed(prompt, "Invalid input. Please enter an integer.")
    }

    /// Prompt for a decimal number.
    pub fn number(&mut self, prompt: &str) -> Result<Option<f64>> {
        self.parsed(prompt, "Invalid input. Please enter a number.")
    }

    fn parsed<T: FromStr>(&mut self, prompt: &str, complaint: &str) -> Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    log::debug!("rejected input {:?}", line.trim());
                    writeln!(self.output, "{complaint}")?;
                }
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if !prompt.is_empty() {
            write!(self.output, "{prompt}")?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
