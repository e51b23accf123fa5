//! Line-oriented console I/O.
//!
//! Every read returns `Ok(None)` once input is exhausted so callers can end the
//! session cleanly instead of failing.

use std::io::{self, BufRead, Write};

pub const INVALID_VALUE: &str = "Invalid value. Try again.";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line.
    pub fn line(&mut self, text: impl core::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Write `prompt` without a newline and read the answer, line ending stripped.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so such a line reads as an
    /// unparseable answer rather than an I/O failure.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        let text = String::from_utf8_lossy(&bytes);
        Ok(Some(text.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Like [`ask`](Self::ask) but with surrounding whitespace removed.
    pub fn ask_trimmed(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Ok(self.ask(prompt)?.map(|s| s.trim().to_string()))
    }

    /// Ask until the answer is a finite number.
    pub fn ask_amount(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        self.ask_until(prompt, |s| s.parse::<f64>().ok().filter(|v| v.is_finite()))
    }

    /// Ask until `parse` accepts the trimmed answer.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask_trimmed(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Some(value) => return Ok(Some(value)),
                None => self.line(INVALID_VALUE)?,
            }
        }
    }
}
