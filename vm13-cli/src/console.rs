//! Console over a reader/writer pair

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use vm13_runtime::{Console, Result, RuntimeError};
use vm13_spec::Value;

/// Reads whitespace-separated values, writes one value per line.
///
/// Prompts go to stderr so that the writer only ever carries program output.
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
    prompt: bool,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(reader: R, writer: W, prompt: bool) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
            prompt,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(RuntimeError::InputExhausted);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn read_prompted(&mut self, prompt: &str) -> Result<Value> {
        if self.prompt && self.pending.is_empty() {
            let mut stderr = std::io::stderr();
            write!(stderr, "{}", prompt)?;
            stderr.flush()?;
        }

        let token = self.next_token()?;
        token
            .parse::<Value>()
            .map_err(|e| RuntimeError::Console(format!("invalid value '{}': {}", token, e)))
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_value(&mut self) -> Result<Value> {
        self.read_prompted("Enter a value: ")
    }

    fn read_element(&mut self, index: usize) -> Result<Value> {
        self.read_prompted(&format!("Enter value for index {}: ", index))
    }

    fn write_value(&mut self, value: Value) -> Result<()> {
        writeln!(self.writer, "{}", value)?;
        self.writer.flush()?;
        Ok(())
    }
}
