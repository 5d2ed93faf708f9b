//! Line-oriented console I/O
//!
//! The machine reads one line per cycle and writes whole screens. Both go
//! through [`Console`] so sessions can be scripted.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of input lines and sink for screen output
pub trait Console {
    /// Next line without its trailing line break, or `None` once input is
    /// exhausted
    fn read_line(&mut self) -> Option<String>;

    /// Write text as-is and make it visible
    fn write(&mut self, text: &str);
}

/// Strip one trailing `\n` or `\r\n`
fn trim_line_break(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// The process's stdin and stdout
#[derive(Debug, Default)]
pub struct StdConsole {
    line_buffer: String,
}

impl StdConsole {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> Option<String> {
        self.line_buffer.clear();
        match io::stdin().lock().read_line(&mut self.line_buffer) {
            Ok(0) => None,
            Ok(_) => {
                let mut line = std::mem::take(&mut self.line_buffer);
                trim_line_break(&mut line);
                Some(line)
            }
            Err(e) => {
                log::error!("failed to read from stdin: {}", e);
                None
            }
        }
    }

    fn write(&mut self, text: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
            log::error!("failed to write to stdout: {}", e);
        }
    }
}

/// Canned input lines and captured output
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    /// Feed `lines` one per cycle
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Everything written so far
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Option<String> {
        let mut line = self.input.pop_front()?;
        trim_line_break(&mut line);
        Some(line)
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }
}
