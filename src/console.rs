use std::collections::VecDeque;
use std::io::{BufRead, Write};

use ladder_domain::{ServiceError, ServiceResult};

/// Line-oriented seam between commands and the terminal. Commands take all
/// input and produce all output through this trait, so tests can drive them
/// with a scripted console.
pub trait Console {
    /// Prints `message` without a trailing newline, then reads one input
    /// line. The returned line is trimmed.
    fn prompt(&mut self, message: &str) -> ServiceResult<String>;
    fn write_line(&mut self, message: &str) -> ServiceResult<()>;
}

fn io_error(e: std::io::Error) -> ServiceError {
    ServiceError::Internal(format!("Console I/O failed: {}", e))
}

pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn prompt(&mut self, message: &str) -> ServiceResult<String> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(message.as_bytes()).map_err(io_error)?;
        stdout.flush().map_err(io_error)?;
        drop(stdout);

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(io_error)?;
        if read == 0 {
            return ServiceError::internal("Input stream closed");
        }
        Ok(line.trim().to_string())
    }

    fn write_line(&mut self, message: &str) -> ServiceResult<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(message.as_bytes()).map_err(io_error)?;
        stdout.write_all(b"\n").map_err(io_error)?;
        Ok(())
    }
}

/// Scripted console for tests: serves queued input lines and records every
/// prompt and output line.
pub struct MockConsole {
    inputs: VecDeque<String>,
    pub output: Vec<String>,
}

impl MockConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    pub fn output_contains(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for MockConsole {
    fn prompt(&mut self, message: &str) -> ServiceResult<String> {
        self.output.push(message.to_string());
        match self.inputs.pop_front() {
            Some(line) => Ok(line),
            None => ServiceError::internal("Input stream closed"),
        }
    }

    fn write_line(&mut self, message: &str) -> ServiceResult<()> {
        self.output.push(message.to_string());
        Ok(())
    }
}
