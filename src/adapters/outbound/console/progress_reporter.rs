use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal};

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing status lines
/// to stderr so they never mix with the JSON report on stdout. Colors are
/// only used when stderr is a terminal.
pub struct StderrProgressReporter {
    color: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    fn paint_error(&self, message: &str) -> String {
        if self.color {
            message.red().to_string()
        } else {
            message.to_string()
        }
    }

    fn paint_completion(&self, message: &str) -> String {
        if self.color {
            message.green().bold().to_string()
        } else {
            message.to_string()
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", self.paint_error(message));
    }

    fn report_completion(&self, message: &str) {
        eprintln!("{}", self.paint_completion(message));
    }
}
