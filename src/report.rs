//! Progress and warning reporting
//!
//! The walker never writes to the console directly; it talks to a `Reporter`
//! so the walk stays a pure function of (root, filters) and tests can observe
//! messages without capturing process output.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Sink for human-readable progress and warning messages.
pub trait Reporter {
    /// Report normal progress.
    fn info(&mut self, message: &str);

    /// Report a recoverable problem. Warnings never abort a scan.
    fn warn(&mut self, message: &str);
}

/// Reporter that writes info to stdout and warnings to stderr.
pub struct ConsoleReporter {
    use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn color_choice(&self) -> ColorChoice {
        if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&mut self, message: &str) {
        println!("{}", message);
    }

    fn warn(&mut self, message: &str) {
        let mut stderr = StandardStream::stderr(self.color_choice());
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
        let _ = writeln!(stderr, "grove: warning: {}", message);
        let _ = stderr.reset();
    }
}

/// Reporter that collects messages in memory, for tests.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub infos: Vec<String>,
    pub warnings: Vec<String>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for MemoryReporter {
    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
