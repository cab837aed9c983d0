//! Human-readable progress and diagnostics
//!
//! Progress and per-file read failures share stdout. Nothing here is meant to
//! be machine-parsed.

use colored::Colorize;

/// Console output settings for one run
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    /// Suppress progress lines (read failures are always shown)
    pub quiet: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Disable ANSI colors for the whole process
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    pub fn adding(&self, path: &str) {
        if !self.quiet {
            println!("Adding: {}", path);
        }
    }

    pub fn notice(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.yellow());
        }
    }

    pub fn done(&self, message: &str) {
        if !self.quiet {
            println!("\n{}", message.green());
        }
    }

    pub fn read_failed(&self, path: &str, error: &std::io::Error) {
        println!("{}", format!("Failed to read {}: {}", path, error).red());
    }
}
