//! User-facing output.
//! The generator reports progress through a `Reporter` handed to it, so output
//! can be silenced or captured.

use console::style;
use std::cell::RefCell;

/// Kind of a reported line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
    File,
    Command,
    Section,
}

/// Sink for messages shown to the user.
pub trait Reporter {
    fn report(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.report(Level::Info, message);
    }

    fn success(&self, message: &str) {
        self.report(Level::Success, message);
    }

    fn warning(&self, message: &str) {
        self.report(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(Level::Error, message);
    }

    /// A file written into the project.
    fn file(&self, path: &str) {
        self.report(Level::File, path);
    }

    /// A command the user is expected to run.
    fn command(&self, command: &str) {
        self.report(Level::Command, command);
    }

    /// Heading for a group of lines.
    fn section(&self, title: &str) {
        self.report(Level::Section, title);
    }
}

/// Colored terminal output.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, level: Level, message: &str) {
        match level {
            Level::Info => println!("{} {}", style("ℹ").blue(), message),
            Level::Success => println!("{} {}", style("✔").green(), message),
            Level::Warning => eprintln!("{} {}", style("⚠").yellow(), style(message).yellow()),
            Level::Error => eprintln!("{} {}", style("✖").red(), style(message).red()),
            Level::File => println!("  {} {}", style("+").dim(), style(message).dim()),
            Level::Command => println!("  {} {}", style("$").cyan(), style(message).bold()),
            Level::Section => {
                println!();
                println!("{}", style(message).cyan().bold());
                println!("{}", style("─".repeat(message.chars().count())).cyan());
            }
        }
    }
}

/// Drops everything.
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _level: Level, _message: &str) {}
}

/// Keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: RefCell<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every reported line with its level, in order.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    /// Messages reported at `level`, in order.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, level: Level, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}
