//! User-facing diagnostic output
//!
//! Resolution reports progress ("fetch <url>") and advisories (skipped
//! unstable releases) through a [`Reporter`] handed to it at construction.
//! The CLI uses [`ConsoleReporter`]; tests use [`BufferedReporter`] to
//! inspect what would have been printed.

use std::io::IsTerminal;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Sink for user-facing messages
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Writes messages to stderr, green for info and red for warnings when
/// stderr is a terminal.
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    color: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            color: std::io::stderr().is_terminal(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        if self.color {
            eprintln!("{}", message.green());
        } else {
            eprintln!("{message}");
        }
    }

    fn warn(&self, message: &str) {
        if self.color {
            eprintln!("{}", message.red());
        } else {
            eprintln!("{message}");
        }
    }
}

/// A message recorded by [`BufferedReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Info(String),
    Warn(String),
}

/// Keeps every message in memory
#[derive(Debug, Default)]
pub struct BufferedReporter {
    messages: Mutex<Vec<Message>>,
}

impl BufferedReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all messages recorded so far, oldest first
    pub fn messages(&self) -> Vec<Message> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter_map(|m| match m {
                Message::Info(text) => Some(text),
                Message::Warn(_) => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter_map(|m| match m {
                Message::Warn(text) => Some(text),
                Message::Info(_) => None,
            })
            .collect()
    }

    fn push(&self, message: Message) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }
}

impl Reporter for BufferedReporter {
    fn info(&self, message: &str) {
        self.push(Message::Info(message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.push(Message::Warn(message.to_string()));
    }
}
