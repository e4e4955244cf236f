//! Progress reporting

use crate::types::RunResult;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Events emitted while a collection runs.
#[derive(Debug)]
pub enum CollectEvent<'a> {
    /// A matched file was copied.
    Copied {
        relative_path: &'a Path,
        destination_name: &'a str,
    },
    /// A recoverable problem was recorded.
    Error { message: &'a str },
    /// The run finished.
    Complete { result: &'a RunResult },
}

/// Callback used to observe a run.
pub type CollectCallback<'a> = dyn Fn(&CollectEvent<'_>) + 'a;

/// Line printed for each successful copy
pub fn format_copied(relative_path: &Path, destination_name: &str) -> String {
    format!(
        "Copied: {} -> {}",
        relative_path.display(),
        destination_name
    )
}

/// Summary block printed at the end of a run
pub fn format_summary(result: &RunResult) -> String {
    let mut lines = vec![
        String::new(),
        style("Operation complete:").bold().to_string(),
        format!("Files copied: {}", result.copied_count),
    ];

    if result.has_errors() {
        lines.push(String::new());
        lines.push(style("Errors encountered:").red().bold().to_string());
        lines.extend(result.errors.iter().cloned());
    }

    lines.join("\n")
}

/// Console reporter: prints copy lines and the summary, with a spinner
/// counting files while the run is in progress.
pub struct ConsoleReporter {
    spinner: ProgressBar,
    copied: std::cell::Cell<u64>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(std::time::Duration::from_millis(120));
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }
        spinner.set_message("Collecting...");

        Self {
            spinner,
            copied: std::cell::Cell::new(0),
        }
    }

    /// Reporter that never draws a spinner (plain output only)
    pub fn plain() -> Self {
        Self {
            spinner: ProgressBar::hidden(),
            copied: std::cell::Cell::new(0),
        }
    }

    pub fn handle(&self, event: &CollectEvent<'_>) {
        match event {
            CollectEvent::Copied {
                relative_path,
                destination_name,
            } => {
                let line = format_copied(relative_path, destination_name);
                self.spinner.suspend(|| println!("{}", line));
                self.copied.set(self.copied.get() + 1);
                self.spinner
                    .set_message(format!("Collecting... {} files", self.copied.get()));
            }
            CollectEvent::Error { message } => {
                self.spinner.set_message(format!("Problem: {}", message));
            }
            CollectEvent::Complete { result } => {
                self.spinner.finish_and_clear();
                println!("{}", format_summary(result));
            }
        }
    }

    pub fn copied(&self) -> u64 {
        self.copied.get()
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Event recorded by [`EventLog`], owned so it outlives the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEvent {
    Copied {
        relative_path: PathBuf,
        destination_name: String,
    },
    Error(String),
    Complete(RunResult),
}

/// Observer that keeps every event in memory
#[derive(Debug, Default)]
pub struct EventLog {
    events: std::cell::RefCell<Vec<RecordedEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self, event: &CollectEvent<'_>) {
        let recorded = match event {
            CollectEvent::Copied {
                relative_path,
                destination_name,
            } => RecordedEvent::Copied {
                relative_path: relative_path.to_path_buf(),
                destination_name: destination_name.to_string(),
            },
            CollectEvent::Error { message } => RecordedEvent::Error(message.to_string()),
            CollectEvent::Complete { result } => RecordedEvent::Complete((*result).clone()),
        };
        self.events.borrow_mut().push(recorded);
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Copy lines in the order they would have been printed
    pub fn copied_lines(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Copied {
                    relative_path,
                    destination_name,
                } => Some(format_copied(relative_path, destination_name)),
                _ => None,
            })
            .collect()
    }
}
