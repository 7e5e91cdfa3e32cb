//! Console reporting for generation runs
//!
//! Provides a simple API for displaying run state:
//! - Current phase (Generating, Sorting, Writing)
//! - Progress (current/total with optional details)
//! - Log lines above the progress bar

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Run phases shown next to the progress bar
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Generating,
    Sorting,
    Writing,
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Generating => write!(f, "Generating transactions"),
            Phase::Sorting => write!(f, "Sorting by date and branch"),
            Phase::Writing => write!(f, "Writing CSV"),
            Phase::Complete => write!(f, "Complete"),
        }
    }
}

/// Progress information for the current operation
#[derive(Debug, Clone, Default)]
pub struct Progress {
    pub current: u64,
    pub total: u64,
    pub label: String,
}

impl Progress {
    pub fn new(current: u64, total: u64, label: impl Into<String>) -> Self {
        Self {
            current,
            total,
            label: label.into(),
        }
    }
}

/// Trait for UI implementations - allows both console and silent/test modes
pub trait Ui {
    fn set_phase(&mut self, phase: Phase);
    fn set_info(&mut self, info: impl Into<String>);
    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>);
    fn clear_progress(&mut self);
    fn log(&mut self, message: impl Into<String>);
}

/// Console UI backed by an indicatif progress bar
pub struct ConsoleUi {
    bar: ProgressBar,
    phase: Phase,
    progress: Progress,
    info: String,
}

impl ConsoleUi {
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{prefix:28} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );

        Self {
            bar,
            phase: Phase::Generating,
            progress: Progress::default(),
            info: String::new(),
        }
    }

    /// Current phase
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Last reported progress
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Detail shown after the progress label
    pub fn info(&self) -> &str {
        &self.info
    }

    fn refresh_message(&self) {
        if self.info.is_empty() {
            self.bar.set_message(self.progress.label.clone());
        } else {
            self.bar
                .set_message(format!("{}  {}", self.progress.label, self.info));
        }
    }

    /// Finish the progress bar and print the final summary
    pub fn finish(mut self, summary: &str) {
        self.set_phase(Phase::Complete);
        self.clear_progress();
        self.bar.finish_and_clear();
        println!("{}", summary);
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui for ConsoleUi {
    fn set_phase(&mut self, phase: Phase) {
        self.bar.set_prefix(phase.to_string());
        self.phase = phase;
    }

    fn set_info(&mut self, info: impl Into<String>) {
        self.info = info.into();
        self.refresh_message();
    }

    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>) {
        self.progress = Progress::new(current, total, label);
        self.bar.set_length(total);
        self.bar.set_position(current);
        self.refresh_message();
    }

    fn clear_progress(&mut self) {
        self.progress = Progress::default();
        self.info.clear();
        self.bar.set_position(0);
        self.bar.set_length(0);
        self.bar.set_message(String::new());
    }

    fn log(&mut self, message: impl Into<String>) {
        self.bar.println(message.into());
    }
}

/// Silent UI implementation for testing and non-interactive use
#[derive(Default)]
pub struct SilentUi;

impl SilentUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for SilentUi {
    fn set_phase(&mut self, _phase: Phase) {}
    fn set_info(&mut self, _info: impl Into<String>) {}
    fn set_progress(&mut self, _current: u64, _total: u64, _label: impl Into<String>) {}
    fn clear_progress(&mut self) {}
    fn log(&mut self, _message: impl Into<String>) {}
}
