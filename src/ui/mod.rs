//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while bundles are fetched
//! - Console formatting of command results ([`format`])
//!
//! All progress reporting goes through the [`ProgressReporter`] trait so
//! verbose runs, whose log lines would tear a spinner, can go silent.

pub mod format;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for long-running operations
pub trait ProgressReporter {
    /// Begin the next step, described by `message`
    fn start(&mut self, message: &str);

    /// The current step succeeded
    fn finish(&mut self);

    /// The current step failed
    fn abandon(&mut self);
}

/// Spinner on stderr; hidden automatically when stderr is not a terminal
pub struct SpinnerReporter {
    spinner: Option<ProgressBar>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self { spinner: None }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template("  {spinner:.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for SpinnerReporter {
    fn start(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::style());
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn finish(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

/// No-op reporter
#[derive(Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn start(&mut self, _message: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Reporter suited to the current run
pub fn reporter(verbose: bool) -> Box<dyn ProgressReporter> {
    if verbose {
        Box::new(SilentReporter)
    } else {
        Box::new(SpinnerReporter::new())
    }
}

/// Run `f` between `start` and `finish`/`abandon` on `reporter`
pub fn with_progress<T, E>(
    reporter: &mut dyn ProgressReporter,
    message: &str,
    f: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    reporter.start(message);
    let result = f();
    match &result {
        Ok(_) => reporter.finish(),
        Err(_) => reporter.abandon(),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingReporter {
        events: Vec<String>,
    }

    impl ProgressReporter for RecordingReporter {
        fn start(&mut self, message: &str) {
            self.events.push(format!("start {message}"));
        }

        fn finish(&mut self) {
            self.events.push("finish".into());
        }

        fn abandon(&mut self) {
            self.events.push("abandon".into());
        }
    }

    #[test]
    fn test_with_progress_success() {
        let mut reporter = RecordingReporter::default();
        let value: Result<u8, ()> = with_progress(&mut reporter, "fetching ruby", || Ok(1));
        assert_eq!(value, Ok(1));
        assert_eq!(reporter.events, vec!["start fetching ruby", "finish"]);
    }

    #[test]
    fn test_with_progress_failure() {
        let mut reporter = RecordingReporter::default();
        let value: Result<u8, &str> = with_progress(&mut reporter, "fetching ruby", || Err("boom"));
        assert_eq!(value, Err("boom"));
        assert_eq!(reporter.events, vec!["start fetching ruby", "abandon"]);
    }

    #[test]
    fn test_spinner_reporter_lifecycle() {
        let mut reporter = SpinnerReporter::new();
        reporter.start("fetching ruby");
        assert!(reporter.spinner.is_some());
        reporter.finish();
        assert!(reporter.spinner.is_none());
    }

    #[test]
    fn test_silent_reporter_no_ops() {
        let mut reporter = SilentReporter;
        reporter.start("anything");
        reporter.finish();
        reporter.abandon();
    }
}
