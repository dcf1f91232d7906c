use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} batches - {msg}";

/// StderrProgressReporter adapter for reporting replay progress to stderr
///
/// Keeps stdout free for the rendered snapshots. Batch progress is shown with
/// an indicatif bar.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: false,
        }
    }

    /// A reporter that only prints errors.
    pub fn quiet() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: true,
        }
    }

    fn progress_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        if let Some(bar) = slot.as_ref() {
            return bar.clone();
        }

        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .map(|style| style.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        bar.set_style(style);
        *slot = Some(bar.clone());
        bar
    }

    fn finish(&self) {
        if let Some(bar) = self.progress_bar.borrow_mut().take() {
            bar.finish_and_clear();
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
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let bar = self.progress_bar(total);
        bar.set_position(current as u64);
        if let Some(message) = message {
            bar.set_message(message.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish();
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}
