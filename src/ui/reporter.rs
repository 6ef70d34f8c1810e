//! Progress and message reporting for a report run
//!
//! Collectors and the driver talk to a [`Reporter`] instead of printing
//! directly, so tests can run the pipeline silently.

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};
use std::sync::Mutex;

use super::run_log::RunLog;
use super::spinner::bar_style;

/// Observer for run progress and messages
pub trait Reporter {
    /// Informational line
    fn info(&self, message: &str);

    /// Failure line (request errors, missing data)
    fn error(&self, message: &str);

    /// Start overall progress across `total` organizations
    fn begin_run(&self, _total: usize) {}

    /// Start a transient sub-task of `total` steps
    fn begin_task(&self, _label: &str, _total: usize) {}

    /// Advance the current sub-task by one step
    fn advance_task(&self) {}

    /// One organization finished; sub-tasks are cleared
    fn org_finished(&self) {}

    /// Overall progress finished
    fn finish_run(&self) {}
}

/// Reporter that discards everything
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Terminal reporter with progress bars, mirroring messages into the run log
pub struct ConsoleReporter {
    multi: MultiProgress,
    overall: Mutex<Option<ProgressBar>>,
    task: Mutex<Option<ProgressBar>>,
    run_log: Option<RunLog>,
}

impl ConsoleReporter {
    /// Create a reporter; `quiet` hides progress bars but keeps messages
    pub fn new(run_log: Option<RunLog>, quiet: bool) -> Self {
        let multi = if quiet {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        } else {
            MultiProgress::new()
        };
        Self {
            multi,
            overall: Mutex::new(None),
            task: Mutex::new(None),
            run_log,
        }
    }

    /// Run log attached to this reporter
    pub fn run_log(&self) -> Option<&RunLog> {
        self.run_log.as_ref()
    }

    fn log_line(&self, message: &str) {
        if let Some(log) = &self.run_log {
            log.write_line(message);
        }
    }

    fn clear_task(&self) {
        if let Some(bar) = lock(&self.task).take() {
            bar.finish_and_clear();
            self.multi.remove(&bar);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        self.multi.suspend(|| println!("{}", message));
        self.log_line(message);
    }

    fn error(&self, message: &str) {
        self.multi.suspend(|| eprintln!("{}", message));
        self.log_line(message);
    }

    fn begin_run(&self, total: usize) {
        let bar = self.multi.add(ProgressBar::new(total as u64));
        bar.set_style(bar_style());
        bar.set_message("Overall Progress");
        *lock(&self.overall) = Some(bar);
    }

    fn begin_task(&self, label: &str, total: usize) {
        self.clear_task();
        let bar = self.multi.add(ProgressBar::new(total as u64));
        bar.set_style(bar_style());
        bar.set_message(label.to_string());
        *lock(&self.task) = Some(bar);
    }

    fn advance_task(&self) {
        if let Some(bar) = lock(&self.task).as_ref() {
            bar.inc(1);
        }
    }

    fn org_finished(&self) {
        self.clear_task();
        if let Some(bar) = lock(&self.overall).as_ref() {
            bar.inc(1);
        }
    }

    fn finish_run(&self) {
        self.clear_task();
        if let Some(bar) = lock(&self.overall).take() {
            bar.finish_and_clear();
        }
    }
}

/// Reporter that records messages for assertions
#[cfg(test)]
#[derive(Default)]
pub struct RecordingReporter {
    pub infos: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
    pub tasks: Mutex<Vec<(String, usize)>>,
    pub advances: Mutex<usize>,
}

#[cfg(test)]
impl RecordingReporter {
    pub fn infos(&self) -> Vec<String> {
        lock(&self.infos).clone()
    }

    pub fn errors(&self) -> Vec<String> {
        lock(&self.errors).clone()
    }

    pub fn tasks(&self) -> Vec<(String, usize)> {
        lock(&self.tasks).clone()
    }

    pub fn advances(&self) -> usize {
        *lock(&self.advances)
    }
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        lock(&self.infos).push(message.to_string());
    }

    fn error(&self, message: &str) {
        lock(&self.errors).push(message.to_string());
    }

    fn begin_task(&self, label: &str, total: usize) {
        lock(&self.tasks).push((label.to_string(), total));
    }

    fn advance_task(&self) {
        *lock(&self.advances) += 1;
    }
}
