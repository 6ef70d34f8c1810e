//! UI utilities for terminal output
//!
//! Progress reporting, spinners and the per-run log file.

mod reporter;
mod run_log;
mod spinner;

#[cfg(test)]
pub use reporter::RecordingReporter;
pub use reporter::{ConsoleReporter, NoopReporter, Reporter};
pub use run_log::RunLog;
pub use spinner::{clear_spinner, create_spinner, finish_spinner};
