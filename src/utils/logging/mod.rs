//! Logging utilities for output and progress tracking
//!
//! Shared log lines, operator console output and progress bars.

pub mod console;
pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use self::log::{
    log_duplicate_origin, log_export, log_skipped_row, log_table_open, log_table_read,
};
pub use progress::{create_main_progress_bar, finish_progress_bar};
