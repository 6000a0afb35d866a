//! Utility functions shared across the press

pub mod logging;

pub use logging::{log_export, log_table_open, log_table_read};
