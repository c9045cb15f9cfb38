//! Shared utilities: date parsing and logging helpers

pub mod date_utils;
pub mod logging;
