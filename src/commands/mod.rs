//! Command implementations

pub mod check;
pub mod simple;
pub mod status;

pub use check::{CheckResult, check_guess};
pub use simple::run_simple;
pub use status::{StatusReport, read_status, reset_attempts};
