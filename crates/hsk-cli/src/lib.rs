//! CLI library components for the health-study field kit.

pub mod logging;
pub mod report;
