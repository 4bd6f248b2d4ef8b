pub mod batch;
pub mod calculator;
pub mod casual;
pub mod config;
pub mod consts;
pub mod device;
pub mod division;
pub mod error;
pub mod stats;
// cmd and reports are binary modules, declared from main.rs.

pub use calculator::{calculate, MetricsCalculator, MetricsResult};
pub use error::{OpError, OpResult};
pub use stats::StatsInput;
