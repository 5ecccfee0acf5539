//! Compensation and cost aggregation engine for security staffing quotes.
//!
//! This crate prices guarded-post contracts: it recovers gross salaries
//! from desired take-home pay under the Kazakhstan 2026 payroll rules,
//! itemizes the employer's full cost per person, amortizes equipment over
//! its useful life, and rolls everything up into a marked-up monthly
//! price with an effective hourly rate.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
