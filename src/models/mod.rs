//! Core data models for the quote engine.
//!
//! This module contains all the domain models used throughout the engine.

mod asset;
mod breakdown;
mod calculation_result;
mod post;

pub use asset::AssetAllocation;
pub use breakdown::{EmployeeWithholdings, EmployerContributions, SalaryBreakdown};
pub use calculation_result::{AssetCost, CalculationResult, PostCost, QuoteSummary, StaffGroupCost};
pub use post::{Post, StaffGroup};
