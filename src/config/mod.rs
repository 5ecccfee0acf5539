//! Configuration for the quote engine.
//!
//! This module contains the immutable payroll constants table and the
//! loader that reads it from YAML files.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ContributionRule, EmployerContributionRules, IncomeTaxSchedule, JurisdictionMetadata,
    SolverSettings, TaxConstants, WithholdingRates,
};
