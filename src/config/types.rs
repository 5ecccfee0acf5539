//! Configuration types for payroll tax rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. The loaded
//! [`TaxConstants`] value is immutable and is threaded explicitly into
//! every calculation call, so the engine can be exercised with alternate
//! rate tables (e.g. a future tax year) without touching call sites.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the jurisdiction whose rules are loaded.
///
/// Contains identifying information about the rule set: jurisdiction code,
/// name, tax year, and the source of the published rates.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// The jurisdiction code (e.g., "KZ-2026").
    pub code: String,
    /// The human-readable name of the rule set.
    pub name: String,
    /// The tax year the rates apply to.
    pub tax_year: String,
    /// URL to the official source of the rates.
    pub source_url: String,
}

/// Rates withheld from the employee's gross salary.
#[derive(Debug, Clone, Deserialize)]
pub struct WithholdingRates {
    /// Mandatory pension withholding rate (fraction of gross).
    pub pension: Decimal,
    /// Mandatory medical insurance withholding rate (fraction of gross).
    pub medical: Decimal,
}

/// A single employer contribution: its rate and the base it applies to.
///
/// The base is gross salary, optionally reduced by the pension and/or
/// medical withholdings. Which withholdings are subtracted differs per
/// contribution and is a statutory rule, so it is data here rather than
/// code: a future policy correction is a config change.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionRule {
    /// The contribution rate (fraction of the base).
    pub rate: Decimal,
    /// Whether the pension withholding is subtracted from the base.
    #[serde(default)]
    pub less_pension: bool,
    /// Whether the medical withholding is subtracted from the base.
    #[serde(default)]
    pub less_medical: bool,
}

impl ContributionRule {
    /// Computes the contribution base for a given gross salary and the
    /// already-computed withholding amounts.
    pub fn base(&self, gross: Decimal, pension: Decimal, medical: Decimal) -> Decimal {
        let mut base = gross;
        if self.less_pension {
            base -= pension;
        }
        if self.less_medical {
            base -= medical;
        }
        base
    }

    /// Computes the contribution amount for a given gross salary and the
    /// already-computed withholding amounts.
    pub fn amount(&self, gross: Decimal, pension: Decimal, medical: Decimal) -> Decimal {
        self.base(gross, pension, medical) * self.rate
    }
}

/// Employer contributions paid on top of gross salary.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployerContributionRules {
    /// Mandatory professional pension contribution (base: gross).
    pub professional_pension: ContributionRule,
    /// Social contribution (base: gross less pension).
    pub social_contribution: ContributionRule,
    /// Social tax (base: gross less pension and medical).
    pub social_tax: ContributionRule,
    /// Employer medical insurance contribution (base: gross).
    pub employer_medical: ContributionRule,
}

/// The progressive income-tax schedule.
///
/// Income up to the threshold is taxed at the low rate; the excess above
/// the threshold is taxed at the high rate. The threshold is published as
/// an annual figure in base units and converted to a monthly amount.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxSchedule {
    /// The annual threshold expressed in base-unit multiples.
    pub threshold_annual_base_units: u32,
    /// The marginal rate below the threshold.
    pub low_rate: Decimal,
    /// The marginal rate above the threshold.
    pub high_rate: Decimal,
}

/// Tuning values for the gross-from-net solver.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverSettings {
    /// Bisection stops when the bracket width is at or below this amount
    /// (one unit of currency by default).
    pub tolerance: Decimal,
    /// Starting multiplier for the upper bracket bound. A heuristic, not a
    /// hard assumption: the solver verifies the bracket and widens it if
    /// the effective withholding ever exceeds what this multiplier covers.
    pub bracket_multiplier: Decimal,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: Decimal::ONE,
            bracket_multiplier: Decimal::TWO,
        }
    }
}

/// The complete, immutable payroll constants table.
///
/// Loaded once (from YAML or via [`TaxConstants::kazakhstan_2026`]) and
/// never mutated. Every calculation takes a reference to this value.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxConstants {
    /// The monthly base unit value (MRP for Kazakhstan).
    pub base_unit_value: Decimal,
    /// The standard monthly deduction, in base-unit multiples.
    pub standard_deduction_base_units: u32,
    /// Employee withholding rates.
    pub employee: WithholdingRates,
    /// Employer contribution rules.
    pub employer: EmployerContributionRules,
    /// The progressive income-tax schedule.
    pub income_tax: IncomeTaxSchedule,
    /// Solver tuning values.
    #[serde(default)]
    pub solver: SolverSettings,
}

impl TaxConstants {
    /// The built-in Kazakhstan 2026 constants table.
    ///
    /// MRP 4325, standard deduction 30 MRP, employee withholdings 10%
    /// pension + 2% medical, employer contributions 3.5% / 5% / 6% / 3%,
    /// income tax 10% up to 8500 MRP per year and 15% above.
    pub fn kazakhstan_2026() -> Self {
        Self {
            base_unit_value: Decimal::from(4325),
            standard_deduction_base_units: 30,
            employee: WithholdingRates {
                pension: Decimal::new(10, 2),
                medical: Decimal::new(2, 2),
            },
            employer: EmployerContributionRules {
                professional_pension: ContributionRule {
                    rate: Decimal::new(35, 3),
                    less_pension: false,
                    less_medical: false,
                },
                social_contribution: ContributionRule {
                    rate: Decimal::new(5, 2),
                    less_pension: true,
                    less_medical: false,
                },
                social_tax: ContributionRule {
                    rate: Decimal::new(6, 2),
                    less_pension: true,
                    less_medical: true,
                },
                employer_medical: ContributionRule {
                    rate: Decimal::new(3, 2),
                    less_pension: false,
                    less_medical: false,
                },
            },
            income_tax: IncomeTaxSchedule {
                threshold_annual_base_units: 8500,
                low_rate: Decimal::new(10, 2),
                high_rate: Decimal::new(15, 2),
            },
            solver: SolverSettings::default(),
        }
    }

    /// The standard monthly deduction amount in currency units.
    pub fn monthly_deduction(&self) -> Decimal {
        self.base_unit_value * Decimal::from(self.standard_deduction_base_units)
    }

    /// The monthly income-tax threshold in currency units.
    pub fn monthly_income_tax_threshold(&self) -> Decimal {
        self.base_unit_value * Decimal::from(self.income_tax.threshold_annual_base_units)
            / Decimal::from(12)
    }
}
