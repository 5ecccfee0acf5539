//! Employer contribution calculation.
//!
//! Each contribution applies its rate to a base defined by its
//! [`ContributionRule`](crate::config::ContributionRule): gross salary,
//! optionally reduced by the pension and/or medical withholdings. The
//! bases are not uniform across contributions - social contribution and
//! social tax subtract withholdings from gross while professional pension
//! and employer medical do not - and that asymmetry is a statutory rule
//! the engine reproduces exactly.

use rust_decimal::Decimal;

use crate::config::TaxConstants;

use super::withholdings::WithholdingAmounts;

/// The four employer contribution amounts for one gross salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionAmounts {
    /// Mandatory professional pension contribution.
    pub professional_pension: Decimal,
    /// Social contribution.
    pub social_contribution: Decimal,
    /// Social tax.
    pub social_tax: Decimal,
    /// Employer medical insurance contribution.
    pub employer_medical: Decimal,
}

impl ContributionAmounts {
    /// The sum of all four contributions.
    pub fn total(&self) -> Decimal {
        self.professional_pension + self.social_contribution + self.social_tax
            + self.employer_medical
    }
}

/// Computes the employer contributions for a gross salary and its
/// already-computed withholdings.
pub fn employer_contributions(
    gross: Decimal,
    withholdings: &WithholdingAmounts,
    constants: &TaxConstants,
) -> ContributionAmounts {
    let rules = &constants.employer;
    let pension = withholdings.pension;
    let medical = withholdings.medical;

    ContributionAmounts {
        professional_pension: rules.professional_pension.amount(gross, pension, medical),
        social_contribution: rules.social_contribution.amount(gross, pension, medical),
        social_tax: rules.social_tax.amount(gross, pension, medical),
        employer_medical: rules.employer_medical.amount(gross, pension, medical),
    }
}
