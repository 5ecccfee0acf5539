//! Full salary breakdown assembly.
//!
//! Ties the solver, withholding, income-tax, and contribution pieces
//! together into one [`SalaryBreakdown`] record. All arithmetic runs at
//! full precision; amounts are rounded to two decimal places only when
//! the record is assembled, and each total is the rounding of the exact
//! sum rather than the sum of rounded parts.

use rust_decimal::Decimal;

use crate::config::TaxConstants;
use crate::error::EngineResult;
use crate::models::{EmployeeWithholdings, EmployerContributions, SalaryBreakdown};

use super::contributions::employer_contributions;
use super::gross_solver::solve_gross_from_net;
use super::income_tax::progressive_income_tax;
use super::withholdings::employee_withholdings;

/// Computes the full salary breakdown for a desired net salary.
///
/// Solves gross from net, then itemizes the employee withholdings, the
/// income tax, and the employer contributions on the solved gross. The
/// reported net salary is recomputed from the solved gross, so it may
/// differ from the requested net by up to the solver tolerance.
///
/// # Errors
///
/// Returns `InvalidInput` when `net_salary` is not strictly positive.
pub fn salary_breakdown(
    net_salary: Decimal,
    deduction_applied: bool,
    constants: &TaxConstants,
) -> EngineResult<SalaryBreakdown> {
    let gross = solve_gross_from_net(net_salary, deduction_applied, constants)?.gross;

    let withholdings = employee_withholdings(gross, constants);

    let mut taxable = gross - withholdings.total();
    if deduction_applied {
        taxable -= constants.monthly_deduction();
    }
    let income_tax = progressive_income_tax(taxable.max(Decimal::ZERO), constants);

    let contributions = employer_contributions(gross, &withholdings, constants);

    let withheld_total = withholdings.total() + income_tax;
    let net_paid = gross - withheld_total;
    let employer_cost = gross + contributions.total();

    Ok(SalaryBreakdown {
        gross_salary: gross.round_dp(2),
        employee_withholdings: EmployeeWithholdings {
            pension: withholdings.pension.round_dp(2),
            medical: withholdings.medical.round_dp(2),
            income_tax: income_tax.round_dp(2),
            total: withheld_total.round_dp(2),
        },
        net_salary: net_paid.round_dp(2),
        employer_contributions: EmployerContributions {
            professional_pension: contributions.professional_pension.round_dp(2),
            social_contribution: contributions.social_contribution.round_dp(2),
            social_tax: contributions.social_tax.round_dp(2),
            employer_medical: contributions.employer_medical.round_dp(2),
            total: contributions.total().round_dp(2),
        },
        total_employer_cost: employer_cost.round_dp(2),
        deduction_applied,
    })
}
