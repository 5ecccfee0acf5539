//! Gross-from-net salary inversion.
//!
//! Given a desired take-home (net) salary, recovers the gross salary
//! whose withholdings and income tax reduce it to that net. There is no
//! closed form (the income tax is piecewise and its base depends on the
//! withholdings), but `net(gross)` is strictly increasing for positive
//! gross - withholding rates are below one and the tax is sub-linear in
//! its base - so a verified-bracket bisection converges in a small,
//! bounded number of steps.

use rust_decimal::Decimal;

use crate::config::TaxConstants;
use crate::error::{EngineError, EngineResult};

use super::income_tax::progressive_income_tax;
use super::withholdings::employee_withholdings;

/// Upper bound on bracket doublings before the solver gives up.
///
/// Reached only if the constants table ever describes an effective
/// withholding at or above 100%, which no valid table does.
const MAX_BRACKET_EXPANSIONS: u32 = 32;

/// The outcome of a gross-from-net solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrossSolveOutcome {
    /// The recovered gross salary.
    pub gross: Decimal,
    /// The number of bisection steps taken.
    pub iterations: u32,
}

/// Computes the net salary paid out for a given gross salary.
///
/// net = gross - pension - medical - income tax, where the taxable income
/// for the income tax is gross less the withholdings and, when
/// `deduction_applied` is set, less the standard monthly deduction
/// (floored at zero).
pub fn net_for_gross(gross: Decimal, deduction_applied: bool, constants: &TaxConstants) -> Decimal {
    let withholdings = employee_withholdings(gross, constants);

    let mut taxable = gross - withholdings.total();
    if deduction_applied {
        taxable -= constants.monthly_deduction();
    }
    taxable = taxable.max(Decimal::ZERO);

    let income_tax = progressive_income_tax(taxable, constants);
    gross - withholdings.total() - income_tax
}

/// Solves for the gross salary whose net equals `target_net`.
///
/// Bisects over `[target_net, target_net x bracket_multiplier]`, widening
/// the upper bound first if it does not yet bracket the target (the
/// configured multiplier is a starting heuristic, not a hard assumption).
/// Stops when the bracket width is at or below the configured tolerance
/// (one unit of currency by default) and returns the final midpoint.
///
/// # Errors
///
/// Returns `InvalidInput` when `target_net` is not strictly positive.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::{net_for_gross, solve_gross_from_net};
/// use quote_engine::config::TaxConstants;
/// use rust_decimal::Decimal;
///
/// let constants = TaxConstants::kazakhstan_2026();
/// let outcome = solve_gross_from_net(Decimal::from(200_000), true, &constants).unwrap();
/// let recomputed = net_for_gross(outcome.gross, true, &constants);
/// assert!((recomputed - Decimal::from(200_000)).abs() <= Decimal::ONE);
/// ```
pub fn solve_gross_from_net(
    target_net: Decimal,
    deduction_applied: bool,
    constants: &TaxConstants,
) -> EngineResult<GrossSolveOutcome> {
    if target_net <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "net_salary",
            "must be greater than zero",
        ));
    }

    let tolerance = constants.solver.tolerance;
    let mut lower = target_net;
    let mut upper = target_net * constants.solver.bracket_multiplier;

    // Verify the bracket before searching; widen it if rate changes ever
    // push the effective withholding past what the multiplier covers.
    let mut expansions = 0;
    while net_for_gross(upper, deduction_applied, constants) < target_net {
        expansions += 1;
        if expansions > MAX_BRACKET_EXPANSIONS {
            return Err(EngineError::CalculationError {
                message: format!(
                    "bracket expansion exhausted solving for net salary {}",
                    target_net
                ),
            });
        }
        upper *= Decimal::TWO;
    }

    let mut iterations = 0;
    let mut midpoint = (lower + upper) / Decimal::TWO;
    while upper - lower > tolerance {
        midpoint = (lower + upper) / Decimal::TWO;
        if net_for_gross(midpoint, deduction_applied, constants) < target_net {
            lower = midpoint;
        } else {
            upper = midpoint;
        }
        iterations += 1;
    }

    Ok(GrossSolveOutcome {
        gross: midpoint,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn constants() -> TaxConstants {
        TaxConstants::kazakhstan_2026()
    }

    /// Scenario: net 200,000 with the standard deduction round-trips
    /// within one unit of currency.
    #[test]
    fn test_round_trip_200000_with_deduction() {
        let c = constants();
        let outcome = solve_gross_from_net(dec("200000"), true, &c).unwrap();

        let recomputed = net_for_gross(outcome.gross, true, &c);
        assert!(
            (recomputed - dec("200000")).abs() <= Decimal::ONE,
            "recomputed net {} too far from target",
            recomputed
        );
    }

    #[test]
    fn test_round_trip_without_deduction() {
        let c = constants();
        let outcome = solve_gross_from_net(dec("200000"), false, &c).unwrap();

        let recomputed = net_for_gross(outcome.gross, false, &c);
        assert!((recomputed - dec("200000")).abs() <= Decimal::ONE);
    }

    #[test]
    fn test_deduction_lowers_required_gross() {
        let c = constants();
        let with = solve_gross_from_net(dec("200000"), true, &c).unwrap();
        let without = solve_gross_from_net(dec("200000"), false, &c).unwrap();
        assert!(with.gross < without.gross);
    }

    #[test]
    fn test_gross_exceeds_net() {
        let c = constants();
        let outcome = solve_gross_from_net(dec("150000"), true, &c).unwrap();
        assert!(outcome.gross > dec("150000"));
    }

    #[test]
    fn test_converges_in_bounded_iterations() {
        let c = constants();
        for net in ["1", "85000", "200000", "1000000", "10000000"] {
            let outcome = solve_gross_from_net(dec(net), true, &c).unwrap();
            assert!(
                outcome.iterations < 100,
                "{} iterations solving for net {}",
                outcome.iterations,
                net
            );
        }
    }

    #[test]
    fn test_zero_net_rejected() {
        let result = solve_gross_from_net(Decimal::ZERO, true, &constants());
        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "net_salary"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_net_rejected() {
        assert!(solve_gross_from_net(dec("-1000"), true, &constants()).is_err());
    }

    #[test]
    fn test_monotonic_over_sample_points() {
        let c = constants();
        let nets = ["50000", "100000", "200000", "500000", "2000000", "5000000"];
        let mut previous = Decimal::ZERO;
        for net in nets {
            let outcome = solve_gross_from_net(dec(net), true, &c).unwrap();
            assert!(
                outcome.gross > previous,
                "gross not increasing at net {}",
                net
            );
            previous = outcome.gross;
        }
    }

    /// High rates shrink net below half of gross: the default 2x bracket
    /// no longer contains the answer and must be widened, not trusted.
    #[test]
    fn test_bracket_widens_under_extreme_rates() {
        let mut c = constants();
        c.employee.pension = dec("0.40");
        c.employee.medical = dec("0.15");

        let outcome = solve_gross_from_net(dec("100000"), false, &c).unwrap();
        let recomputed = net_for_gross(outcome.gross, false, &c);
        assert!((recomputed - dec("100000")).abs() <= Decimal::ONE);
        // Effective withholding is 55% plus income tax, so gross must be
        // well beyond the initial 2x bracket.
        assert!(outcome.gross > dec("200000"));
    }

    #[test]
    fn test_net_for_gross_taxable_floor_at_zero() {
        let c = constants();
        // Gross below the standard deduction: taxable income floors at
        // zero and no income tax is due.
        let net = net_for_gross(dec("100000"), true, &c);
        assert_eq!(net, dec("88000.00"));
    }

    proptest! {
        /// Round-trip: for any positive net salary, the recomputed net of
        /// the solved gross is within the currency tolerance.
        #[test]
        fn prop_round_trip(net in 1_000u64..50_000_000) {
            let c = constants();
            let target = Decimal::from(net);
            let outcome = solve_gross_from_net(target, true, &c).unwrap();
            let recomputed = net_for_gross(outcome.gross, true, &c);
            prop_assert!((recomputed - target).abs() <= Decimal::ONE);
        }

        /// Monotonicity: a strictly larger net requires a strictly larger
        /// gross (targets at least the tolerance apart).
        #[test]
        fn prop_monotonic(net in 1_000u64..10_000_000, step in 10u64..1_000_000) {
            let c = constants();
            let smaller = solve_gross_from_net(Decimal::from(net), true, &c).unwrap();
            let larger = solve_gross_from_net(Decimal::from(net + step), true, &c).unwrap();
            prop_assert!(larger.gross > smaller.gross);
        }

        /// The solver always terminates well inside the iteration budget.
        #[test]
        fn prop_bounded_iterations(net in 1u64..100_000_000) {
            let c = constants();
            let outcome = solve_gross_from_net(Decimal::from(net), true, &c).unwrap();
            prop_assert!(outcome.iterations < 100);
        }
    }
}
