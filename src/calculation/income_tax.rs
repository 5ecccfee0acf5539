//! Progressive income-tax calculation.
//!
//! Income up to the monthly threshold is taxed at the low marginal rate;
//! the excess above it at the high rate. The resulting function is
//! continuous, piecewise-linear, and strictly increasing for positive
//! income, which is what lets the gross-from-net solver bisect over it.

use rust_decimal::Decimal;

use crate::config::TaxConstants;

/// Computes the progressive income tax on a monthly taxable income.
///
/// Returns zero for non-positive income. Otherwise applies the low rate
/// up to the monthly threshold and the high rate on the excess.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::progressive_income_tax;
/// use quote_engine::config::TaxConstants;
/// use rust_decimal::Decimal;
///
/// let constants = TaxConstants::kazakhstan_2026();
/// let tax = progressive_income_tax(Decimal::from(100_000), &constants);
/// assert_eq!(tax, Decimal::from(10_000));
/// ```
pub fn progressive_income_tax(taxable_monthly_income: Decimal, constants: &TaxConstants) -> Decimal {
    if taxable_monthly_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let threshold = constants.monthly_income_tax_threshold();
    let schedule = &constants.income_tax;

    if taxable_monthly_income <= threshold {
        taxable_monthly_income * schedule.low_rate
    } else {
        threshold * schedule.low_rate
            + (taxable_monthly_income - threshold) * schedule.high_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn constants() -> TaxConstants {
        TaxConstants::kazakhstan_2026()
    }

    #[test]
    fn test_zero_income_is_untaxed() {
        assert_eq!(progressive_income_tax(Decimal::ZERO, &constants()), Decimal::ZERO);
    }

    #[test]
    fn test_negative_income_is_untaxed() {
        assert_eq!(progressive_income_tax(dec("-500"), &constants()), Decimal::ZERO);
    }

    #[test]
    fn test_income_below_threshold_taxed_at_low_rate() {
        // 100,000 is far below the 3,063,541.67 monthly threshold
        let tax = progressive_income_tax(dec("100000"), &constants());
        assert_eq!(tax, dec("10000.00"));
    }

    #[test]
    fn test_income_at_threshold_taxed_at_low_rate() {
        let c = constants();
        let threshold = c.monthly_income_tax_threshold();
        let tax = progressive_income_tax(threshold, &c);
        assert_eq!(tax, threshold * dec("0.10"));
    }

    #[test]
    fn test_income_above_threshold_split_across_rates() {
        let c = constants();
        let threshold = c.monthly_income_tax_threshold();
        let income = threshold + dec("1000000");

        let tax = progressive_income_tax(income, &c);
        let expected = threshold * dec("0.10") + dec("1000000") * dec("0.15");
        assert_eq!(tax, expected);
    }

    #[test]
    fn test_continuity_at_threshold() {
        let c = constants();
        let threshold = c.monthly_income_tax_threshold();
        let just_below = progressive_income_tax(threshold - dec("0.01"), &c);
        let just_above = progressive_income_tax(threshold + dec("0.01"), &c);
        let at = progressive_income_tax(threshold, &c);

        // One cent either side moves the tax by at most the high rate on a cent
        assert!(at - just_below <= dec("0.0015"));
        assert!(just_above - at <= dec("0.0015"));
    }

    #[test]
    fn test_strictly_increasing() {
        let c = constants();
        let incomes = ["1", "50000", "500000", "3063541", "3063542", "5000000"];
        let mut previous = Decimal::MIN;
        for income in incomes {
            let tax = progressive_income_tax(dec(income), &c);
            assert!(tax > previous, "tax not increasing at income {}", income);
            previous = tax;
        }
    }
}
