//! Straight-line asset amortization.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// The purchase and monthly figures for one amortized allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmortizationFigures {
    /// The total purchase cost (unit price x quantity).
    pub total_cost: Decimal,
    /// The straight-line monthly cost (total cost / amortization months).
    pub monthly_cost: Decimal,
}

/// Amortizes an asset purchase over its useful life.
///
/// # Errors
///
/// Returns `InvalidInput` when the unit price, quantity, or amortization
/// period is not strictly positive.
pub fn amortize(unit_price: Decimal, quantity: u32, months: u32) -> EngineResult<AmortizationFigures> {
    if unit_price <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "unit_price",
            "must be greater than zero",
        ));
    }
    if quantity == 0 {
        return Err(EngineError::invalid_input(
            "quantity",
            "must be greater than zero",
        ));
    }
    if months == 0 {
        return Err(EngineError::invalid_input(
            "amortization_months",
            "must be greater than zero",
        ));
    }

    let total_cost = unit_price * Decimal::from(quantity);
    Ok(AmortizationFigures {
        total_cost,
        monthly_cost: total_cost / Decimal::from(months),
    })
}
