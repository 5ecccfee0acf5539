//! Amortized asset allocation model.
//!
//! An [`AssetAllocation`] is the slice of an asset included in one quote:
//! its unit price, amortization period, and the quantity allocated to the
//! calculation. The allocated quantity may differ from the quantity an
//! asset record owns (partial allocation).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An amortized asset allocation included in a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAllocation {
    /// The asset name (e.g., "radio", "uniform set").
    pub name: String,
    /// The purchase price per unit.
    pub unit_price: Decimal,
    /// The amortization period in months.
    pub amortization_months: u32,
    /// The number of units allocated to this calculation.
    pub quantity: u32,
}

impl AssetAllocation {
    /// Creates an allocation, validating that price, quantity, and
    /// duration are strictly positive.
    pub fn new(
        name: impl Into<String>,
        unit_price: Decimal,
        amortization_months: u32,
        quantity: u32,
    ) -> EngineResult<Self> {
        if unit_price <= Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "unit_price",
                "must be greater than zero",
            ));
        }
        if amortization_months == 0 {
            return Err(EngineError::invalid_input(
                "amortization_months",
                "must be greater than zero",
            ));
        }
        if quantity == 0 {
            return Err(EngineError::invalid_input(
                "quantity",
                "must be greater than zero",
            ));
        }
        Ok(Self {
            name: name.into(),
            unit_price,
            amortization_months,
            quantity,
        })
    }
}
