//! In-memory asset inventory store.
//!
//! Holds the reusable equipment records (radios, uniforms, vehicles)
//! that quotes draw allocations from. Records are keyed by a
//! store-assigned numeric id; the purchase totals and monthly
//! amortization figures are derived on read rather than stored, so they
//! can never drift from the underlying price and quantity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};

/// One asset in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// The store-assigned id.
    pub id: i64,
    /// The asset name.
    pub name: String,
    /// The purchase price per unit.
    pub unit_price: Decimal,
    /// The number of units owned.
    pub quantity: u32,
    /// The amortization period in months.
    pub amortization_months: u32,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl AssetRecord {
    /// The total purchase cost of the owned units.
    pub fn total_cost(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// The monthly amortization cost of the owned units.
    pub fn monthly_cost(&self) -> Decimal {
        self.total_cost() / Decimal::from(self.amortization_months)
    }
}

/// A sparse update to an asset record.
///
/// Only the fields that are present change; a patch with no fields at
/// all is rejected rather than silently touching the updated-at stamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPatch {
    /// New name, if changing.
    pub name: Option<String>,
    /// New unit price, if changing.
    pub unit_price: Option<Decimal>,
    /// New quantity, if changing.
    pub quantity: Option<u32>,
    /// New amortization period, if changing.
    pub amortization_months: Option<u32>,
}

impl AssetPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.unit_price.is_none()
            && self.quantity.is_none()
            && self.amortization_months.is_none()
    }
}

/// Aggregate figures over the whole inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSummary {
    /// The number of distinct asset records.
    pub total_items: u32,
    /// The total number of units across all records.
    pub total_quantity: u32,
    /// The total purchase cost of the inventory.
    pub total_investment: Decimal,
    /// The total monthly amortization cost of the inventory.
    pub total_monthly_cost: Decimal,
}

/// The in-memory asset inventory.
///
/// Ids are assigned from a monotonically increasing counter and never
/// reused, even after deletion.
#[derive(Debug, Default)]
pub struct AssetStore {
    records: BTreeMap<i64, AssetRecord>,
    next_id: i64,
}

impl AssetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Adds an asset to the inventory and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the price, quantity, or amortization
    /// period is not strictly positive.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
        amortization_months: u32,
    ) -> EngineResult<AssetRecord> {
        validate_fields(unit_price, quantity, amortization_months)?;

        let now = Utc::now();
        let record = AssetRecord {
            id: self.next_id,
            name: name.into(),
            unit_price,
            quantity,
            amortization_months,
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;
        self.records.insert(record.id, record.clone());
        Ok(record)
    }

    /// Looks up one asset by id.
    ///
    /// # Errors
    ///
    /// Returns `AssetNotFound` when no record has the id.
    pub fn get(&self, id: i64) -> EngineResult<&AssetRecord> {
        self.records
            .get(&id)
            .ok_or(EngineError::AssetNotFound { id })
    }

    /// Lists all assets in id order.
    pub fn list(&self) -> Vec<&AssetRecord> {
        self.records.values().collect()
    }

    /// Applies a sparse update to an asset and returns the new record.
    ///
    /// # Errors
    ///
    /// Returns `AssetNotFound` when no record has the id, and
    /// `InvalidInput` when the patch is empty or a patched value is not
    /// strictly positive.
    pub fn update(&mut self, id: i64, patch: AssetPatch) -> EngineResult<AssetRecord> {
        if patch.is_empty() {
            return Err(EngineError::invalid_input(
                "patch",
                "must change at least one field",
            ));
        }

        let record = self
            .records
            .get_mut(&id)
            .ok_or(EngineError::AssetNotFound { id })?;

        let unit_price = patch.unit_price.unwrap_or(record.unit_price);
        let quantity = patch.quantity.unwrap_or(record.quantity);
        let amortization_months = patch.amortization_months.unwrap_or(record.amortization_months);
        validate_fields(unit_price, quantity, amortization_months)?;

        if let Some(name) = patch.name {
            record.name = name;
        }
        record.unit_price = unit_price;
        record.quantity = quantity;
        record.amortization_months = amortization_months;
        record.updated_at = Utc::now();

        Ok(record.clone())
    }

    /// Removes an asset from the inventory and returns the removed
    /// record.
    ///
    /// # Errors
    ///
    /// Returns `AssetNotFound` when no record has the id.
    pub fn delete(&mut self, id: i64) -> EngineResult<AssetRecord> {
        self.records
            .remove(&id)
            .ok_or(EngineError::AssetNotFound { id })
    }

    /// Sums the monthly amortization cost of the whole inventory.
    pub fn total_monthly_cost(&self) -> Decimal {
        self.records.values().map(AssetRecord::monthly_cost).sum()
    }

    /// Computes the aggregate inventory figures.
    pub fn summary(&self) -> StoreSummary {
        StoreSummary {
            total_items: self.records.len() as u32,
            total_quantity: self.records.values().map(|r| r.quantity).sum(),
            total_investment: self.records.values().map(AssetRecord::total_cost).sum(),
            total_monthly_cost: self.total_monthly_cost(),
        }
    }
}

fn validate_fields(
    unit_price: Decimal,
    quantity: u32,
    amortization_months: u32,
) -> EngineResult<()> {
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
    if amortization_months == 0 {
        return Err(EngineError::invalid_input(
            "amortization_months",
            "must be greater than zero",
        ));
    }
    Ok(())
}
