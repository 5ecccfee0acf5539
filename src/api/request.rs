//! Request types for the quote engine API.
//!
//! This module defines the JSON request structures for the calculation
//! and asset inventory endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Post, StaffGroup};
use crate::storage::AssetPatch;

/// Request body for the `/breakdown` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownRequest {
    /// The desired take-home salary.
    pub net_salary: Decimal,
    /// Whether to apply the standard monthly deduction.
    #[serde(default = "default_true")]
    pub deduction_applied: bool,
}

/// Staff group information in a post request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffGroupRequest {
    /// The position name.
    pub position: String,
    /// The number of people in the group.
    pub count: u32,
    /// The desired take-home salary per person.
    pub net_salary_per_person: Decimal,
}

/// Post information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRequest {
    /// The post number.
    pub post_number: u32,
    /// Duty hours per day.
    pub hours_per_day: u32,
    /// Duty days per week.
    pub days_per_week: u32,
    /// The staff groups covering the post.
    pub staff_groups: Vec<StaffGroupRequest>,
}

/// A reference to an inventory asset included in a quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSelectionRequest {
    /// The id of the asset in the inventory.
    pub asset_id: i64,
    /// The number of units to allocate to the quote.
    pub quantity: u32,
}

/// Request body for the `/quote` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The posts to price.
    pub posts: Vec<PostRequest>,
    /// Asset allocations drawn from the inventory.
    #[serde(default)]
    pub assets: Vec<AssetSelectionRequest>,
    /// The markup percentage to apply.
    #[serde(default = "default_markup")]
    pub markup_percent: Decimal,
}

/// Request body for creating an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssetRequest {
    /// The asset name.
    pub name: String,
    /// The purchase price per unit.
    pub unit_price: Decimal,
    /// The number of units owned.
    pub quantity: u32,
    /// The amortization period in months.
    pub amortization_months: u32,
}

/// Request body for a partial asset update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAssetRequest {
    /// New name, if changing.
    #[serde(default)]
    pub name: Option<String>,
    /// New unit price, if changing.
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    /// New quantity, if changing.
    #[serde(default)]
    pub quantity: Option<u32>,
    /// New amortization period, if changing.
    #[serde(default)]
    pub amortization_months: Option<u32>,
}

fn default_true() -> bool {
    true
}

fn default_markup() -> Decimal {
    Decimal::from(20)
}

impl From<StaffGroupRequest> for StaffGroup {
    fn from(req: StaffGroupRequest) -> Self {
        StaffGroup {
            position: req.position,
            count: req.count,
            net_salary_per_person: req.net_salary_per_person,
        }
    }
}

impl From<PostRequest> for Post {
    fn from(req: PostRequest) -> Self {
        Post {
            post_number: req.post_number,
            hours_per_day: req.hours_per_day,
            days_per_week: req.days_per_week,
            staff_groups: req.staff_groups.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UpdateAssetRequest> for AssetPatch {
    fn from(req: UpdateAssetRequest) -> Self {
        AssetPatch {
            name: req.name,
            unit_price: req.unit_price,
            quantity: req.quantity,
            amortization_months: req.amortization_months,
        }
    }
}
