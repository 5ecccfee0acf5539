//! Calculation result models for the quote engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs of a quote calculation: per-post
//! labor costs with per-group detail, per-asset amortization costs, and
//! the priced summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The priced cost of one staff group on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffGroupCost {
    /// The position name.
    pub position: String,
    /// The number of people in the group.
    pub count: u32,
    /// The take-home salary per person the group was priced from.
    pub net_salary_per_person: Decimal,
    /// The gross salary recovered for one person.
    pub gross_salary: Decimal,
    /// The full employer cost of one person.
    pub cost_per_person: Decimal,
    /// The full employer cost of the group (cost_per_person x count).
    pub group_cost: Decimal,
}

/// The priced cost of one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCost {
    /// The post number.
    pub post_number: u32,
    /// The duty schedule in "hours/days" notation (e.g., "12/7").
    pub schedule: String,
    /// The post's duty hours per month.
    pub monthly_hours: u32,
    /// Per-group cost detail.
    pub staff: Vec<StaffGroupCost>,
    /// The post's total monthly labor cost (sum of group costs).
    pub total_labor_cost: Decimal,
}

/// The amortized monthly cost of one asset allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCost {
    /// The asset name.
    pub name: String,
    /// The purchase price per unit.
    pub unit_price: Decimal,
    /// The number of units allocated.
    pub quantity: u32,
    /// The total purchase cost of the allocation (unit_price x quantity).
    pub total_cost: Decimal,
    /// The amortization period in months.
    pub amortization_months: u32,
    /// The allocation's monthly amortization cost.
    pub monthly_cost: Decimal,
}

/// The priced summary of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSummary {
    /// The number of posts in the quote.
    pub total_posts: u32,
    /// The sum of all posts' monthly hours.
    pub total_monthly_hours: u32,
    /// The sum of all posts' labor costs.
    pub labor_subtotal: Decimal,
    /// The sum of all asset allocations' monthly costs.
    pub asset_subtotal: Decimal,
    /// labor_subtotal + asset_subtotal.
    pub cost_subtotal: Decimal,
    /// The markup percentage applied.
    pub markup_percent: Decimal,
    /// cost_subtotal x markup_percent / 100.
    pub markup_amount: Decimal,
    /// cost_subtotal + markup_amount.
    pub final_price: Decimal,
    /// final_price / total_monthly_hours, or 0 when there are no hours.
    pub hourly_rate: Decimal,
}

/// The complete result of a quote calculation.
///
/// The per-post and per-asset breakdowns sum exactly to the reported
/// subtotals; this traceability is a hard contract for auditability of
/// the quote. Built fresh per invocation and never persisted by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Per-post labor cost breakdown.
    pub posts: Vec<PostCost>,
    /// Per-asset amortization cost breakdown.
    pub assets: Vec<AssetCost>,
    /// The priced summary.
    pub summary: QuoteSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> CalculationResult {
        CalculationResult {
            posts: vec![PostCost {
                post_number: 1,
                schedule: "12/7".to_string(),
                monthly_hours: 365,
                staff: vec![StaffGroupCost {
                    position: "guard".to_string(),
                    count: 3,
                    net_salary_per_person: dec("150000"),
                    gross_salary: dec("171000.00"),
                    cost_per_person: dec("198000.00"),
                    group_cost: dec("594000.00"),
                }],
                total_labor_cost: dec("594000.00"),
            }],
            assets: vec![AssetCost {
                name: "radio".to_string(),
                unit_price: dec("50000"),
                quantity: 3,
                total_cost: dec("150000"),
                amortization_months: 36,
                monthly_cost: dec("4166.67"),
            }],
            summary: QuoteSummary {
                total_posts: 1,
                total_monthly_hours: 365,
                labor_subtotal: dec("594000.00"),
                asset_subtotal: dec("4166.67"),
                cost_subtotal: dec("598166.67"),
                markup_percent: dec("20"),
                markup_amount: dec("119633.334"),
                final_price: dec("717800.004"),
                hourly_rate: dec("1966.58"),
            },
        }
    }

    #[test]
    fn test_subtotals_trace_to_breakdowns() {
        let result = sample_result();

        let labor: Decimal = result.posts.iter().map(|p| p.total_labor_cost).sum();
        assert_eq!(labor, result.summary.labor_subtotal);

        let assets: Decimal = result.assets.iter().map(|a| a.monthly_cost).sum();
        assert_eq!(assets, result.summary.asset_subtotal);

        assert_eq!(labor + assets, result.summary.cost_subtotal);
    }

    #[test]
    fn test_group_costs_trace_to_post_total() {
        let result = sample_result();
        let post = &result.posts[0];
        let groups: Decimal = post.staff.iter().map(|g| g.group_cost).sum();
        assert_eq!(groups, post.total_labor_cost);
    }

    #[test]
    fn test_result_serialization() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("\"posts\":["));
        assert!(json.contains("\"schedule\":\"12/7\""));
        assert!(json.contains("\"monthly_hours\":365"));
        assert!(json.contains("\"assets\":["));
        assert!(json.contains("\"summary\":{"));
        assert!(json.contains("\"markup_percent\":\"20\""));
    }

    #[test]
    fn test_result_deserialization_round_trip() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
