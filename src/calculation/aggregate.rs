//! Quote-level cost aggregation.
//!
//! Rolls per-group salary breakdowns up into post costs, adds amortized
//! asset allocations, and applies the markup to produce the final priced
//! quote. Every subtotal in the summary is the exact sum of the line
//! items beneath it, so a reader can trace the final price back to the
//! individual salaries and assets that produced it.

use rust_decimal::Decimal;

use crate::config::TaxConstants;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AssetAllocation, AssetCost, CalculationResult, Post, PostCost, QuoteSummary, StaffGroupCost,
};

use super::amortization::amortize;
use super::breakdown::salary_breakdown;

const PERCENT_DIVISOR: Decimal = Decimal::ONE_HUNDRED;

/// Computes the monthly labor cost of one post.
///
/// Each staff group is priced by solving the full employer cost of one
/// person at the group's net salary (standard deduction applied) and
/// multiplying by the head count. The post total is the exact sum of
/// its group costs.
///
/// # Errors
///
/// Returns `InvalidInput` when the post's schedule or staffing violates
/// its bounds, or when a group's salary is not strictly positive.
pub fn post_cost(post: &Post, constants: &TaxConstants) -> EngineResult<PostCost> {
    validate_post(post, None)?;

    let mut staff = Vec::with_capacity(post.staff_groups.len());
    let mut total_labor_cost = Decimal::ZERO;

    for group in &post.staff_groups {
        let breakdown = salary_breakdown(group.net_salary_per_person, true, constants)?;
        let cost_per_person = breakdown.total_employer_cost;
        let group_cost = cost_per_person * Decimal::from(group.count);
        total_labor_cost += group_cost;

        staff.push(StaffGroupCost {
            position: group.position.clone(),
            count: group.count,
            net_salary_per_person: group.net_salary_per_person,
            gross_salary: breakdown.gross_salary,
            cost_per_person,
            group_cost,
        });
    }

    Ok(PostCost {
        post_number: post.post_number,
        schedule: post.schedule(),
        monthly_hours: post.monthly_hours(),
        staff,
        total_labor_cost,
    })
}

/// Aggregates posts and asset allocations into a priced quote.
///
/// The markup percentage is applied once, to the combined labor and
/// asset subtotal. The hourly rate is the final price divided by the
/// total monthly hours, or zero when there are no hours at all.
///
/// # Errors
///
/// Returns `InvalidInput` when the markup is negative or when any post
/// or asset allocation fails validation. Post-level errors carry the
/// offending post's index in their field path (e.g.,
/// `posts[1].staff_groups[0].count`).
pub fn aggregate_quote(
    posts: &[Post],
    assets: &[AssetAllocation],
    markup_percent: Decimal,
    constants: &TaxConstants,
) -> EngineResult<CalculationResult> {
    if markup_percent < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "markup_percent",
            "must not be negative",
        ));
    }
    for (index, post) in posts.iter().enumerate() {
        validate_post(post, Some(index))?;
    }

    let mut post_costs = Vec::with_capacity(posts.len());
    let mut labor_subtotal = Decimal::ZERO;
    let mut total_monthly_hours: u32 = 0;

    for post in posts {
        let cost = post_cost(post, constants)?;
        labor_subtotal += cost.total_labor_cost;
        total_monthly_hours += cost.monthly_hours;
        post_costs.push(cost);
    }

    let mut asset_costs = Vec::with_capacity(assets.len());
    let mut asset_subtotal = Decimal::ZERO;

    for allocation in assets {
        let figures = amortize(
            allocation.unit_price,
            allocation.quantity,
            allocation.amortization_months,
        )?;
        let monthly_cost = figures.monthly_cost.round_dp(2);
        asset_subtotal += monthly_cost;

        asset_costs.push(AssetCost {
            name: allocation.name.clone(),
            unit_price: allocation.unit_price,
            quantity: allocation.quantity,
            total_cost: figures.total_cost,
            amortization_months: allocation.amortization_months,
            monthly_cost,
        });
    }

    let cost_subtotal = labor_subtotal + asset_subtotal;
    let markup_amount = cost_subtotal * markup_percent / PERCENT_DIVISOR;
    let final_price = cost_subtotal + markup_amount;
    let hourly_rate = if total_monthly_hours == 0 {
        Decimal::ZERO
    } else {
        (final_price / Decimal::from(total_monthly_hours)).round_dp(2)
    };

    Ok(CalculationResult {
        posts: post_costs,
        assets: asset_costs,
        summary: QuoteSummary {
            total_posts: posts.len() as u32,
            total_monthly_hours,
            labor_subtotal,
            asset_subtotal,
            cost_subtotal,
            markup_percent,
            markup_amount,
            final_price,
            hourly_rate,
        },
    })
}

/// Re-checks a post's construction invariants, prefixing error fields
/// with the post's index when one is given.
///
/// Deserialized posts bypass [`Post::new`], so the aggregation layer
/// cannot assume the bounds hold.
fn validate_post(post: &Post, index: Option<usize>) -> EngineResult<()> {
    let prefix = |field: &str| match index {
        Some(i) => format!("posts[{}].{}", i, field),
        None => field.to_string(),
    };

    if post.post_number == 0 {
        return Err(EngineError::invalid_input(
            prefix("post_number"),
            "must be greater than zero",
        ));
    }
    if post.hours_per_day == 0 || post.hours_per_day > 24 {
        return Err(EngineError::invalid_input(
            prefix("hours_per_day"),
            "must be between 1 and 24",
        ));
    }
    if post.days_per_week == 0 || post.days_per_week > 7 {
        return Err(EngineError::invalid_input(
            prefix("days_per_week"),
            "must be between 1 and 7",
        ));
    }
    if post.staff_groups.is_empty() {
        return Err(EngineError::invalid_input(
            prefix("staff_groups"),
            "must contain at least one staff group",
        ));
    }
    for (group_index, group) in post.staff_groups.iter().enumerate() {
        if group.count == 0 {
            return Err(EngineError::invalid_input(
                prefix(&format!("staff_groups[{}].count", group_index)),
                "must be greater than zero",
            ));
        }
        if group.net_salary_per_person <= Decimal::ZERO {
            return Err(EngineError::invalid_input(
                prefix(&format!(
                    "staff_groups[{}].net_salary_per_person",
                    group_index
                )),
                "must be greater than zero",
            ));
        }
    }
    Ok(())
}
