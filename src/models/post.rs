//! Duty post and staff group models.
//!
//! A post is one guarded location with a duty schedule (hours per day,
//! days per week) and one or more staff groups covering it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::monthly_hours;
use crate::error::{EngineError, EngineResult};

/// A group of staff sharing one position and salary on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffGroup {
    /// The position name (e.g., "day guard").
    pub position: String,
    /// The number of people in the group.
    pub count: u32,
    /// The desired take-home salary per person.
    pub net_salary_per_person: Decimal,
}

impl StaffGroup {
    /// Creates a staff group, validating that the count and salary are
    /// strictly positive.
    pub fn new(
        position: impl Into<String>,
        count: u32,
        net_salary_per_person: Decimal,
    ) -> EngineResult<Self> {
        if count == 0 {
            return Err(EngineError::invalid_input(
                "count",
                "must be greater than zero",
            ));
        }
        if net_salary_per_person <= Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "net_salary_per_person",
                "must be greater than zero",
            ));
        }
        Ok(Self {
            position: position.into(),
            count,
            net_salary_per_person,
        })
    }
}

/// One guarded post with its duty schedule and staffing.
///
/// # Example
///
/// ```
/// use quote_engine::models::{Post, StaffGroup};
/// use rust_decimal::Decimal;
///
/// let group = StaffGroup::new("guard", 3, Decimal::from(150_000)).unwrap();
/// let post = Post::new(1, 12, 7, vec![group]).unwrap();
/// assert_eq!(post.monthly_hours(), 365);
/// assert_eq!(post.schedule(), "12/7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// The post number (1-based, used in reports).
    pub post_number: u32,
    /// Duty hours per day (1..=24).
    pub hours_per_day: u32,
    /// Duty days per week (1..=7).
    pub days_per_week: u32,
    /// The staff groups covering this post (non-empty).
    pub staff_groups: Vec<StaffGroup>,
}

impl Post {
    /// Creates a post, validating the schedule bounds and that at least
    /// one staff group is present.
    ///
    /// A zero-hours or zero-days schedule is rejected rather than
    /// silently producing a zero-hour post.
    pub fn new(
        post_number: u32,
        hours_per_day: u32,
        days_per_week: u32,
        staff_groups: Vec<StaffGroup>,
    ) -> EngineResult<Self> {
        if post_number == 0 {
            return Err(EngineError::invalid_input(
                "post_number",
                "must be greater than zero",
            ));
        }
        if hours_per_day == 0 || hours_per_day > 24 {
            return Err(EngineError::invalid_input(
                "hours_per_day",
                "must be between 1 and 24",
            ));
        }
        if days_per_week == 0 || days_per_week > 7 {
            return Err(EngineError::invalid_input(
                "days_per_week",
                "must be between 1 and 7",
            ));
        }
        if staff_groups.is_empty() {
            return Err(EngineError::invalid_input(
                "staff_groups",
                "must contain at least one staff group",
            ));
        }
        Ok(Self {
            post_number,
            hours_per_day,
            days_per_week,
            staff_groups,
        })
    }

    /// The post's duty hours per month, derived from its schedule.
    pub fn monthly_hours(&self) -> u32 {
        monthly_hours(self.hours_per_day, self.days_per_week)
    }

    /// The schedule in "hours/days" notation (e.g., "12/7").
    pub fn schedule(&self) -> String {
        format!("{}/{}", self.hours_per_day, self.days_per_week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn guard_group() -> StaffGroup {
        StaffGroup::new("guard", 3, dec("150000")).unwrap()
    }

    #[test]
    fn test_staff_group_valid() {
        let group = StaffGroup::new("day guard", 2, dec("180000")).unwrap();
        assert_eq!(group.position, "day guard");
        assert_eq!(group.count, 2);
        assert_eq!(group.net_salary_per_person, dec("180000"));
    }

    #[test]
    fn test_staff_group_zero_count_rejected() {
        let result = StaffGroup::new("guard", 0, dec("150000"));
        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "count"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_staff_group_zero_salary_rejected() {
        let result = StaffGroup::new("guard", 1, Decimal::ZERO);
        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => {
                assert_eq!(field, "net_salary_per_person");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_staff_group_negative_salary_rejected() {
        assert!(StaffGroup::new("guard", 1, dec("-1")).is_err());
    }

    #[test]
    fn test_post_valid_12_7() {
        let post = Post::new(1, 12, 7, vec![guard_group()]).unwrap();
        assert_eq!(post.monthly_hours(), 365);
        assert_eq!(post.schedule(), "12/7");
    }

    #[test]
    fn test_post_24_7_monthly_hours() {
        let post = Post::new(1, 24, 7, vec![guard_group()]).unwrap();
        // 30.4 x 24 = 729.6, rounded up
        assert_eq!(post.monthly_hours(), 730);
    }

    #[test]
    fn test_post_zero_hours_rejected() {
        let result = Post::new(1, 0, 7, vec![guard_group()]);
        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "hours_per_day"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_post_zero_days_rejected() {
        let result = Post::new(1, 12, 0, vec![guard_group()]);
        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "days_per_week"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_post_hours_above_24_rejected() {
        assert!(Post::new(1, 25, 7, vec![guard_group()]).is_err());
    }

    #[test]
    fn test_post_days_above_7_rejected() {
        assert!(Post::new(1, 12, 8, vec![guard_group()]).is_err());
    }

    #[test]
    fn test_post_empty_staff_rejected() {
        let result = Post::new(1, 12, 7, vec![]);
        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "staff_groups"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_post_zero_number_rejected() {
        assert!(Post::new(0, 12, 7, vec![guard_group()]).is_err());
    }

    #[test]
    fn test_post_serialization_round_trip() {
        let post = Post::new(2, 8, 5, vec![guard_group()]).unwrap();
        let json = serde_json::to_string(&post).unwrap();
        let deserialized: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(post, deserialized);
    }
}
