//! Salary breakdown model.
//!
//! This module defines the [`SalaryBreakdown`] record: the complete
//! itemized decomposition of a salary into gross pay, employee
//! withholdings, and employer contributions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Amounts withheld from the employee's gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeWithholdings {
    /// Mandatory pension withholding.
    pub pension: Decimal,
    /// Mandatory medical insurance withholding.
    pub medical: Decimal,
    /// Progressive income tax.
    pub income_tax: Decimal,
    /// Sum of all withholdings.
    pub total: Decimal,
}

/// Amounts the employer pays on top of gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerContributions {
    /// Mandatory professional pension contribution.
    pub professional_pension: Decimal,
    /// Social contribution.
    pub social_contribution: Decimal,
    /// Social tax.
    pub social_tax: Decimal,
    /// Employer medical insurance contribution.
    pub employer_medical: Decimal,
    /// Sum of all contributions.
    pub total: Decimal,
}

/// The complete itemized breakdown of one salary.
///
/// Derived entirely from the gross salary, the constants table, and the
/// deduction flag; immutable once computed. All monetary fields are
/// rounded to two decimal places when the record is assembled - the
/// rounding never feeds back into further arithmetic.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::salary_breakdown;
/// use quote_engine::config::TaxConstants;
/// use rust_decimal::Decimal;
///
/// let constants = TaxConstants::kazakhstan_2026();
/// let breakdown = salary_breakdown(Decimal::from(200_000), true, &constants).unwrap();
/// assert!(breakdown.total_employer_cost >= breakdown.gross_salary);
/// assert!(breakdown.gross_salary >= breakdown.net_salary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The gross salary (tax base) recovered from the target net.
    pub gross_salary: Decimal,
    /// Amounts withheld from the employee.
    pub employee_withholdings: EmployeeWithholdings,
    /// The net salary actually paid out (recomputed from gross).
    pub net_salary: Decimal,
    /// Amounts the employer pays on top.
    pub employer_contributions: EmployerContributions,
    /// Gross salary plus all employer contributions.
    pub total_employer_cost: Decimal,
    /// Whether the standard monthly deduction was applied.
    pub deduction_applied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_breakdown() -> SalaryBreakdown {
        SalaryBreakdown {
            gross_salary: dec("230000.00"),
            employee_withholdings: EmployeeWithholdings {
                pension: dec("23000.00"),
                medical: dec("4600.00"),
                income_tax: dec("7265.00"),
                total: dec("34865.00"),
            },
            net_salary: dec("195135.00"),
            employer_contributions: EmployerContributions {
                professional_pension: dec("8050.00"),
                social_contribution: dec("10350.00"),
                social_tax: dec("12144.00"),
                employer_medical: dec("6900.00"),
                total: dec("37444.00"),
            },
            total_employer_cost: dec("267444.00"),
            deduction_applied: true,
        }
    }

    #[test]
    fn test_breakdown_serialization() {
        let breakdown = sample_breakdown();
        let json = serde_json::to_string(&breakdown).unwrap();

        assert!(json.contains("\"gross_salary\":\"230000.00\""));
        assert!(json.contains("\"employee_withholdings\":{"));
        assert!(json.contains("\"income_tax\":\"7265.00\""));
        assert!(json.contains("\"employer_contributions\":{"));
        assert!(json.contains("\"deduction_applied\":true"));
    }

    #[test]
    fn test_breakdown_deserialization() {
        let json = r#"{
            "gross_salary": "230000.00",
            "employee_withholdings": {
                "pension": "23000.00",
                "medical": "4600.00",
                "income_tax": "7265.00",
                "total": "34865.00"
            },
            "net_salary": "195135.00",
            "employer_contributions": {
                "professional_pension": "8050.00",
                "social_contribution": "10350.00",
                "social_tax": "12144.00",
                "employer_medical": "6900.00",
                "total": "37444.00"
            },
            "total_employer_cost": "267444.00",
            "deduction_applied": true
        }"#;

        let breakdown: SalaryBreakdown = serde_json::from_str(json).unwrap();
        assert_eq!(breakdown, sample_breakdown());
    }

    #[test]
    fn test_breakdown_round_trip() {
        let breakdown = sample_breakdown();
        let json = serde_json::to_string(&breakdown).unwrap();
        let deserialized: SalaryBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, deserialized);
    }
}
