//! Employee withholding calculation.

use rust_decimal::Decimal;

use crate::config::TaxConstants;

/// The pension and medical amounts withheld from a gross salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithholdingAmounts {
    /// Mandatory pension withholding.
    pub pension: Decimal,
    /// Mandatory medical insurance withholding.
    pub medical: Decimal,
}

impl WithholdingAmounts {
    /// The sum of both withholdings.
    pub fn total(&self) -> Decimal {
        self.pension + self.medical
    }
}

/// Computes the employee withholdings for a gross salary.
///
/// Both amounts are flat fractions of gross.
pub fn employee_withholdings(gross: Decimal, constants: &TaxConstants) -> WithholdingAmounts {
    WithholdingAmounts {
        pension: gross * constants.employee.pension,
        medical: gross * constants.employee.medical,
    }
}
