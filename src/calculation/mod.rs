//! Compensation and cost calculation modules.
//!
//! The pipeline runs bottom-up: withholdings, income tax, and employer
//! contributions price one gross salary; the gross solver inverts that
//! pricing to recover gross from a desired net; the breakdown assembles
//! the itemized record; and the aggregator rolls posts and amortized
//! assets up into a priced quote.

mod aggregate;
mod amortization;
mod breakdown;
mod contributions;
mod gross_solver;
mod income_tax;
mod monthly_hours;
mod withholdings;

pub use aggregate::{aggregate_quote, post_cost};
pub use amortization::{amortize, AmortizationFigures};
pub use breakdown::salary_breakdown;
pub use contributions::{employer_contributions, ContributionAmounts};
pub use gross_solver::{net_for_gross, solve_gross_from_net, GrossSolveOutcome};
pub use income_tax::progressive_income_tax;
pub use monthly_hours::monthly_hours;
pub use withholdings::{employee_withholdings, WithholdingAmounts};
