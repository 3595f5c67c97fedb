//! The breakdown produced by a salary calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;

/// The full breakdown of a monthly salary.
///
/// All amounts are in the same monetary unit as the input. A result built by
/// the engine always satisfies:
///
/// - `net = gross - employee_pension - employee_health - income_tax`
/// - `total_employer_cost = gross + employer_social_deduction
///   + employer_social_tax + employer_health + employer_pension`
///
/// # Example
///
/// ```
/// use salary_engine::calculation::compute_from_gross;
/// use salary_engine::config::RateTable;
/// use salary_engine::models::{Category, LineItem};
/// use rust_decimal::Decimal;
///
/// let table = RateTable::kz_2026();
/// let result = compute_from_gross(&table, Decimal::new(300_000, 0), true, Category::Standard);
/// assert_eq!(result.net, Decimal::new(250_575, 0));
/// assert_eq!(result.amount(LineItem::IncomeTax), Decimal::new(13_425, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Salary before any deduction.
    pub gross: Decimal,
    /// Amount received by the employee.
    pub net: Decimal,
    /// Employee pension contribution.
    pub employee_pension: Decimal,
    /// Employee health insurance contribution.
    pub employee_health: Decimal,
    /// Personal income tax.
    pub income_tax: Decimal,
    /// Employer social deduction.
    pub employer_social_deduction: Decimal,
    /// Employer social tax.
    pub employer_social_tax: Decimal,
    /// Employer health insurance contribution.
    pub employer_health: Decimal,
    /// Employer pension contribution.
    pub employer_pension: Decimal,
    /// Gross salary plus every employer contribution.
    pub total_employer_cost: Decimal,
}

impl TaxResult {
    /// Returns the amount of a single line item.
    pub fn amount(&self, item: LineItem) -> Decimal {
        match item {
            LineItem::EmployeePension => self.employee_pension,
            LineItem::EmployeeHealth => self.employee_health,
            LineItem::IncomeTax => self.income_tax,
            LineItem::EmployerSocialDeduction => self.employer_social_deduction,
            LineItem::EmployerSocialTax => self.employer_social_tax,
            LineItem::EmployerHealth => self.employer_health,
            LineItem::EmployerPension => self.employer_pension,
        }
    }

    /// Sum of everything withheld from the employee.
    pub fn employee_deductions(&self) -> Decimal {
        self.employee_pension + self.employee_health + self.income_tax
    }

    /// Sum of everything the employer pays on top of gross.
    pub fn employer_contributions(&self) -> Decimal {
        self.employer_social_deduction
            + self.employer_social_tax
            + self.employer_health
            + self.employer_pension
    }
}
