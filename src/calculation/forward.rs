//! Gross-to-net calculation.
//!
//! This module holds the payroll formulas. Every line item is derived from the
//! gross salary and the quantities computed before it, so the steps below run
//! in a fixed order.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::{Category, LineItem, TaxResult};

use super::category_policy::effective_rate;

/// Computes the full breakdown of a known gross salary.
///
/// `gross` must lie in `0..=MAX_AMOUNT`; far larger values overflow the
/// decimal arithmetic and panic. The function is deterministic: identical
/// arguments always produce identical results.
///
/// [`MAX_AMOUNT`]: crate::models::MAX_AMOUNT
///
/// # Arguments
///
/// * `table` - The rate table in force
/// * `gross` - The gross monthly salary
/// * `include_deduction` - Whether the standard personal deduction applies
/// * `category` - The employee's beneficiary category
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_from_gross;
/// use salary_engine::config::RateTable;
/// use salary_engine::models::Category;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::kz_2026();
/// let result = compute_from_gross(&table, Decimal::new(300_000, 0), true, Category::Standard);
///
/// assert_eq!(result.employee_pension, Decimal::new(30_000, 0));
/// assert_eq!(result.employee_health, Decimal::new(6_000, 0));
/// assert_eq!(result.income_tax, Decimal::new(13_425, 0));
/// assert_eq!(result.net, Decimal::new(250_575, 0));
/// ```
pub fn compute_from_gross(
    table: &RateTable,
    gross: Decimal,
    include_deduction: bool,
    category: Category,
) -> TaxResult {
    let limits = &table.limits;
    let rate = |item| effective_rate(item, category, table);

    let employee_pension = gross.min(limits.pension_cap) * rate(LineItem::EmployeePension);
    let employee_health = gross.min(limits.employee_health_cap) * rate(LineItem::EmployeeHealth);

    // A zero-rate category gains nothing from the deduction.
    let income_tax_rate = rate(LineItem::IncomeTax);
    let mut taxable = gross - employee_pension - employee_health;
    if include_deduction && income_tax_rate > Decimal::ZERO {
        taxable -= table.standard_deduction();
    }
    let income_tax = taxable.max(Decimal::ZERO) * income_tax_rate;

    let net = gross - employee_pension - employee_health - income_tax;

    let social_deduction_rate = rate(LineItem::EmployerSocialDeduction);
    let social_deduction_base = if social_deduction_rate.is_zero() || gross <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        (gross - employee_pension)
            .max(limits.social_deduction_floor)
            .min(limits.social_deduction_ceiling)
    };
    let employer_social_deduction = social_deduction_base * social_deduction_rate;

    // Social tax is credited by the social deduction already paid.
    let social_tax_base = (gross - employee_pension).max(Decimal::ZERO);
    let social_tax_raw = social_tax_base * rate(LineItem::EmployerSocialTax);
    let employer_social_tax = (social_tax_raw - employer_social_deduction).max(Decimal::ZERO);

    let employer_health = gross.min(limits.employer_health_cap) * rate(LineItem::EmployerHealth);
    let employer_pension = gross.min(limits.pension_cap) * rate(LineItem::EmployerPension);

    let total_employer_cost = gross
        + employer_social_deduction
        + employer_social_tax
        + employer_health
        + employer_pension;

    TaxResult {
        gross,
        net,
        employee_pension,
        employee_health,
        income_tax,
        employer_social_deduction,
        employer_social_tax,
        employer_health,
        employer_pension,
        total_employer_cost,
    }
}
