//! Beneficiary category exemptions.
//!
//! Each (line item, category) pair either pays the nominal rate from the rate
//! table or is exempt. The matrix below is the single source of that policy.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::{Category, LineItem};

/// How a category is treated for one line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    /// The nominal rate from the rate table applies.
    Nominal,
    /// The effective rate is zero.
    Exempt,
}

use Treatment::{Exempt, Nominal};

/// Rows follow [`LineItem::ALL`], columns follow [`Category::ALL`]:
/// standard, pensioner, student, disabled_1_2, disabled_3.
const POLICY: [[Treatment; 5]; 7] = [
    // employee pension
    [Nominal, Exempt, Nominal, Exempt, Nominal],
    // employee health
    [Nominal, Exempt, Exempt, Exempt, Exempt],
    // income tax
    [Nominal, Nominal, Nominal, Exempt, Exempt],
    // employer social deduction
    [Nominal, Exempt, Nominal, Exempt, Nominal],
    // employer social tax
    [Nominal, Nominal, Nominal, Exempt, Nominal],
    // employer health
    [Nominal, Exempt, Exempt, Exempt, Exempt],
    // employer pension
    [Nominal, Exempt, Nominal, Nominal, Nominal],
];

/// Returns how `category` is treated for `item`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{treatment, Treatment};
/// use salary_engine::models::{Category, LineItem};
///
/// assert_eq!(treatment(LineItem::IncomeTax, Category::Disabled3), Treatment::Exempt);
/// assert_eq!(treatment(LineItem::EmployerPension, Category::Disabled3), Treatment::Nominal);
/// ```
pub fn treatment(item: LineItem, category: Category) -> Treatment {
    POLICY[item.index()][category.index()]
}

/// Returns the rate actually charged for `item` under `category`.
///
/// This is the nominal rate from `table`, or zero where the category is exempt.
pub fn effective_rate(item: LineItem, category: Category, table: &RateTable) -> Decimal {
    match treatment(item, category) {
        Nominal => table.rates.nominal(item),
        Exempt => Decimal::ZERO,
    }
}
