//! The request-scoped input to a salary calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// Largest amount accepted from callers, 10^15.
///
/// Every intermediate of the calculation stays far inside the range of
/// [`Decimal`] below this bound.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Which side of the calculation the supplied amount represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The amount is the gross salary; compute net.
    #[default]
    Gross,
    /// The amount is the desired take-home; recover gross.
    Net,
}

/// A single calculation request.
///
/// The engine expects `amount` to lie in `0..=MAX_AMOUNT`. Callers that
/// accept untrusted values should reject amounts above [`MAX_AMOUNT`] and
/// pass the rest through [`CalculationInput::normalized`] first.
///
/// # Example
///
/// ```
/// use salary_engine::models::{CalculationInput, Category, Direction};
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     amount: Decimal::new(300_000, 0),
///     direction: Direction::Gross,
///     include_standard_deduction: true,
///     category: Category::Standard,
/// };
/// assert_eq!(input.normalized(), input);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The monetary amount, gross or net depending on `direction`.
    pub amount: Decimal,
    /// Whether `amount` is a gross salary or a net target.
    pub direction: Direction,
    /// Whether the standard personal deduction reduces the income tax base.
    pub include_standard_deduction: bool,
    /// The beneficiary category of the employee.
    pub category: Category,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            amount: Decimal::ZERO,
            direction: Direction::Gross,
            include_standard_deduction: true,
            category: Category::Standard,
        }
    }
}

impl CalculationInput {
    /// Returns a copy with a negative amount coerced to zero.
    pub fn normalized(&self) -> Self {
        Self {
            amount: self.amount.max(Decimal::ZERO),
            ..*self
        }
    }
}
