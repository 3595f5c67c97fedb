//! Direction dispatch over an injected rate table.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::{CalculationInput, Category, Direction, TaxResult};

use super::forward::compute_from_gross;
use super::inverse::{SolverReport, solve_from_net};

/// A calculation result together with solver diagnostics, when the inverse
/// solver was involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// The salary breakdown.
    pub result: TaxResult,
    /// Present for [`Direction::Net`] inputs only.
    pub solver: Option<SolverReport>,
}

/// Salary calculator bound to one rate table.
///
/// The table is shared, never mutated, so a `Calculator` can be cloned freely
/// and used from any number of threads. Swapping tax years means building a
/// new calculator over a different table.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::Calculator;
/// use salary_engine::config::RateTable;
/// use salary_engine::models::{CalculationInput, Category, Direction};
/// use rust_decimal::Decimal;
///
/// let calculator = Calculator::new(RateTable::kz_2026());
/// let result = calculator.calculate(&CalculationInput {
///     amount: Decimal::new(300_000, 0),
///     direction: Direction::Gross,
///     include_standard_deduction: true,
///     category: Category::Standard,
/// });
/// assert_eq!(result.net, Decimal::new(250_575, 0));
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    table: Arc<RateTable>,
}

impl Calculator {
    /// Creates a calculator that owns `table`.
    pub fn new(table: RateTable) -> Self {
        Self::from_shared(Arc::new(table))
    }

    /// Creates a calculator over an already-shared table.
    pub fn from_shared(table: Arc<RateTable>) -> Self {
        Self { table }
    }

    /// Returns the rate table this calculator uses.
    pub fn rate_table(&self) -> &RateTable {
        &self.table
    }

    /// Calculates the breakdown for `input`.
    ///
    /// `input.amount` must be non-negative; see [`CalculationInput::normalized`].
    pub fn calculate(&self, input: &CalculationInput) -> TaxResult {
        self.evaluate(input).result
    }

    /// Calculates the breakdown for `input`, keeping solver diagnostics.
    pub fn evaluate(&self, input: &CalculationInput) -> Evaluation {
        match input.direction {
            Direction::Gross => Evaluation {
                result: self.from_gross(
                    input.amount,
                    input.include_standard_deduction,
                    input.category,
                ),
                solver: None,
            },
            Direction::Net => {
                let report = solve_from_net(
                    &self.table,
                    input.amount,
                    input.include_standard_deduction,
                    input.category,
                );
                Evaluation {
                    result: report.result,
                    solver: Some(report),
                }
            }
        }
    }

    /// Computes the breakdown of a known gross salary.
    pub fn from_gross(&self, gross: Decimal, include_deduction: bool, category: Category) -> TaxResult {
        compute_from_gross(&self.table, gross, include_deduction, category)
    }

    /// Computes the breakdown for a desired take-home amount.
    pub fn from_net(&self, target_net: Decimal, include_deduction: bool, category: Category) -> TaxResult {
        solve_from_net(&self.table, target_net, include_deduction, category).result
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(RateTable::kz_2026())
    }
}
