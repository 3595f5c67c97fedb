//! Net-to-gross calculation.
//!
//! There is no closed-form inverse across every category and cap combination,
//! so the gross salary is found by bisection. Net is non-decreasing in gross,
//! which is all bisection needs.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::RateTable;
use crate::models::{Category, TaxResult};

use super::forward::compute_from_gross;

/// Maximum number of bisection steps.
pub const MAX_ITERATIONS: u32 = 50;

/// Accepted distance between the achieved and the target net, in monetary units.
pub const NET_TOLERANCE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Factor applied to the upper bound while it is still too low.
pub const BRACKET_GROWTH: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Upper bound expansion stops once it passes this amount.
pub const BRACKET_CEILING: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

const TWO: Decimal = Decimal::TWO;

/// Outcome of a net-to-gross search, with solver diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverReport {
    /// The breakdown for the gross salary that was found.
    pub result: TaxResult,
    /// Number of bisection steps taken.
    pub iterations: u32,
    /// Whether `result.net` is within [`NET_TOLERANCE`] of the target.
    pub converged: bool,
    /// Whether the upper bound hit [`BRACKET_CEILING`] during expansion.
    pub bracket_capped: bool,
}

/// Finds the gross salary whose net is closest to `target_net`.
///
/// `target_net` must lie in `0..=MAX_AMOUNT`; far larger targets overflow the
/// bracket arithmetic and panic. Within that range the search never fails: if
/// the iteration budget runs out before the tolerance is met, the best
/// approximation seen is returned with `converged` set to false.
///
/// [`MAX_AMOUNT`]: crate::models::MAX_AMOUNT
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::solve_from_net;
/// use salary_engine::config::RateTable;
/// use salary_engine::models::Category;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::kz_2026();
/// let report = solve_from_net(&table, Decimal::new(250_575, 0), true, Category::Standard);
///
/// assert!(report.converged);
/// assert!((report.result.gross - Decimal::new(300_000, 0)).abs() < Decimal::ONE);
/// ```
pub fn solve_from_net(
    table: &RateTable,
    target_net: Decimal,
    include_deduction: bool,
    category: Category,
) -> SolverReport {
    let net_at = |gross: Decimal| compute_from_gross(table, gross, include_deduction, category);

    let mut low = target_net;
    let mut high = (target_net * TWO).max(table.minimum_wage * TWO);

    let mut bracket_capped = false;
    while net_at(high).net < target_net {
        high *= BRACKET_GROWTH;
        if high > BRACKET_CEILING {
            bracket_capped = true;
            warn!(
                target_net = %target_net,
                high = %high,
                "Upper bound passed the safety ceiling; stopping expansion"
            );
            break;
        }
    }

    let mut best_gross = low;
    let mut best_diff: Option<Decimal> = None;

    for iteration in 1..=MAX_ITERATIONS {
        let mid = (low + high) / TWO;
        let result = net_at(mid);
        let diff = result.net - target_net;

        if diff.abs() < NET_TOLERANCE {
            debug!(
                target_net = %target_net,
                gross = %mid,
                iterations = iteration,
                "Net target converged"
            );
            return SolverReport {
                result,
                iterations: iteration,
                converged: true,
                bracket_capped,
            };
        }

        if diff < Decimal::ZERO {
            low = mid;
        } else {
            high = mid;
        }

        if best_diff.is_none_or(|best| diff.abs() < best) {
            best_diff = Some(diff.abs());
            best_gross = mid;
        }
    }

    let result = net_at(best_gross);
    warn!(
        target_net = %target_net,
        best_gross = %best_gross,
        achieved_net = %result.net,
        "Net target not reached within iteration budget"
    );

    SolverReport {
        result,
        iterations: MAX_ITERATIONS,
        converged: false,
        bracket_capped,
    }
}

/// Computes the full breakdown for a desired take-home amount.
///
/// The returned `net` is within [`NET_TOLERANCE`] of `target_net`, or the
/// closest reachable value once the iteration budget is spent. The same
/// `0..=MAX_AMOUNT` precondition as [`solve_from_net`] applies.
///
/// [`MAX_AMOUNT`]: crate::models::MAX_AMOUNT
pub fn compute_from_net(
    table: &RateTable,
    target_net: Decimal,
    include_deduction: bool,
    category: Category,
) -> TaxResult {
    solve_from_net(table, target_net, include_deduction, category).result
}
