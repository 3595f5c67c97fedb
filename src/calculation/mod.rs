//! Calculation logic for the salary engine.
//!
//! This module contains the category exemption policy, the gross-to-net
//! formulas, the net-to-gross bisection solver, and the [`Calculator`] facade
//! that dispatches between them.

mod category_policy;
mod facade;
mod forward;
mod inverse;

pub use category_policy::{Treatment, effective_rate, treatment};
pub use facade::{Calculator, Evaluation};
pub use forward::compute_from_gross;
pub use inverse::{
    BRACKET_CEILING, BRACKET_GROWTH, MAX_ITERATIONS, NET_TOLERANCE, SolverReport,
    compute_from_net, solve_from_net,
};
