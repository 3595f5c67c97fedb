//! Core data models for the salary engine.
//!
//! This module contains the value types that flow in and out of a calculation.

mod calculation_input;
mod category;
mod tax_result;

pub use calculation_input::{CalculationInput, Direction, MAX_AMOUNT};
pub use category::{Category, LineItem};
pub use tax_result::TaxResult;
