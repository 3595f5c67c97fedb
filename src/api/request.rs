//! Request types for the salary engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{CalculationInput, Category, Direction, MAX_AMOUNT};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The gross salary or the desired take-home, depending on `direction`.
    pub amount: Decimal,
    /// Whether `amount` is gross or net.
    pub direction: Direction,
    /// Whether the standard personal deduction applies.
    #[serde(default = "default_include_standard_deduction")]
    pub include_standard_deduction: bool,
    /// The employee's beneficiary category; `standard` when omitted.
    #[serde(default)]
    pub category: Option<String>,
}

fn default_include_standard_deduction() -> bool {
    true
}

impl TryFrom<CalculationRequest> for CalculationInput {
    type Error = EngineError;

    fn try_from(req: CalculationRequest) -> Result<Self, Self::Error> {
        if req.amount > MAX_AMOUNT {
            return Err(EngineError::AmountOutOfRange {
                amount: req.amount,
                max: MAX_AMOUNT,
            });
        }

        let category = match req.category.as_deref() {
            Some(value) => value.parse::<Category>()?,
            None => Category::default(),
        };

        Ok(CalculationInput {
            amount: req.amount,
            direction: req.direction,
            include_standard_deduction: req.include_standard_deduction,
            category,
        })
    }
}
