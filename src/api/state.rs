//! Application state for the salary engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::calculation::Calculator;
use crate::config::{ConfigLoader, RegimeMetadata};
use crate::error::EngineResult;

/// Shared application state.
///
/// Holds the calculator for the active rate table and the metadata of the
/// regime it was loaded from.
#[derive(Clone)]
pub struct AppState {
    calculator: Calculator,
    regime: Arc<RegimeMetadata>,
}

impl AppState {
    /// Creates a new application state from a regime and its calculator.
    pub fn new(regime: RegimeMetadata, calculator: Calculator) -> Self {
        Self {
            calculator,
            regime: Arc::new(regime),
        }
    }

    /// Creates the state for the rate table in force on `date`.
    pub fn from_config(config: &ConfigLoader, date: NaiveDate) -> EngineResult<Self> {
        let calculator = config.calculator_for(date)?;
        Ok(Self::new(config.regime().clone(), calculator))
    }

    /// Returns the calculator.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.regime
    }
}
