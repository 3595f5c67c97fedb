//! Configuration types for a payroll tax regime.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from YAML configuration files, plus the built-in 2026 rate table.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::LineItem;

/// Metadata about the tax regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeMetadata {
    /// Short identifier of the regime (e.g., "KZ").
    pub code: String,
    /// The human-readable name of the regime.
    pub name: String,
    /// ISO 4217 code of the monetary unit all amounts are expressed in.
    pub currency: String,
    /// URL to the official source of the parameters.
    pub source_url: String,
}

/// Nominal rate of each line item, as a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemRates {
    /// Employee pension contribution rate.
    pub employee_pension: Decimal,
    /// Employee health insurance rate.
    pub employee_health: Decimal,
    /// Personal income tax rate.
    pub income_tax: Decimal,
    /// Employer social deduction rate.
    pub employer_social_deduction: Decimal,
    /// Employer social tax rate.
    pub employer_social_tax: Decimal,
    /// Employer health insurance rate.
    pub employer_health: Decimal,
    /// Employer pension contribution rate.
    pub employer_pension: Decimal,
}

impl LineItemRates {
    /// Returns the nominal rate for a line item.
    pub fn nominal(&self, item: LineItem) -> Decimal {
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
}

/// Income caps and floors, as monetary amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeLimits {
    /// Maximum gross subject to employee and employer pension.
    pub pension_cap: Decimal,
    /// Maximum gross subject to employee health insurance.
    pub employee_health_cap: Decimal,
    /// Maximum gross subject to employer health insurance.
    pub employer_health_cap: Decimal,
    /// Minimum base for the employer social deduction.
    pub social_deduction_floor: Decimal,
    /// Maximum base for the employer social deduction.
    pub social_deduction_ceiling: Decimal,
}

/// The complete set of parameters for one tax period.
///
/// A rate table is read-only once built; calculators share it behind an `Arc`.
///
/// # Example
///
/// ```
/// use salary_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::kz_2026();
/// assert!(table.validate().is_ok());
/// assert_eq!(table.standard_deduction(), Decimal::new(129_750, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// First day these parameters apply.
    pub effective_date: NaiveDate,
    /// Monthly calculation index used to size thresholds.
    pub base_index: Decimal,
    /// Minimum monthly wage.
    pub minimum_wage: Decimal,
    /// Size of the standard personal deduction, in base-index units.
    pub deduction_multiple: Decimal,
    /// Nominal rates per line item.
    pub rates: LineItemRates,
    /// Income caps and floors.
    pub limits: IncomeLimits,
}

const EFFECTIVE_2026: NaiveDate = match NaiveDate::from_ymd_opt(2026, 1, 1) {
    Some(date) => date,
    None => panic!("2026-01-01 is a valid date"),
};

impl RateTable {
    /// The 2026 parameters: MRP 4 325, minimum wage 85 000, 30 MRP deduction.
    pub fn kz_2026() -> Self {
        let minimum_wage = Decimal::new(85_000, 0);

        Self {
            effective_date: EFFECTIVE_2026,
            base_index: Decimal::new(4_325, 0),
            minimum_wage,
            deduction_multiple: Decimal::new(30, 0),
            rates: LineItemRates {
                employee_pension: Decimal::new(10, 2),
                employee_health: Decimal::new(2, 2),
                income_tax: Decimal::new(10, 2),
                employer_social_deduction: Decimal::new(5, 2),
                employer_social_tax: Decimal::new(6, 2),
                employer_health: Decimal::new(3, 2),
                employer_pension: Decimal::new(35, 3),
            },
            limits: IncomeLimits {
                pension_cap: minimum_wage * Decimal::new(50, 0),
                employee_health_cap: minimum_wage * Decimal::new(20, 0),
                employer_health_cap: minimum_wage * Decimal::new(40, 0),
                social_deduction_floor: minimum_wage,
                social_deduction_ceiling: minimum_wage * Decimal::new(7, 0),
            },
        }
    }

    /// The standard personal deduction as a monetary amount.
    pub fn standard_deduction(&self) -> Decimal {
        self.deduction_multiple * self.base_index
    }

    /// Checks the table's invariants.
    ///
    /// Every rate must lie in `[0, 1]`, every monetary parameter must be
    /// non-negative, and the social deduction floor must not exceed its ceiling.
    pub fn validate(&self) -> EngineResult<()> {
        for item in LineItem::ALL {
            let rate = self.rates.nominal(item);
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(EngineError::InvalidRateTable {
                    field: format!("rates.{}", line_item_key(item)),
                    message: format!("rate {} must be between 0 and 1", rate),
                });
            }
        }

        let amounts = [
            ("base_index", self.base_index),
            ("minimum_wage", self.minimum_wage),
            ("deduction_multiple", self.deduction_multiple),
            ("limits.pension_cap", self.limits.pension_cap),
            ("limits.employee_health_cap", self.limits.employee_health_cap),
            ("limits.employer_health_cap", self.limits.employer_health_cap),
            ("limits.social_deduction_floor", self.limits.social_deduction_floor),
            (
                "limits.social_deduction_ceiling",
                self.limits.social_deduction_ceiling,
            ),
        ];
        for (field, value) in amounts {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidRateTable {
                    field: field.to_string(),
                    message: format!("amount {} must not be negative", value),
                });
            }
        }

        if self.limits.social_deduction_floor > self.limits.social_deduction_ceiling {
            return Err(EngineError::InvalidRateTable {
                field: "limits.social_deduction_floor".to_string(),
                message: format!(
                    "floor {} exceeds ceiling {}",
                    self.limits.social_deduction_floor, self.limits.social_deduction_ceiling
                ),
            });
        }

        Ok(())
    }
}

fn line_item_key(item: LineItem) -> &'static str {
    match item {
        LineItem::EmployeePension => "employee_pension",
        LineItem::EmployeeHealth => "employee_health",
        LineItem::IncomeTax => "income_tax",
        LineItem::EmployerSocialDeduction => "employer_social_deduction",
        LineItem::EmployerSocialTax => "employer_social_tax",
        LineItem::EmployerHealth => "employer_health",
        LineItem::EmployerPension => "employer_pension",
    }
}
