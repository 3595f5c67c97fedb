//! Beneficiary categories and payroll line items.
//!
//! Both are closed sets: every calculation uses exactly one category, and
//! every result carries exactly the seven line items listed here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The beneficiary category of an employee.
///
/// Categories are mutually exclusive; selecting one excludes all others.
///
/// # Example
///
/// ```
/// use salary_engine::models::Category;
///
/// let category: Category = "disabled_1_2".parse().unwrap();
/// assert_eq!(category, Category::Disabled12);
/// assert_eq!(category.as_str(), "disabled_1_2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Regular employee with no exemptions.
    #[default]
    Standard,
    /// Recipient of an old-age pension.
    Pensioner,
    /// Full-time student.
    Student,
    /// Person with a group 1 or group 2 disability.
    #[serde(rename = "disabled_1_2")]
    Disabled12,
    /// Person with a group 3 disability.
    #[serde(rename = "disabled_3")]
    Disabled3,
}

impl Category {
    /// All categories, in matrix column order.
    pub const ALL: [Category; 5] = [
        Category::Standard,
        Category::Pensioner,
        Category::Student,
        Category::Disabled12,
        Category::Disabled3,
    ];

    /// Returns the wire name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Standard => "standard",
            Category::Pensioner => "pensioner",
            Category::Student => "student",
            Category::Disabled12 => "disabled_1_2",
            Category::Disabled3 => "disabled_3",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| EngineError::UnknownCategory {
                value: s.to_string(),
            })
    }
}

/// One named tax or contribution component of a salary breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItem {
    /// Mandatory pension contribution withheld from the employee.
    EmployeePension,
    /// Health insurance contribution withheld from the employee.
    EmployeeHealth,
    /// Personal income tax withheld from the employee.
    IncomeTax,
    /// Social deduction paid by the employer.
    EmployerSocialDeduction,
    /// Social tax paid by the employer, net of the social deduction.
    EmployerSocialTax,
    /// Health insurance contribution paid by the employer.
    EmployerHealth,
    /// Pension contribution paid by the employer.
    EmployerPension,
}

impl LineItem {
    /// All line items, in calculation order.
    pub const ALL: [LineItem; 7] = [
        LineItem::EmployeePension,
        LineItem::EmployeeHealth,
        LineItem::IncomeTax,
        LineItem::EmployerSocialDeduction,
        LineItem::EmployerSocialTax,
        LineItem::EmployerHealth,
        LineItem::EmployerPension,
    ];

    /// Returns true for items withheld from the employee's salary.
    pub fn is_employee_side(self) -> bool {
        matches!(
            self,
            LineItem::EmployeePension | LineItem::EmployeeHealth | LineItem::IncomeTax
        )
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
