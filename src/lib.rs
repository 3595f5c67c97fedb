//! Salary engine for monthly payroll taxes.
//!
//! This crate decomposes a gross salary into employee deductions and employer
//! contributions under a configurable tax regime, and inverts that calculation
//! to recover the gross salary that yields a desired take-home amount.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
