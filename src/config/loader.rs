//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax regime
//! configurations from YAML files.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::Calculator;
use crate::error::{EngineError, EngineResult};

use super::types::{RateTable, RegimeMetadata};

/// Loads and provides access to a tax regime configuration.
///
/// # Directory Structure
///
/// ```text
/// config/kz/
/// ├── regime.yaml          # Regime metadata
/// └── rates/
///     └── 2026-01-01.yaml  # Rate table effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/kz").unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let table = loader.rate_table_for(date).unwrap();
/// println!("Minimum wage: {}", table.minimum_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    regime: RegimeMetadata,
    /// Sorted oldest first.
    rate_tables: Vec<Arc<RateTable>>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `regime.yaml` or the `rates` directory is missing
    /// - Any file contains invalid YAML
    /// - Any rate table violates its invariants
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/kz")?;
    /// # Ok::<(), salary_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let regime = Self::load_yaml::<RegimeMetadata>(&path.join("regime.yaml"))?;
        let rate_tables = Self::load_rate_tables(&path.join("rates"))?;

        Ok(Self::new(regime, rate_tables))
    }

    /// Creates a loader from already-built parts, sorting tables by date.
    pub fn new(regime: RegimeMetadata, rate_tables: Vec<RateTable>) -> Self {
        let mut sorted = rate_tables;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            regime,
            rate_tables: sorted.into_iter().map(Arc::new).collect(),
        }
    }

    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn load_rate_tables(rates_dir: &Path) -> EngineResult<Vec<RateTable>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<RateTable>(&path)?;
                table.validate()?;
                debug!(
                    path = %path.display(),
                    effective_date = %table.effective_date,
                    "Loaded rate table"
                );
                tables.push(table);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.regime
    }

    /// Returns every rate table, oldest first.
    pub fn rate_tables(&self) -> impl Iterator<Item = &RateTable> {
        self.rate_tables.iter().map(AsRef::as_ref)
    }

    /// Returns the most recent rate table, if any was loaded.
    pub fn latest(&self) -> Option<&RateTable> {
        self.rate_tables.last().map(AsRef::as_ref)
    }

    /// Gets the rate table in force on a given date.
    ///
    /// The most recent table whose effective date is on or before `date`
    /// wins; `RateTableNotFound` is returned when `date` precedes them all.
    pub fn rate_table_for(&self, date: NaiveDate) -> EngineResult<&RateTable> {
        self.shared_table_for(date).map(AsRef::as_ref)
    }

    /// Builds a calculator over the rate table in force on `date`.
    pub fn calculator_for(&self, date: NaiveDate) -> EngineResult<Calculator> {
        self.shared_table_for(date)
            .map(|table| Calculator::from_shared(Arc::clone(table)))
    }

    fn shared_table_for(&self, date: NaiveDate) -> EngineResult<&Arc<RateTable>> {
        self.rate_tables
            .iter()
            .rfind(|table| table.effective_date <= date)
            .ok_or(EngineError::RateTableNotFound { date })
    }
}
