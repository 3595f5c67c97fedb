//! Configuration loading and management for the salary engine.
//!
//! A tax regime is described by YAML files: regime metadata plus one rate
//! table per effective date. A built-in table for 2026 is also available via
//! [`RateTable::kz_2026`].
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/kz").unwrap();
//! println!("Loaded regime: {}", config.regime().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{IncomeLimits, LineItemRates, RateTable, RegimeMetadata};
