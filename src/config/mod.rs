//! Configuration loading for the Charge Rate Engine.
//!
//! This module loads organisation-wide defaults and worker categories from
//! YAML files and builds worker profiles from them.
//!
//! # Example
//!
//! ```no_run
//! use charge_rate_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/charge_rates").unwrap();
//! println!("Default margin: {}", config.defaults().costs.default_margin);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CategoriesConfig, DefaultsConfig, ProfileOverrides, RateDefaults, WorkerCategory};
