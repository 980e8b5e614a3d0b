//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading default rates
//! and worker categories from YAML files, and for turning a category into a
//! ready-to-evaluate [`WorkerProfile`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkerProfile;

use super::types::{
    CategoriesConfig, DefaultsConfig, ProfileOverrides, RateDefaults, WorkerCategory,
};

/// Loads and provides access to charge rate defaults.
///
/// # Directory Structure
///
/// ```text
/// config/charge_rates/
/// ├── defaults.yaml    # Work year, on-costs and billability defaults
/// └── categories.yaml  # Worker categories and their base pay rates
/// ```
///
/// # Example
///
/// ```no_run
/// use charge_rate_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/charge_rates").unwrap();
/// let profile = loader
///     .create_profile("wp_001", "Sam Taylor", "apprentice_year_1")
///     .unwrap();
/// println!("Pay rate: ${}", profile.base_pay_rate());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RateDefaults,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns `ConfigNotFound` if either file is missing and
    /// `ConfigParseError` if either file is not valid YAML for its type.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let defaults = Self::load_yaml::<DefaultsConfig>(&path.join("defaults.yaml"))?;
        let categories = Self::load_yaml::<CategoriesConfig>(&path.join("categories.yaml"))?;

        debug!(
            path = %path.display(),
            categories = categories.categories.len(),
            "Loaded charge rate configuration"
        );

        Ok(Self {
            config: RateDefaults::new(defaults, categories.categories),
        })
    }

    /// Builds a loader from the engine's built-in defaults and the four
    /// apprentice-year categories, without touching the filesystem.
    pub fn standard() -> Self {
        let apprentice = |year: &str, description: &str, pay_rate: Decimal| WorkerCategory {
            name: format!("Apprentice Year {}", year),
            description: description.to_string(),
            base_pay_rate: pay_rate,
            work_time: None,
            costs: None,
            billable: None,
        };

        let categories = BTreeMap::from([
            (
                "apprentice_year_1".to_string(),
                apprentice("1", "First-year apprentice", Decimal::new(2050, 2)),
            ),
            (
                "apprentice_year_2".to_string(),
                apprentice("2", "Second-year apprentice", Decimal::new(2410, 2)),
            ),
            (
                "apprentice_year_3".to_string(),
                apprentice("3", "Third-year apprentice", Decimal::new(2875, 2)),
            ),
            (
                "apprentice_year_4".to_string(),
                apprentice("4", "Fourth-year apprentice", Decimal::new(3220, 2)),
            ),
        ]);

        Self {
            config: RateDefaults::new(DefaultsConfig::standard(), categories),
        }
    }

    /// Loads and parses a YAML file.
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

    /// Returns the underlying configuration.
    pub fn config(&self) -> &RateDefaults {
        &self.config
    }

    /// Returns the organisation-wide defaults.
    pub fn defaults(&self) -> &DefaultsConfig {
        self.config.defaults()
    }

    /// Gets a category by its code, or `CategoryNotFound`.
    pub fn get_category(&self, code: &str) -> EngineResult<&WorkerCategory> {
        self.config
            .categories()
            .get(code)
            .ok_or_else(|| EngineError::CategoryNotFound {
                code: code.to_string(),
            })
    }

    /// Creates an unevaluated profile from a category.
    ///
    /// The category's own work time, costs and billability replace the
    /// organisation-wide defaults where present.
    pub fn create_profile(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        category_code: &str,
    ) -> EngineResult<WorkerProfile> {
        self.create_profile_with_overrides(id, name, category_code, ProfileOverrides::default())
    }

    /// Creates an unevaluated profile from a category, with caller-supplied
    /// values taking precedence over both the category and the defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use charge_rate_engine::config::{ConfigLoader, ProfileOverrides};
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::standard();
    /// let overrides = ProfileOverrides {
    ///     base_pay_rate: Some(Decimal::new(2200, 2)),
    ///     ..ProfileOverrides::default()
    /// };
    /// let profile = loader
    ///     .create_profile_with_overrides("wp_002", "Alex Chen", "apprentice_year_1", overrides)
    ///     .unwrap();
    /// assert_eq!(profile.base_pay_rate(), Decimal::new(2200, 2));
    /// ```
    pub fn create_profile_with_overrides(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        category_code: &str,
        overrides: ProfileOverrides,
    ) -> EngineResult<WorkerProfile> {
        let category = self.get_category(category_code)?;
        let defaults = self.defaults();

        let profile = WorkerProfile::new(
            id,
            name,
            category_code,
            overrides.base_pay_rate.unwrap_or(category.base_pay_rate),
            overrides
                .work_config
                .or(category.work_time)
                .unwrap_or(defaults.work_time),
            overrides
                .cost_config
                .or(category.costs)
                .unwrap_or(defaults.costs),
            overrides
                .billable_options
                .or(category.billable)
                .unwrap_or(defaults.billable),
        );

        debug!(
            profile_id = %profile.id(),
            category = category_code,
            "Created worker profile"
        );
        Ok(profile)
    }

    /// Generates a fresh profile identifier.
    pub fn new_profile_id() -> String {
        Uuid::new_v4().to_string()
    }
}
