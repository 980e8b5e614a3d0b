//! Configuration types for default charge rate settings.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BillableOptions, CostConfig, WorkTimeConfig};

/// Organisation-wide defaults from `defaults.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default work year.
    pub work_time: WorkTimeConfig,
    /// Default on-cost configuration.
    pub costs: CostConfig,
    /// Default billability toggles.
    #[serde(default)]
    pub billable: BillableOptions,
}

impl DefaultsConfig {
    /// The standard defaults built into the engine.
    pub fn standard() -> Self {
        Self {
            work_time: WorkTimeConfig::standard(),
            costs: CostConfig::standard(),
            billable: BillableOptions::default(),
        }
    }
}

/// A worker category, such as one year of an apprenticeship.
///
/// A category may replace any of the organisation-wide defaults, for
/// example an outdoor trade with more adverse-weather days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerCategory {
    /// The human-readable name of the category.
    pub name: String,
    /// A description of the category.
    pub description: String,
    /// The default hourly pay rate for workers in this category.
    pub base_pay_rate: Decimal,
    /// Work year replacing the default, if any.
    #[serde(default)]
    pub work_time: Option<WorkTimeConfig>,
    /// Cost configuration replacing the default, if any.
    #[serde(default)]
    pub costs: Option<CostConfig>,
    /// Billability toggles replacing the default, if any.
    #[serde(default)]
    pub billable: Option<BillableOptions>,
}

/// Categories configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesConfig {
    /// Map of category code to category details.
    pub categories: BTreeMap<String, WorkerCategory>,
}

/// Caller-supplied values replacing category defaults for one profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOverrides {
    /// Pay rate replacing the category's base pay rate.
    pub base_pay_rate: Option<Decimal>,
    /// Work year replacing the category's.
    pub work_config: Option<WorkTimeConfig>,
    /// Cost configuration replacing the category's.
    pub cost_config: Option<CostConfig>,
    /// Billability toggles replacing the category's.
    pub billable_options: Option<BillableOptions>,
}

/// The complete default configuration.
///
/// This struct aggregates the organisation-wide defaults and the worker
/// categories loaded from a configuration directory.
#[derive(Debug, Clone, PartialEq)]
pub struct RateDefaults {
    /// Organisation-wide defaults.
    defaults: DefaultsConfig,
    /// Worker categories by code.
    categories: BTreeMap<String, WorkerCategory>,
}

impl RateDefaults {
    /// Creates a new RateDefaults from its component parts.
    pub fn new(defaults: DefaultsConfig, categories: BTreeMap<String, WorkerCategory>) -> Self {
        Self {
            defaults,
            categories,
        }
    }

    /// Returns the organisation-wide defaults.
    pub fn defaults(&self) -> &DefaultsConfig {
        &self.defaults
    }

    /// Returns all categories, ordered by code.
    pub fn categories(&self) -> &BTreeMap<String, WorkerCategory> {
        &self.categories
    }
}
