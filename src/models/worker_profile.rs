//! Worker profile model.
//!
//! A [`WorkerProfile`] bundles one worker's pay rate and configuration with
//! the most recent evaluation outcome.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BillableOptions, CalculationResult, CostConfig, WorkTimeConfig};
use crate::error::EngineError;

/// A serialisable record of why a profile could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationFailure {
    /// Stable error code (e.g. "BILLABLE_CAPACITY_EXHAUSTED").
    pub code: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl From<&EngineError> for EvaluationFailure {
    fn from(error: &EngineError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

/// One worker's charge rate inputs and their latest evaluation.
///
/// Inputs are private so that every change goes through a setter, and every
/// setter discards the previous evaluation. A profile's result is only
/// valid while [`WorkerProfile::needs_evaluation`] is false.
///
/// The evaluation outcome is serialised for reporting but never read back:
/// a deserialised profile always needs evaluation.
///
/// # Example
///
/// ```
/// use charge_rate_engine::models::{BillableOptions, CostConfig, WorkTimeConfig, WorkerProfile};
/// use rust_decimal::Decimal;
///
/// let mut profile = WorkerProfile::new(
///     "wp_001",
///     "Sam Taylor",
///     "apprentice_year_1",
///     Decimal::new(2050, 2),
///     WorkTimeConfig::standard(),
///     CostConfig::standard(),
///     BillableOptions::default(),
/// );
/// assert!(profile.needs_evaluation());
///
/// profile.set_base_pay_rate(Decimal::new(2275, 2));
/// assert_eq!(profile.base_pay_rate(), Decimal::new(2275, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    id: String,
    name: String,
    category_code: String,
    base_pay_rate: Decimal,
    work_config: WorkTimeConfig,
    cost_config: CostConfig,
    #[serde(default)]
    billable_options: BillableOptions,
    #[serde(skip_deserializing)]
    result: Option<CalculationResult>,
    #[serde(skip_deserializing)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(skip_deserializing)]
    error: Option<EvaluationFailure>,
}

impl WorkerProfile {
    /// Creates an unevaluated profile that owns the given configuration.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category_code: impl Into<String>,
        base_pay_rate: Decimal,
        work_config: WorkTimeConfig,
        cost_config: CostConfig,
        billable_options: BillableOptions,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_code: category_code.into(),
            base_pay_rate,
            work_config,
            cost_config,
            billable_options,
            result: None,
            updated_at: None,
            error: None,
        }
    }

    /// Unique identifier for the profile.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name of the worker.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Worker category code (e.g. "apprentice_year_2").
    pub fn category_code(&self) -> &str {
        &self.category_code
    }

    /// Hourly pay rate.
    pub fn base_pay_rate(&self) -> Decimal {
        self.base_pay_rate
    }

    /// Work-time configuration.
    pub fn work_config(&self) -> &WorkTimeConfig {
        &self.work_config
    }

    /// Cost configuration.
    pub fn cost_config(&self) -> &CostConfig {
        &self.cost_config
    }

    /// Billability toggles.
    pub fn billable_options(&self) -> &BillableOptions {
        &self.billable_options
    }

    /// The result of the last successful evaluation, if still valid.
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// When the profile was last evaluated.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Why the last evaluation failed, if it did.
    pub fn error(&self) -> Option<&EvaluationFailure> {
        self.error.as_ref()
    }

    /// Renames the worker. Does not affect the evaluation.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Changes the pay rate and discards the previous evaluation.
    pub fn set_base_pay_rate(&mut self, base_pay_rate: Decimal) {
        self.base_pay_rate = base_pay_rate;
        self.invalidate();
    }

    /// Replaces the work-time configuration and discards the previous evaluation.
    pub fn set_work_config(&mut self, work_config: WorkTimeConfig) {
        self.work_config = work_config;
        self.invalidate();
    }

    /// Replaces the cost configuration and discards the previous evaluation.
    pub fn set_cost_config(&mut self, cost_config: CostConfig) {
        self.cost_config = cost_config;
        self.invalidate();
    }

    /// Replaces the billability toggles and discards the previous evaluation.
    pub fn set_billable_options(&mut self, billable_options: BillableOptions) {
        self.billable_options = billable_options;
        self.invalidate();
    }

    /// Returns true when no valid result is attached.
    pub fn needs_evaluation(&self) -> bool {
        self.result.is_none()
    }

    /// Returns true when the last evaluation failed.
    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Returns a copy of this profile carrying a successful evaluation.
    pub fn with_result(&self, result: CalculationResult, evaluated_at: DateTime<Utc>) -> Self {
        Self {
            result: Some(result),
            updated_at: Some(evaluated_at),
            error: None,
            ..self.clone()
        }
    }

    /// Returns a copy of this profile carrying a failed evaluation.
    pub fn with_failure(&self, error: &EngineError, evaluated_at: DateTime<Utc>) -> Self {
        Self {
            result: None,
            updated_at: Some(evaluated_at),
            error: Some(error.into()),
            ..self.clone()
        }
    }

    fn invalidate(&mut self) {
        self.result = None;
        self.updated_at = None;
        self.error = None;
    }
}
