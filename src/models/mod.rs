//! Core data models for the Charge Rate Engine.
//!
//! This module contains the configuration inputs, derived results and worker
//! profiles used throughout the engine.

mod billable_options;
mod calculation_result;
mod cost_config;
mod work_config;
mod worker_profile;

pub use billable_options::BillableOptions;
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult, OnCosts};
pub use cost_config::CostConfig;
pub use work_config::{
    STANDARD_DAYS_PER_WEEK, STANDARD_HOURS_PER_DAY, STANDARD_WEEKS_PER_YEAR, WorkTimeConfig,
};
pub use worker_profile::{EvaluationFailure, WorkerProfile};
