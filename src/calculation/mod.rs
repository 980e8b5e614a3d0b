//! Calculation logic for the Charge Rate Engine.
//!
//! This module contains time accounting (total and billable hours), cost
//! accounting (the on-cost breakdown), the validation boundary, rate
//! composition with margin, margin analysis, and batch evaluation of worker
//! profiles.

mod batch;
mod cost_accounting;
mod margin_analysis;
mod rate_composition;
mod time_accounting;
mod validation;

pub use batch::{
    BatchSummary, evaluate_all, evaluate_all_at, evaluate_all_parallel, evaluate_all_parallel_at,
    evaluate_profile,
};
pub use cost_accounting::{LEAVE_LOADING_HOURS_CAP, calculate_on_costs};
pub use margin_analysis::{
    MarginPreview, Profitability, implied_margin, preview_margins, profitability,
};
pub use rate_composition::{
    ChargeRateCalculation, calculate_charge_rate, compose_charge_rate, explain_charge_rate,
};
pub use time_accounting::{UnbilledTime, billable_hours, total_annual_hours, unbilled_time};
pub use validation::{
    MAX_DAYS_PER_WEEK, MAX_HOURS_PER_DAY, MAX_WEEKS_PER_YEAR, collect_warnings,
    validate_cost_config, validate_margin, validate_rate_inputs, validate_work_config,
};
