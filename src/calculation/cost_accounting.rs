//! On-cost accounting.
//!
//! This module derives the annual on-cost breakdown for a worker from their
//! pay rate, total hours and [`CostConfig`].

use rust_decimal::Decimal;

use crate::models::{CostConfig, OnCosts};

/// Annual-leave hours on which leave loading is paid (four 38-hour weeks).
///
/// Leave loading is capped at this many hours no matter how many hours the
/// worker works in the year.
pub const LEAVE_LOADING_HOURS_CAP: Decimal = Decimal::from_parts(152, 0, 0, false, 0);

/// Calculates the on-cost breakdown for one year at the given pay rate.
///
/// Percentage on-costs are applied to the base wage (`pay_rate * total_hours`),
/// except leave loading, which is `pay_rate * min(total_hours, 152) * rate`.
/// Study and PPE costs pass through unchanged. Inputs are not validated.
///
/// # Examples
///
/// ```
/// use charge_rate_engine::calculation::calculate_on_costs;
/// use charge_rate_engine::models::CostConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let oncosts = calculate_on_costs(
///     Decimal::from_str("20.50").unwrap(),
///     Decimal::from(1976),
///     &CostConfig::standard(),
/// );
/// assert_eq!(oncosts.leave_loading, Decimal::from_str("545.3").unwrap());
/// assert_eq!(oncosts.superannuation, Decimal::from_str("4658.42").unwrap());
/// ```
pub fn calculate_on_costs(pay_rate: Decimal, total_hours: Decimal, cost: &CostConfig) -> OnCosts {
    let base_wage = pay_rate * total_hours;
    let annual_leave_hours = total_hours.min(LEAVE_LOADING_HOURS_CAP);

    OnCosts {
        superannuation: base_wage * cost.super_rate,
        workers_comp: base_wage * cost.wc_rate,
        payroll_tax: base_wage * cost.payroll_tax_rate,
        leave_loading: pay_rate * annual_leave_hours * cost.leave_loading,
        study_cost: cost.study_cost,
        ppe_cost: cost.ppe_cost,
        admin_cost: base_wage * cost.admin_rate,
    }
}

/// [`calculate_on_costs`] with every product checked. `None` on overflow.
pub(crate) fn checked_on_costs(
    pay_rate: Decimal,
    total_hours: Decimal,
    cost: &CostConfig,
) -> Option<OnCosts> {
    let base_wage = pay_rate.checked_mul(total_hours)?;
    let annual_leave_hours = total_hours.min(LEAVE_LOADING_HOURS_CAP);

    Some(OnCosts {
        superannuation: base_wage.checked_mul(cost.super_rate)?,
        workers_comp: base_wage.checked_mul(cost.wc_rate)?,
        payroll_tax: base_wage.checked_mul(cost.payroll_tax_rate)?,
        leave_loading: pay_rate
            .checked_mul(annual_leave_hours)?
            .checked_mul(cost.leave_loading)?,
        study_cost: cost.study_cost,
        ppe_cost: cost.ppe_cost,
        admin_cost: base_wage.checked_mul(cost.admin_rate)?,
    })
}
