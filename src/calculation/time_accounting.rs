//! Time accounting for the working year.
//!
//! This module derives total annual hours and billable hours from a
//! [`WorkTimeConfig`]. Leave, public holidays and adverse weather are
//! counted in days; training is counted in weeks.
//!
//! These functions are plain arithmetic transforms. They do not validate
//! their inputs and do not clamp negative results; that is the job of the
//! validation boundary in front of rate composition.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BillableOptions, CostConfig, WorkTimeConfig};

/// The breakdown of unbilled time for one work year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbilledTime {
    /// Unbilled leave, holiday and adverse-weather days.
    pub unbilled_days: Decimal,
    /// Unbilled days converted to weeks, plus unbilled training weeks.
    pub unbilled_weeks: Decimal,
    /// Weeks left to bill. Can be fractional or negative.
    pub billable_weeks: Decimal,
}

/// Returns total annual hours: `hours_per_day * days_per_week * weeks_per_year`.
///
/// # Examples
///
/// ```
/// use charge_rate_engine::calculation::total_annual_hours;
/// use charge_rate_engine::models::WorkTimeConfig;
/// use rust_decimal::Decimal;
///
/// let hours = total_annual_hours(&WorkTimeConfig::standard());
/// assert_eq!(hours, Decimal::from(1976));
/// ```
pub fn total_annual_hours(work: &WorkTimeConfig) -> Decimal {
    work.hours_per_day * work.days_per_week_decimal() * Decimal::from(work.weeks_per_year)
}

/// Works out how much of the year is not billable.
///
/// Each day-based category counts towards unbilled time only when its
/// billable flag is off. Training weeks are added after the day-to-week
/// conversion.
pub fn unbilled_time(
    work: &WorkTimeConfig,
    cost: &CostConfig,
    options: &BillableOptions,
) -> UnbilledTime {
    let unbilled_days: Decimal = unbilled_day_counts(work, cost, options).sum();

    let mut unbilled_weeks = unbilled_days / work.days_per_week_decimal();
    if !options.include_training_time {
        unbilled_weeks += work.training_weeks;
    }

    UnbilledTime {
        unbilled_days,
        unbilled_weeks,
        billable_weeks: Decimal::from(work.weeks_per_year) - unbilled_weeks,
    }
}

/// Day counts that are not billed under `options`.
fn unbilled_day_counts(
    work: &WorkTimeConfig,
    cost: &CostConfig,
    options: &BillableOptions,
) -> impl Iterator<Item = Decimal> {
    [
        (options.include_annual_leave, work.annual_leave_days),
        (options.include_public_holidays, work.public_holidays),
        (options.include_sick_leave, work.sick_leave_days),
        (
            options.include_adverse_weather,
            Decimal::from(cost.adverse_weather_days),
        ),
    ]
    .into_iter()
    .filter(|(billable, _)| !billable)
    .map(|(_, days)| days)
}

/// [`unbilled_time`] with every step checked. `None` on overflow.
pub(crate) fn checked_unbilled_time(
    work: &WorkTimeConfig,
    cost: &CostConfig,
    options: &BillableOptions,
) -> Option<UnbilledTime> {
    let unbilled_days = unbilled_day_counts(work, cost, options)
        .try_fold(Decimal::ZERO, |acc, days| acc.checked_add(days))?;

    let mut unbilled_weeks = unbilled_days.checked_div(work.days_per_week_decimal())?;
    if !options.include_training_time {
        unbilled_weeks = unbilled_weeks.checked_add(work.training_weeks)?;
    }

    Some(UnbilledTime {
        unbilled_days,
        unbilled_weeks,
        billable_weeks: Decimal::from(work.weeks_per_year).checked_sub(unbilled_weeks)?,
    })
}

/// [`total_annual_hours`] with every step checked. `None` on overflow.
pub(crate) fn checked_total_annual_hours(work: &WorkTimeConfig) -> Option<Decimal> {
    checked_hours_for_weeks(work, Decimal::from(work.weeks_per_year))
}

/// Billable hours with every step checked. `None` on overflow.
pub(crate) fn checked_billable_hours(
    work: &WorkTimeConfig,
    cost: &CostConfig,
    options: &BillableOptions,
) -> Option<Decimal> {
    checked_unbilled_time(work, cost, options)
        .and_then(|unbilled| checked_hours_for_weeks(work, unbilled.billable_weeks))
}

/// Returns annual billable hours after removing unbilled time.
///
/// The result is negative when unbilled time exceeds the working year.
///
/// # Examples
///
/// ```
/// use charge_rate_engine::calculation::billable_hours;
/// use charge_rate_engine::models::{BillableOptions, CostConfig, WorkTimeConfig};
/// use rust_decimal::Decimal;
///
/// let hours = billable_hours(
///     &WorkTimeConfig::standard(),
///     &CostConfig::standard(),
///     &BillableOptions::default(),
/// );
/// // 52 weeks less 9 weeks of leave/holidays/weather and 5 weeks of training
/// assert_eq!(hours, Decimal::from(1444));
/// ```
pub fn billable_hours(
    work: &WorkTimeConfig,
    cost: &CostConfig,
    options: &BillableOptions,
) -> Decimal {
    hours_for_weeks(work, unbilled_time(work, cost, options).billable_weeks)
}

fn hours_for_weeks(work: &WorkTimeConfig, weeks: Decimal) -> Decimal {
    work.hours_per_day * work.days_per_week_decimal() * weeks
}

pub(crate) fn checked_hours_for_weeks(work: &WorkTimeConfig, weeks: Decimal) -> Option<Decimal> {
    work.hours_per_day
        .checked_mul(work.days_per_week_decimal())?
        .checked_mul(weeks)
}
