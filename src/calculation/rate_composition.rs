//! Charge rate composition.
//!
//! This module combines time and cost accounting into a fully-loaded hourly
//! charge rate with margin applied.
//!
//! [`compose_charge_rate`] is the bare pipeline. [`calculate_charge_rate`]
//! puts the validation boundary in front of it and rejects configurations
//! whose unbilled time leaves no billable hours. [`explain_charge_rate`]
//! additionally records every step in an [`AuditTrace`].

use std::time::Instant;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cost_accounting::{LEAVE_LOADING_HOURS_CAP, checked_on_costs};
use super::time_accounting::{
    UnbilledTime, checked_billable_hours, checked_hours_for_weeks, checked_total_annual_hours,
    checked_unbilled_time,
};
use super::validation::{collect_warnings, validate_rate_inputs};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, BillableOptions, CalculationResult, CostConfig, WorkTimeConfig,
};

/// A charge rate together with the audit trace that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRateCalculation {
    /// The calculation result.
    pub result: CalculationResult,
    /// The margin that was applied.
    pub margin: Decimal,
    /// Every step of the calculation, plus warnings about unusual inputs.
    pub audit_trace: AuditTrace,
}

struct Composition {
    result: CalculationResult,
    unbilled: UnbilledTime,
    total_on_costs: Decimal,
}

fn compose(
    pay_rate: Decimal,
    work: &WorkTimeConfig,
    cost: &CostConfig,
    options: &BillableOptions,
    margin: Decimal,
) -> EngineResult<Composition> {
    let total_hours =
        checked_total_annual_hours(work).ok_or_else(|| EngineError::non_finite("total_hours"))?;
    let unbilled = checked_unbilled_time(work, cost, options)
        .ok_or_else(|| EngineError::non_finite("unbilled_time"))?;
    let billable = checked_hours_for_weeks(work, unbilled.billable_weeks)
        .ok_or_else(|| EngineError::non_finite("billable_hours"))?;

    let base_wage = pay_rate
        .checked_mul(total_hours)
        .ok_or_else(|| EngineError::non_finite("base_wage"))?;
    let oncosts = checked_on_costs(pay_rate, total_hours, cost)
        .ok_or_else(|| EngineError::non_finite("on_costs"))?;
    let total_on_costs = oncosts
        .checked_total()
        .ok_or_else(|| EngineError::non_finite("total_on_costs"))?;
    let total_cost = base_wage
        .checked_add(total_on_costs)
        .ok_or_else(|| EngineError::non_finite("total_cost"))?;
    let cost_per_hour = total_cost
        .checked_div(billable)
        .ok_or_else(|| EngineError::non_finite("cost_per_hour"))?;
    let charge_rate = Decimal::ONE
        .checked_add(margin)
        .and_then(|multiplier| cost_per_hour.checked_mul(multiplier))
        .ok_or_else(|| EngineError::non_finite("charge_rate"))?;

    Ok(Composition {
        result: CalculationResult {
            pay_rate,
            total_hours,
            billable_hours: billable,
            base_wage,
            oncosts,
            total_cost,
            cost_per_hour,
            charge_rate,
        },
        unbilled,
        total_on_costs,
    })
}

/// Composes a charge rate without validating the inputs.
///
/// `margin` defaults to `cost.default_margin`. No rounding is applied.
/// Zero billable hours or arithmetic overflow at any step surface as
/// [`EngineError::NonFiniteResult`]; negative billable hours are passed
/// through and produce a negative rate. Use [`calculate_charge_rate`] for
/// caller-supplied data.
pub fn compose_charge_rate(
    pay_rate: Decimal,
    work: &WorkTimeConfig,
    cost: &CostConfig,
    options: &BillableOptions,
    margin: Option<Decimal>,
) -> EngineResult<CalculationResult> {
    let margin = margin.unwrap_or(cost.default_margin);
    compose(pay_rate, work, cost, options, margin).map(|composition| composition.result)
}

fn validated_composition(
    pay_rate: Decimal,
    work: &WorkTimeConfig,
    cost: &CostConfig,
    options: &BillableOptions,
    margin: Decimal,
) -> EngineResult<Composition> {
    validate_rate_inputs(pay_rate, work, cost, margin)?;

    let billable = checked_billable_hours(work, cost, options)
        .ok_or_else(|| EngineError::non_finite("billable_hours"))?;
    if billable <= Decimal::ZERO {
        return Err(EngineError::BillableCapacityExhausted {
            billable_hours: billable,
        });
    }

    compose(pay_rate, work, cost, options, margin)
}

/// Calculates a charge rate from caller-supplied configuration.
///
/// Inputs are validated first (see
/// [`validate_rate_inputs`](super::validate_rate_inputs)); a configuration
/// whose unbilled time leaves zero or negative billable hours is rejected
/// with [`EngineError::BillableCapacityExhausted`]. `margin` defaults to
/// `cost.default_margin` and can be overridden to preview other margins.
///
/// # Examples
///
/// ```
/// use charge_rate_engine::calculation::calculate_charge_rate;
/// use charge_rate_engine::models::{BillableOptions, CostConfig, WorkTimeConfig};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_charge_rate(
///     Decimal::from_str("20.50").unwrap(),
///     &WorkTimeConfig::standard(),
///     &CostConfig::standard(),
///     &BillableOptions::default(),
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(result.total_hours, Decimal::from(1976));
/// assert_eq!(result.billable_hours, Decimal::from(1444));
/// assert_eq!(result.base_wage, Decimal::from(40508));
/// assert_eq!(result.charge_rate, result.cost_per_hour * Decimal::from_str("1.15").unwrap());
/// ```
pub fn calculate_charge_rate(
    pay_rate: Decimal,
    work: &WorkTimeConfig,
    cost: &CostConfig,
    options: &BillableOptions,
    margin: Option<Decimal>,
) -> EngineResult<CalculationResult> {
    let margin = margin.unwrap_or(cost.default_margin);
    let result = validated_composition(pay_rate, work, cost, options, margin)?.result;

    debug!(
        pay_rate = %pay_rate,
        margin = %margin,
        billable_hours = %result.billable_hours,
        charge_rate = %result.charge_rate,
        "Charge rate calculated"
    );

    Ok(result)
}

/// Calculates a charge rate and records how it was derived.
///
/// Validation and failure behaviour match [`calculate_charge_rate`]. The
/// returned trace has one step per stage of the calculation and carries any
/// warnings about unusual (but permitted) inputs.
pub fn explain_charge_rate(
    pay_rate: Decimal,
    work: &WorkTimeConfig,
    cost: &CostConfig,
    options: &BillableOptions,
    margin: Option<Decimal>,
) -> EngineResult<ChargeRateCalculation> {
    let start_time = Instant::now();
    let margin = margin.unwrap_or(cost.default_margin);
    let composition = validated_composition(pay_rate, work, cost, options, margin)?;
    let steps = audit_steps(work, cost, options, margin, &composition);

    Ok(ChargeRateCalculation {
        result: composition.result,
        margin,
        audit_trace: AuditTrace {
            steps,
            warnings: collect_warnings(cost, margin),
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

fn audit_steps(
    work: &WorkTimeConfig,
    cost: &CostConfig,
    options: &BillableOptions,
    margin: Decimal,
    composition: &Composition,
) -> Vec<AuditStep> {
    let result = &composition.result;
    let unbilled = &composition.unbilled;
    let days_per_week = work.days_per_week.get();

    let training_note = if options.include_training_time {
        "training weeks billable".to_string()
    } else {
        format!("+ {} training weeks", work.training_weeks.normalize())
    };

    let steps = vec![
        (
            "total_hours",
            "Total Annual Hours",
            serde_json::json!({
                "hours_per_day": work.hours_per_day.normalize().to_string(),
                "days_per_week": days_per_week,
                "weeks_per_year": work.weeks_per_year
            }),
            serde_json::json!({
                "total_hours": result.total_hours.normalize().to_string()
            }),
            format!(
                "{} x {} x {} = {}",
                work.hours_per_day.normalize(),
                days_per_week,
                work.weeks_per_year,
                result.total_hours.normalize()
            ),
        ),
        (
            "unbilled_time",
            "Unbilled Time",
            serde_json::json!({
                "annual_leave_days": work.annual_leave_days.normalize().to_string(),
                "public_holidays": work.public_holidays.normalize().to_string(),
                "sick_leave_days": work.sick_leave_days.normalize().to_string(),
                "adverse_weather_days": cost.adverse_weather_days,
                "training_weeks": work.training_weeks.normalize().to_string(),
                "billable_options": options
            }),
            serde_json::json!({
                "unbilled_days": unbilled.unbilled_days.normalize().to_string(),
                "unbilled_weeks": unbilled.unbilled_weeks.normalize().to_string(),
                "billable_weeks": unbilled.billable_weeks.normalize().to_string()
            }),
            format!(
                "{} unbilled days / {} days per week {} = {} unbilled weeks",
                unbilled.unbilled_days.normalize(),
                days_per_week,
                training_note,
                unbilled.unbilled_weeks.normalize()
            ),
        ),
        (
            "billable_hours",
            "Billable Hours",
            serde_json::json!({
                "billable_weeks": unbilled.billable_weeks.normalize().to_string()
            }),
            serde_json::json!({
                "billable_hours": result.billable_hours.normalize().to_string()
            }),
            format!(
                "{} x {} x {} = {}",
                work.hours_per_day.normalize(),
                days_per_week,
                unbilled.billable_weeks.normalize(),
                result.billable_hours.normalize()
            ),
        ),
        (
            "base_wage",
            "Base Wage",
            serde_json::json!({
                "pay_rate": result.pay_rate.normalize().to_string(),
                "total_hours": result.total_hours.normalize().to_string()
            }),
            serde_json::json!({
                "base_wage": result.base_wage.normalize().to_string()
            }),
            format!(
                "${} x {} = ${}",
                result.pay_rate.normalize(),
                result.total_hours.normalize(),
                result.base_wage.normalize()
            ),
        ),
        (
            "on_costs",
            "On-Costs",
            serde_json::json!({
                "base_wage": result.base_wage.normalize().to_string(),
                "cost_config": cost,
                "leave_loading_hours": result.total_hours.min(LEAVE_LOADING_HOURS_CAP).normalize().to_string()
            }),
            serde_json::json!({
                "oncosts": result.oncosts,
                "total_on_costs": composition.total_on_costs.normalize().to_string()
            }),
            format!(
                "On-costs total ${} (leave loading on {} hours)",
                composition.total_on_costs.normalize(),
                result.total_hours.min(LEAVE_LOADING_HOURS_CAP).normalize()
            ),
        ),
        (
            "total_cost",
            "Total Cost",
            serde_json::json!({
                "base_wage": result.base_wage.normalize().to_string(),
                "total_on_costs": composition.total_on_costs.normalize().to_string()
            }),
            serde_json::json!({
                "total_cost": result.total_cost.normalize().to_string()
            }),
            format!(
                "${} + ${} = ${}",
                result.base_wage.normalize(),
                composition.total_on_costs.normalize(),
                result.total_cost.normalize()
            ),
        ),
        (
            "cost_per_hour",
            "Cost Per Billable Hour",
            serde_json::json!({
                "total_cost": result.total_cost.normalize().to_string(),
                "billable_hours": result.billable_hours.normalize().to_string()
            }),
            serde_json::json!({
                "cost_per_hour": result.cost_per_hour.normalize().to_string()
            }),
            format!(
                "${} / {} = ${}",
                result.total_cost.normalize(),
                result.billable_hours.normalize(),
                result.cost_per_hour.normalize()
            ),
        ),
        (
            "charge_rate",
            "Charge Rate",
            serde_json::json!({
                "cost_per_hour": result.cost_per_hour.normalize().to_string(),
                "margin": margin.normalize().to_string()
            }),
            serde_json::json!({
                "charge_rate": result.charge_rate.normalize().to_string()
            }),
            format!(
                "${} x (1 + {}) = ${}",
                result.cost_per_hour.normalize(),
                margin.normalize(),
                result.charge_rate.normalize()
            ),
        ),
    ];

    steps
        .into_iter()
        .zip(1u32..)
        .map(|((rule_id, rule_name, input, output, reasoning), step_number)| AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn standard_rate(pay_rate: &str, margin: Option<Decimal>) -> EngineResult<CalculationResult> {
        calculate_charge_rate(
            dec(pay_rate),
            &WorkTimeConfig::standard(),
            &CostConfig::standard(),
            &BillableOptions::default(),
            margin,
        )
    }

    /// RC-001: full chain at $20.50 on the standard configuration
    #[test]
    fn test_standard_chain_at_20_50() {
        let result = standard_rate("20.50", None).unwrap();

        assert_eq!(result.pay_rate, dec("20.50"));
        assert_eq!(result.total_hours, dec("1976"));
        assert_eq!(result.billable_hours, dec("1444"));
        assert_eq!(result.base_wage, dec("40508"));
        assert_eq!(result.oncosts.leave_loading, dec("545.3"));
        assert_eq!(result.oncosts.total(), dec("17108.594"));
        assert_eq!(result.total_cost, dec("57616.594"));
        assert_eq!(result.cost_per_hour, dec("57616.594") / dec("1444"));
        assert_eq!(result.charge_rate, result.cost_per_hour * dec("1.15"));
    }

    #[test]
    fn test_standard_charge_rate_rounds_to_45_89() {
        let result = standard_rate("20.50", None).unwrap();
        assert_eq!(result.charge_rate.round_dp(2), dec("45.89"));
    }

    /// RC-002: margin override does not touch the configuration
    #[test]
    fn test_margin_override() {
        let cost = CostConfig::standard();
        let zero = calculate_charge_rate(
            dec("20.50"),
            &WorkTimeConfig::standard(),
            &cost,
            &BillableOptions::default(),
            Some(Decimal::ZERO),
        )
        .unwrap();

        assert_eq!(zero.charge_rate, zero.cost_per_hour);
        assert_eq!(cost.default_margin, dec("0.15"));
    }

    #[test]
    fn test_margin_of_minus_one_gives_zero_rate() {
        let result = standard_rate("20.50", Some(Decimal::NEGATIVE_ONE)).unwrap();
        assert_eq!(result.charge_rate, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_margin_is_rejected() {
        let result = standard_rate("20.50", Some(dec("-1.5")));
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfiguration { ref field, .. }) if field == "margin"
        ));
    }

    /// RC-003: unbilled time exceeding the year is rejected
    #[test]
    fn test_exhausted_capacity_is_rejected() {
        let work = WorkTimeConfig {
            annual_leave_days: dec("280"),
            ..WorkTimeConfig::standard()
        };
        let result = calculate_charge_rate(
            dec("20.50"),
            &work,
            &CostConfig::standard(),
            &BillableOptions::default(),
            None,
        );

        match result {
            Err(EngineError::BillableCapacityExhausted { billable_hours }) => {
                assert!(billable_hours < Decimal::ZERO);
            }
            other => panic!("Expected BillableCapacityExhausted, got {:?}", other),
        }
    }

    #[test]
    fn test_exactly_zero_billable_hours_is_rejected() {
        let work = WorkTimeConfig {
            training_weeks: dec("43"),
            ..WorkTimeConfig::standard()
        };
        let result = calculate_charge_rate(
            dec("20.50"),
            &work,
            &CostConfig::standard(),
            &BillableOptions::default(),
            None,
        );

        assert_eq!(
            result,
            Err(EngineError::BillableCapacityExhausted {
                billable_hours: Decimal::ZERO
            })
        );
    }

    #[test]
    fn test_compose_reports_zero_billable_as_non_finite() {
        let work = WorkTimeConfig {
            training_weeks: dec("43"),
            ..WorkTimeConfig::standard()
        };
        let result = compose_charge_rate(
            dec("20.50"),
            &work,
            &CostConfig::standard(),
            &BillableOptions::default(),
            None,
        );

        assert_eq!(result, Err(EngineError::non_finite("cost_per_hour")));
    }

    #[test]
    fn test_compose_passes_negative_billable_through() {
        let work = WorkTimeConfig {
            training_weeks: dec("44"),
            ..WorkTimeConfig::standard()
        };
        let result = compose_charge_rate(
            dec("20.50"),
            &work,
            &CostConfig::standard(),
            &BillableOptions::default(),
            None,
        )
        .unwrap();

        assert_eq!(result.billable_hours, dec("-38"));
        assert!(result.charge_rate < Decimal::ZERO);
    }

    #[test]
    fn test_compose_matches_calculate_for_valid_input() {
        let composed = compose_charge_rate(
            dec("24.10"),
            &WorkTimeConfig::standard(),
            &CostConfig::standard(),
            &BillableOptions::default(),
            None,
        )
        .unwrap();
        let calculated = standard_rate("24.10", None).unwrap();

        assert_eq!(composed, calculated);
    }

    #[test]
    fn test_explain_records_eight_numbered_steps() {
        let calculation = explain_charge_rate(
            dec("20.50"),
            &WorkTimeConfig::standard(),
            &CostConfig::standard(),
            &BillableOptions::default(),
            None,
        )
        .unwrap();

        let steps = &calculation.audit_trace.steps;
        assert_eq!(steps.len(), 8);
        assert_eq!(
            steps.iter().map(|s| s.step_number).collect::<Vec<_>>(),
            (1..=8).collect::<Vec<u32>>()
        );
        assert_eq!(steps[0].rule_id, "total_hours");
        assert_eq!(steps[0].reasoning, "7.6 x 5 x 52 = 1976");
        assert_eq!(
            steps[1].reasoning,
            "45 unbilled days / 5 days per week + 5 training weeks = 14 unbilled weeks"
        );
        assert_eq!(steps[2].output["billable_hours"].as_str().unwrap(), "1444");
        assert_eq!(steps[3].reasoning, "$20.5 x 1976 = $40508");
        assert_eq!(steps[7].rule_id, "charge_rate");
        assert_eq!(calculation.margin, dec("0.15"));
        assert!(calculation.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_explain_notes_billable_training() {
        let options = BillableOptions {
            include_training_time: true,
            ..BillableOptions::default()
        };
        let calculation = explain_charge_rate(
            dec("20.50"),
            &WorkTimeConfig::standard(),
            &CostConfig::standard(),
            &options,
            None,
        )
        .unwrap();

        assert!(
            calculation.audit_trace.steps[1]
                .reasoning
                .contains("training weeks billable")
        );
        assert_eq!(calculation.result.billable_hours, dec("1634"));
    }

    #[test]
    fn test_explain_matches_calculate() {
        let calculation = explain_charge_rate(
            dec("20.50"),
            &WorkTimeConfig::standard(),
            &CostConfig::standard(),
            &BillableOptions::default(),
            Some(dec("0.2")),
        )
        .unwrap();

        assert_eq!(calculation.result, standard_rate("20.50", Some(dec("0.2"))).unwrap());
    }

    #[test]
    fn test_explain_carries_negative_margin_warning() {
        let calculation = explain_charge_rate(
            dec("20.50"),
            &WorkTimeConfig::standard(),
            &CostConfig::standard(),
            &BillableOptions::default(),
            Some(dec("-0.05")),
        )
        .unwrap();

        assert_eq!(calculation.audit_trace.warnings.len(), 1);
        assert_eq!(calculation.audit_trace.warnings[0].code, "NEGATIVE_MARGIN");
    }

    #[test]
    fn test_explain_rejects_invalid_input() {
        let work = WorkTimeConfig {
            hours_per_day: Decimal::ZERO,
            ..WorkTimeConfig::standard()
        };
        let result = explain_charge_rate(
            dec("20.50"),
            &work,
            &CostConfig::standard(),
            &BillableOptions::default(),
            None,
        );

        assert!(matches!(result, Err(EngineError::InvalidConfiguration { .. })));
    }

    /// RC-004: day counts that overflow are reported as a non-finite result
    #[test]
    fn test_overflowing_day_counts_are_reported() {
        let work = WorkTimeConfig {
            annual_leave_days: Decimal::MAX,
            public_holidays: Decimal::MAX,
            ..WorkTimeConfig::standard()
        };
        assert!(
            validate_rate_inputs(dec("20.50"), &work, &CostConfig::standard(), dec("0.15")).is_ok()
        );

        let result = calculate_charge_rate(
            dec("20.50"),
            &work,
            &CostConfig::standard(),
            &BillableOptions::default(),
            None,
        );
        assert_eq!(result, Err(EngineError::non_finite("billable_hours")));

        let composed = compose_charge_rate(
            dec("20.50"),
            &work,
            &CostConfig::standard(),
            &BillableOptions::default(),
            None,
        );
        assert_eq!(composed, Err(EngineError::non_finite("unbilled_time")));
    }

    /// RC-005: on-costs that overflow are reported as a non-finite result
    #[test]
    fn test_overflowing_on_costs_are_reported() {
        let cost = CostConfig {
            admin_rate: dec("1000000000"),
            ..CostConfig::standard()
        };
        let result = calculate_charge_rate(
            dec("10000000000000000000"),
            &WorkTimeConfig::standard(),
            &cost,
            &BillableOptions::default(),
            None,
        );
        assert_eq!(result, Err(EngineError::non_finite("on_costs")));

        let explained = explain_charge_rate(
            dec("10000000000000000000"),
            &WorkTimeConfig::standard(),
            &cost,
            &BillableOptions::default(),
            None,
        );
        assert_eq!(explained.map(|c| c.result), Err(EngineError::non_finite("on_costs")));
    }
}
