//! Validation boundary in front of rate composition.
//!
//! Time and cost accounting trust their inputs. Everything that reaches
//! [`calculate_charge_rate`](super::calculate_charge_rate) first passes
//! through [`validate_rate_inputs`], which rejects structurally invalid
//! configuration with [`EngineError::InvalidConfiguration`]. Unusual but
//! permitted values are reported as [`AuditWarning`]s instead.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditWarning, CostConfig, WorkTimeConfig};

/// Upper bound for `hours_per_day`.
pub const MAX_HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Upper bound for `days_per_week`.
pub const MAX_DAYS_PER_WEEK: u32 = 7;

/// Upper bound for `weeks_per_year`.
pub const MAX_WEEKS_PER_YEAR: u32 = 53;

fn require_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::invalid(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(())
}

/// Validates a work-time configuration.
///
/// `hours_per_day` and `weeks_per_year` must be positive and no larger than
/// a day or a year can hold; leave, holiday, sick and training counts must
/// not be negative. `days_per_week` is non-zero by type.
pub fn validate_work_config(work: &WorkTimeConfig) -> EngineResult<()> {
    if work.hours_per_day <= Decimal::ZERO || work.hours_per_day > MAX_HOURS_PER_DAY {
        return Err(EngineError::invalid(
            "hours_per_day",
            format!("must be in (0, 24] (got {})", work.hours_per_day),
        ));
    }
    if work.days_per_week.get() > MAX_DAYS_PER_WEEK {
        return Err(EngineError::invalid(
            "days_per_week",
            format!("must be at most 7 (got {})", work.days_per_week),
        ));
    }
    if work.weeks_per_year == 0 || work.weeks_per_year > MAX_WEEKS_PER_YEAR {
        return Err(EngineError::invalid(
            "weeks_per_year",
            format!("must be between 1 and 53 (got {})", work.weeks_per_year),
        ));
    }

    require_non_negative("annual_leave_days", work.annual_leave_days)?;
    require_non_negative("public_holidays", work.public_holidays)?;
    require_non_negative("sick_leave_days", work.sick_leave_days)?;
    require_non_negative("training_weeks", work.training_weeks)?;
    Ok(())
}

/// Validates a cost configuration: no rate or fixed cost may be negative,
/// and the default margin must not be below -1.
pub fn validate_cost_config(cost: &CostConfig) -> EngineResult<()> {
    require_non_negative("super_rate", cost.super_rate)?;
    require_non_negative("wc_rate", cost.wc_rate)?;
    require_non_negative("payroll_tax_rate", cost.payroll_tax_rate)?;
    require_non_negative("leave_loading", cost.leave_loading)?;
    require_non_negative("admin_rate", cost.admin_rate)?;
    require_non_negative("study_cost", cost.study_cost)?;
    require_non_negative("ppe_cost", cost.ppe_cost)?;
    validate_margin_field("default_margin", cost.default_margin)
}

/// Validates a margin. Margins below -1 would produce a negative charge rate.
///
/// # Examples
///
/// ```
/// use charge_rate_engine::calculation::validate_margin;
/// use rust_decimal::Decimal;
///
/// assert!(validate_margin(Decimal::new(15, 2)).is_ok());
/// assert!(validate_margin(Decimal::NEGATIVE_ONE).is_ok());
/// assert!(validate_margin(Decimal::new(-11, 1)).is_err());
/// ```
pub fn validate_margin(margin: Decimal) -> EngineResult<()> {
    validate_margin_field("margin", margin)
}

fn validate_margin_field(field: &str, margin: Decimal) -> EngineResult<()> {
    if margin < Decimal::NEGATIVE_ONE {
        return Err(EngineError::invalid(
            field,
            format!("must not be less than -1 (got {})", margin),
        ));
    }
    Ok(())
}

/// Validates every input to a charge rate calculation.
///
/// Checks run in a fixed order (pay rate, work time, costs, margin) and the
/// first failure is returned.
pub fn validate_rate_inputs(
    pay_rate: Decimal,
    work: &WorkTimeConfig,
    cost: &CostConfig,
    margin: Decimal,
) -> EngineResult<()> {
    require_non_negative("pay_rate", pay_rate)?;
    validate_work_config(work)?;
    validate_cost_config(cost)?;
    validate_margin(margin)
}

/// Collects warnings for permitted but unusual inputs.
///
/// Rates above 100% and negative margins are allowed but usually indicate a
/// data-entry mistake.
pub fn collect_warnings(cost: &CostConfig, margin: Decimal) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    let rates = [
        ("super_rate", cost.super_rate),
        ("wc_rate", cost.wc_rate),
        ("payroll_tax_rate", cost.payroll_tax_rate),
        ("leave_loading", cost.leave_loading),
        ("admin_rate", cost.admin_rate),
    ];
    for (field, rate) in rates {
        if rate > Decimal::ONE {
            warnings.push(AuditWarning {
                code: "RATE_ABOVE_ONE".to_string(),
                message: format!("{} of {} exceeds 100%", field, rate.normalize()),
                severity: "medium".to_string(),
            });
        }
    }

    if margin.is_sign_negative() && !margin.is_zero() {
        warnings.push(AuditWarning {
            code: "NEGATIVE_MARGIN".to_string(),
            message: format!(
                "Margin of {} prices below cost",
                margin.normalize()
            ),
            severity: "high".to_string(),
        });
    }

    warnings
}
