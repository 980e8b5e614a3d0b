//! Margin previews and profitability figures.
//!
//! Helpers for comparing alternative margins and reading the annual margin
//! out of a [`CalculationResult`] without touching any configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rate_composition::calculate_charge_rate;
use crate::error::{EngineError, EngineResult};
use crate::models::{BillableOptions, CalculationResult, CostConfig, WorkTimeConfig};

/// The charge rate that a particular margin would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginPreview {
    /// The margin that was previewed.
    pub margin: Decimal,
    /// The resulting charge rate.
    pub charge_rate: Decimal,
}

/// Annual profitability of a charge rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profitability {
    /// Charge rate less cost per hour.
    pub margin_per_hour: Decimal,
    /// Charge rate multiplied by billable hours.
    pub annual_revenue: Decimal,
    /// Annual revenue less total cost.
    pub annual_margin: Decimal,
}

/// Computes the charge rate for each margin, in the order given.
///
/// Every margin goes through the same validation as
/// [`calculate_charge_rate`]; the first invalid margin fails the preview.
pub fn preview_margins(
    pay_rate: Decimal,
    work: &WorkTimeConfig,
    cost: &CostConfig,
    options: &BillableOptions,
    margins: &[Decimal],
) -> EngineResult<Vec<MarginPreview>> {
    margins
        .iter()
        .map(|&margin| {
            calculate_charge_rate(pay_rate, work, cost, options, Some(margin)).map(|result| {
                MarginPreview {
                    margin,
                    charge_rate: result.charge_rate,
                }
            })
        })
        .collect()
}

/// Returns the margin a given charge rate represents over the result's
/// cost per hour: `charge_rate / cost_per_hour - 1`.
///
/// # Examples
///
/// ```
/// use charge_rate_engine::calculation::{calculate_charge_rate, implied_margin};
/// use charge_rate_engine::models::{BillableOptions, CostConfig, WorkTimeConfig};
/// use rust_decimal::Decimal;
///
/// let result = calculate_charge_rate(
///     Decimal::from(25),
///     &WorkTimeConfig::standard(),
///     &CostConfig::standard(),
///     &BillableOptions::default(),
///     None,
/// )
/// .unwrap();
///
/// // Charging exactly the cost per hour is a zero margin.
/// let margin = implied_margin(&result, result.cost_per_hour).unwrap();
/// assert_eq!(margin, Decimal::ZERO);
/// ```
pub fn implied_margin(result: &CalculationResult, charge_rate: Decimal) -> EngineResult<Decimal> {
    charge_rate
        .checked_div(result.cost_per_hour)
        .and_then(|ratio| ratio.checked_sub(Decimal::ONE))
        .ok_or_else(|| EngineError::non_finite("implied_margin"))
}

/// Derives annual profitability figures from a calculation result.
///
/// Figures that cannot be represented are reported as
/// [`EngineError::NonFiniteResult`].
pub fn profitability(result: &CalculationResult) -> EngineResult<Profitability> {
    let margin_per_hour = result
        .charge_rate
        .checked_sub(result.cost_per_hour)
        .ok_or_else(|| EngineError::non_finite("margin_per_hour"))?;
    let annual_revenue = result
        .charge_rate
        .checked_mul(result.billable_hours)
        .ok_or_else(|| EngineError::non_finite("annual_revenue"))?;
    let annual_margin = annual_revenue
        .checked_sub(result.total_cost)
        .ok_or_else(|| EngineError::non_finite("annual_margin"))?;

    Ok(Profitability {
        margin_per_hour,
        annual_revenue,
        annual_margin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OnCosts;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn round_numbers_result() -> CalculationResult {
        CalculationResult {
            pay_rate: dec("20"),
            total_hours: dec("2000"),
            billable_hours: dec("1600"),
            base_wage: dec("40000"),
            oncosts: OnCosts {
                superannuation: dec("4000"),
                workers_comp: Decimal::ZERO,
                payroll_tax: Decimal::ZERO,
                leave_loading: Decimal::ZERO,
                study_cost: Decimal::ZERO,
                ppe_cost: Decimal::ZERO,
                admin_cost: Decimal::ZERO,
            },
            total_cost: dec("44000"),
            cost_per_hour: dec("27.5"),
            charge_rate: dec("33"),
        }
    }

    #[test]
    fn test_preview_margins_preserves_order() {
        let margins = [dec("0.25"), Decimal::ZERO, dec("0.15")];
        let previews = preview_margins(
            dec("20.50"),
            &WorkTimeConfig::standard(),
            &CostConfig::standard(),
            &BillableOptions::default(),
            &margins,
        )
        .unwrap();

        assert_eq!(previews.len(), 3);
        assert_eq!(previews[0].margin, dec("0.25"));
        assert_eq!(previews[1].margin, Decimal::ZERO);
        assert_eq!(previews[2].margin, dec("0.15"));
        assert!(previews[0].charge_rate > previews[2].charge_rate);
        assert!(previews[2].charge_rate > previews[1].charge_rate);
        assert_eq!(previews[2].charge_rate, previews[1].charge_rate * dec("1.15"));
    }

    #[test]
    fn test_preview_margins_empty() {
        let previews = preview_margins(
            dec("20.50"),
            &WorkTimeConfig::standard(),
            &CostConfig::standard(),
            &BillableOptions::default(),
            &[],
        )
        .unwrap();
        assert!(previews.is_empty());
    }

    #[test]
    fn test_preview_margins_rejects_invalid_margin() {
        let result = preview_margins(
            dec("20.50"),
            &WorkTimeConfig::standard(),
            &CostConfig::standard(),
            &BillableOptions::default(),
            &[dec("0.1"), dec("-2")],
        );
        assert!(matches!(result, Err(EngineError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_implied_margin() {
        let result = round_numbers_result();
        assert_eq!(implied_margin(&result, dec("33")).unwrap(), dec("0.2"));
        assert_eq!(implied_margin(&result, dec("27.5")).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_implied_margin_with_zero_cost() {
        let mut result = round_numbers_result();
        result.cost_per_hour = Decimal::ZERO;
        assert_eq!(
            implied_margin(&result, dec("33")),
            Err(EngineError::non_finite("implied_margin"))
        );
    }

    #[test]
    fn test_profitability() {
        let figures = profitability(&round_numbers_result()).unwrap();

        assert_eq!(figures.margin_per_hour, dec("5.5"));
        assert_eq!(figures.annual_revenue, dec("52800"));
        assert_eq!(figures.annual_margin, dec("8800"));
    }

    #[test]
    fn test_profitability_reports_overflow() {
        let mut result = round_numbers_result();
        result.charge_rate = Decimal::MAX;
        result.billable_hours = dec("2");

        assert_eq!(
            profitability(&result),
            Err(EngineError::non_finite("annual_revenue"))
        );
    }

    #[test]
    fn test_implied_margin_reports_overflow() {
        let mut result = round_numbers_result();
        result.cost_per_hour = Decimal::ONE;

        assert_eq!(
            implied_margin(&result, Decimal::MIN),
            Err(EngineError::non_finite("implied_margin"))
        );
    }
}
