//! Cost configuration model.
//!
//! This module defines [`CostConfig`], the on-cost rates and fixed annual
//! costs applied on top of a worker's base wage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// On-cost rates and fixed costs applied to a base wage.
///
/// Rates are fractions (0.115 means 11.5%). They are not hard-capped at 1.0.
///
/// # Example
///
/// ```
/// use charge_rate_engine::models::CostConfig;
/// use rust_decimal::Decimal;
///
/// let costs = CostConfig::standard();
/// assert_eq!(costs.super_rate, Decimal::new(115, 3));
/// assert_eq!(costs.default_margin, Decimal::new(15, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostConfig {
    /// Superannuation guarantee rate.
    pub super_rate: Decimal,
    /// Workers' compensation premium rate.
    pub wc_rate: Decimal,
    /// Payroll tax rate.
    pub payroll_tax_rate: Decimal,
    /// Leave loading rate applied to capped annual-leave hours.
    pub leave_loading: Decimal,
    /// Administration overhead rate.
    pub admin_rate: Decimal,
    /// Fixed annual study (off-the-job training) cost in dollars.
    pub study_cost: Decimal,
    /// Fixed annual personal protective equipment cost in dollars.
    pub ppe_cost: Decimal,
    /// Markup applied to the fully-loaded cost per hour.
    pub default_margin: Decimal,
    /// Additional unbilled days per year lost to adverse weather.
    pub adverse_weather_days: u32,
}

impl CostConfig {
    /// Returns the standard on-cost configuration: super 11.5%, workers'
    /// comp 4.7%, payroll tax 4.85%, leave loading 17.5%, admin 17%,
    /// study $850, PPE $300, margin 15% and 5 adverse-weather days.
    pub fn standard() -> Self {
        Self {
            super_rate: Decimal::new(115, 3),
            wc_rate: Decimal::new(47, 3),
            payroll_tax_rate: Decimal::new(485, 4),
            leave_loading: Decimal::new(175, 3),
            admin_rate: Decimal::new(17, 2),
            study_cost: Decimal::from(850),
            ppe_cost: Decimal::from(300),
            default_margin: Decimal::new(15, 2),
            adverse_weather_days: 5,
        }
    }

    /// Returns a copy of this configuration with a different default margin.
    pub fn with_margin(self, margin: Decimal) -> Self {
        Self {
            default_margin: margin,
            ..self
        }
    }
}

impl Default for CostConfig {
    fn default() -> Self {
        Self::standard()
    }
}
