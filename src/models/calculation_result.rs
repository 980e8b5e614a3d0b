//! Calculation result models for the Charge Rate Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs from a charge rate calculation,
//! including the on-cost breakdown and audit traces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The dollar breakdown of on-costs for one year at the evaluated pay rate.
///
/// # Example
///
/// ```
/// use charge_rate_engine::models::OnCosts;
/// use rust_decimal::Decimal;
///
/// let oncosts = OnCosts {
///     superannuation: Decimal::from(100),
///     workers_comp: Decimal::from(40),
///     payroll_tax: Decimal::from(50),
///     leave_loading: Decimal::from(20),
///     study_cost: Decimal::from(850),
///     ppe_cost: Decimal::from(300),
///     admin_cost: Decimal::from(170),
/// };
/// assert_eq!(oncosts.total(), Decimal::from(1530));
/// assert_eq!(oncosts.fixed_total(), Decimal::from(1150));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnCosts {
    /// Superannuation guarantee contribution.
    pub superannuation: Decimal,
    /// Workers' compensation premium.
    pub workers_comp: Decimal,
    /// Payroll tax.
    pub payroll_tax: Decimal,
    /// Leave loading on capped annual-leave hours.
    pub leave_loading: Decimal,
    /// Fixed study cost.
    pub study_cost: Decimal,
    /// Fixed PPE cost.
    pub ppe_cost: Decimal,
    /// Administration overhead.
    pub admin_cost: Decimal,
}

impl OnCosts {
    fn components(&self) -> [Decimal; 7] {
        [
            self.superannuation,
            self.workers_comp,
            self.payroll_tax,
            self.leave_loading,
            self.study_cost,
            self.ppe_cost,
            self.admin_cost,
        ]
    }

    /// Returns the sum of all seven on-cost components.
    pub fn total(&self) -> Decimal {
        self.components().iter().sum()
    }

    /// Returns the sum of all seven components, or `None` on overflow.
    pub fn checked_total(&self) -> Option<Decimal> {
        self.components()
            .iter()
            .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(*value))
    }

    /// Returns the fixed components (study and PPE), which do not scale with pay.
    pub fn fixed_total(&self) -> Decimal {
        self.study_cost + self.ppe_cost
    }
}

/// The complete result of one charge rate evaluation.
///
/// No rounding is applied; formatting for display belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The hourly pay rate that was evaluated.
    pub pay_rate: Decimal,
    /// Total annual hours worked.
    pub total_hours: Decimal,
    /// Annual hours that can be invoiced to the client.
    pub billable_hours: Decimal,
    /// Annual base wage (pay rate x total hours).
    pub base_wage: Decimal,
    /// The on-cost breakdown.
    pub oncosts: OnCosts,
    /// Base wage plus all on-costs.
    pub total_cost: Decimal,
    /// Total cost spread over billable hours.
    pub cost_per_hour: Decimal,
    /// The rate charged to the client per billable hour, margin included.
    pub charge_rate: Decimal,
}

/// One stage of a charge rate derivation, such as total hours or on-costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// Position in the derivation, starting at 1.
    pub step_number: u32,
    /// Stable identifier of the stage (e.g. "billable_hours").
    pub rule_id: String,
    /// Display name of the stage.
    pub rule_name: String,
    /// Figures the stage consumed.
    pub input: serde_json::Value,
    /// Figures the stage produced.
    pub output: serde_json::Value,
    /// The stage's arithmetic written out, e.g. "7.6 x 5 x 52 = 1976".
    pub reasoning: String,
}

/// An input that was accepted but looks like a data-entry mistake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// Warning code (e.g. "NEGATIVE_MARGIN").
    pub code: String,
    /// Which input triggered the warning, and its value.
    pub message: String,
    /// "medium" or "high".
    pub severity: String,
}

/// How a charge rate was derived, stage by stage.
///
/// # Example
///
/// ```
/// use charge_rate_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// Stages in derivation order.
    pub steps: Vec<AuditStep>,
    /// Warnings about the inputs; never block the calculation.
    pub warnings: Vec<AuditWarning>,
    /// Wall-clock time spent, in microseconds.
    pub duration_us: u64,
}
