//! Work-time configuration model.
//!
//! This module defines [`WorkTimeConfig`], the description of a standard
//! working year for one worker category.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Standard ordinary hours per day (7.6, one fifth of a 38-hour week).
pub const STANDARD_HOURS_PER_DAY: Decimal = Decimal::from_parts(76, 0, 0, false, 1);

/// Standard working days per week.
pub const STANDARD_DAYS_PER_WEEK: NonZeroU32 = match NonZeroU32::new(5) {
    Some(days) => days,
    None => panic!("days per week must be non-zero"),
};

/// Standard weeks per year.
pub const STANDARD_WEEKS_PER_YEAR: u32 = 52;

/// Describes a standard work year for one worker category.
///
/// Leave and holidays are counted in days, training in weeks. The
/// `days_per_week` divisor is non-zero by construction.
///
/// # Example
///
/// ```
/// use charge_rate_engine::models::WorkTimeConfig;
/// use rust_decimal::Decimal;
///
/// let config = WorkTimeConfig::standard();
/// assert_eq!(config.hours_per_day, Decimal::new(76, 1));
/// assert_eq!(config.days_per_week.get(), 5);
/// assert_eq!(config.weeks_per_year, 52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTimeConfig {
    /// Ordinary hours worked per day.
    pub hours_per_day: Decimal,
    /// Working days per week.
    pub days_per_week: NonZeroU32,
    /// Weeks in the working year.
    pub weeks_per_year: u32,
    /// Annual leave days per year.
    pub annual_leave_days: Decimal,
    /// Public holidays per year.
    pub public_holidays: Decimal,
    /// Sick leave days per year.
    pub sick_leave_days: Decimal,
    /// Weeks per year spent in formal off-the-job training.
    pub training_weeks: Decimal,
}

impl WorkTimeConfig {
    /// Returns the standard work year: 7.6 hours/day, 5 days/week, 52 weeks,
    /// 20 annual leave days, 10 public holidays, 10 sick days and 5 training weeks.
    pub fn standard() -> Self {
        Self {
            hours_per_day: STANDARD_HOURS_PER_DAY,
            days_per_week: STANDARD_DAYS_PER_WEEK,
            weeks_per_year: STANDARD_WEEKS_PER_YEAR,
            annual_leave_days: Decimal::from(20),
            public_holidays: Decimal::from(10),
            sick_leave_days: Decimal::from(10),
            training_weeks: Decimal::from(5),
        }
    }

    /// Returns `days_per_week` as a decimal.
    pub fn days_per_week_decimal(&self) -> Decimal {
        Decimal::from(self.days_per_week.get())
    }
}

impl Default for WorkTimeConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_work_year_values() {
        let config = WorkTimeConfig::standard();
        assert_eq!(config.hours_per_day, Decimal::new(76, 1));
        assert_eq!(config.days_per_week.get(), 5);
        assert_eq!(config.weeks_per_year, 52);
        assert_eq!(config.annual_leave_days, Decimal::from(20));
        assert_eq!(config.public_holidays, Decimal::from(10));
        assert_eq!(config.sick_leave_days, Decimal::from(10));
        assert_eq!(config.training_weeks, Decimal::from(5));
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(WorkTimeConfig::default(), WorkTimeConfig::standard());
    }

    #[test]
    fn test_deserialize_work_config() {
        let json = r#"{
            "hours_per_day": "8",
            "days_per_week": 4,
            "weeks_per_year": 48,
            "annual_leave_days": "20",
            "public_holidays": "11",
            "sick_leave_days": "10",
            "training_weeks": "2.5"
        }"#;

        let config: WorkTimeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.hours_per_day, Decimal::from(8));
        assert_eq!(config.days_per_week.get(), 4);
        assert_eq!(config.weeks_per_year, 48);
        assert_eq!(config.training_weeks, Decimal::new(25, 1));
    }

    #[test]
    fn test_zero_days_per_week_is_rejected_on_deserialize() {
        let json = r#"{
            "hours_per_day": "8",
            "days_per_week": 0,
            "weeks_per_year": 48,
            "annual_leave_days": "20",
            "public_holidays": "11",
            "sick_leave_days": "10",
            "training_weeks": "0"
        }"#;

        let result: Result<WorkTimeConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_decimals_serialize_as_strings() {
        let json = serde_json::to_string(&WorkTimeConfig::standard()).unwrap();
        assert!(json.contains("\"hours_per_day\":\"7.6\""));
        assert!(json.contains("\"days_per_week\":5"));
    }
}
