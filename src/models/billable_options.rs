//! Billability toggles for non-working time.

use serde::{Deserialize, Serialize};

/// Flags choosing which categories of non-working time are still charged
/// to the client.
///
/// Time that is not billable reduces billable capacity. By default nothing
/// is billed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillableOptions {
    /// Bill annual leave days to the client.
    pub include_annual_leave: bool,
    /// Bill public holidays to the client.
    pub include_public_holidays: bool,
    /// Bill sick leave days to the client.
    pub include_sick_leave: bool,
    /// Bill formal training weeks to the client.
    pub include_training_time: bool,
    /// Bill adverse-weather days to the client.
    pub include_adverse_weather: bool,
}

impl BillableOptions {
    /// Returns options where every category of non-working time is billed.
    pub fn all() -> Self {
        Self {
            include_annual_leave: true,
            include_public_holidays: true,
            include_sick_leave: true,
            include_training_time: true,
            include_adverse_weather: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bills_nothing() {
        let options = BillableOptions::default();
        assert!(!options.include_annual_leave);
        assert!(!options.include_public_holidays);
        assert!(!options.include_sick_leave);
        assert!(!options.include_training_time);
        assert!(!options.include_adverse_weather);
    }

    #[test]
    fn test_all_bills_everything() {
        let options = BillableOptions::all();
        assert!(options.include_annual_leave);
        assert!(options.include_public_holidays);
        assert!(options.include_sick_leave);
        assert!(options.include_training_time);
        assert!(options.include_adverse_weather);
    }

    #[test]
    fn test_missing_flags_deserialize_as_false() {
        let options: BillableOptions =
            serde_json::from_str(r#"{"include_training_time": true}"#).unwrap();
        assert!(options.include_training_time);
        assert!(!options.include_annual_leave);
    }
}
