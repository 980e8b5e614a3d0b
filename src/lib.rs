//! Charge Rate Engine
//!
//! This crate converts a worker's hourly pay rate into the hourly rate
//! charged to a client. It accounts for the hours a worker can actually be
//! billed, the employer on-costs carried over the year, and a configurable
//! profit margin.
//!
//! # Example
//!
//! ```
//! use charge_rate_engine::calculation::calculate_charge_rate;
//! use charge_rate_engine::models::{BillableOptions, CostConfig, WorkTimeConfig};
//! use rust_decimal::Decimal;
//!
//! let result = calculate_charge_rate(
//!     Decimal::new(2050, 2),
//!     &WorkTimeConfig::standard(),
//!     &CostConfig::standard(),
//!     &BillableOptions::default(),
//!     None,
//! )
//! .unwrap();
//!
//! assert_eq!(result.total_hours, Decimal::from(1976));
//! assert_eq!(result.billable_hours, Decimal::from(1444));
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
