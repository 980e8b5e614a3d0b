//! Batch evaluation of worker profiles.
//!
//! Each profile is evaluated independently with its own default margin.
//! A profile that fails validation carries an [`EvaluationFailure`] instead
//! of a result; it never stops the rest of the batch.
//!
//! [`EvaluationFailure`]: crate::models::EvaluationFailure

use std::time::Instant;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::rate_composition::calculate_charge_rate;
use crate::models::WorkerProfile;

/// Counts of profile states after a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Profiles carrying a valid result.
    pub evaluated: usize,
    /// Profiles whose last evaluation failed.
    pub failed: usize,
    /// Profiles never evaluated since their last change.
    pub pending: usize,
}

impl BatchSummary {
    /// Tallies the state of each profile.
    pub fn from_profiles(profiles: &[WorkerProfile]) -> Self {
        profiles
            .iter()
            .fold(BatchSummary::default(), |mut summary, profile| {
                if profile.has_failed() {
                    summary.failed += 1;
                } else if profile.needs_evaluation() {
                    summary.pending += 1;
                } else {
                    summary.evaluated += 1;
                }
                summary
            })
    }
}

/// Evaluates one profile, returning a new profile stamped with `now`.
pub fn evaluate_profile(profile: &WorkerProfile, now: DateTime<Utc>) -> WorkerProfile {
    let outcome = calculate_charge_rate(
        profile.base_pay_rate(),
        profile.work_config(),
        profile.cost_config(),
        profile.billable_options(),
        Some(profile.cost_config().default_margin),
    );

    match outcome {
        Ok(result) => profile.with_result(result, now),
        Err(err) => {
            warn!(
                profile_id = %profile.id(),
                error = %err,
                "Profile evaluation failed"
            );
            profile.with_failure(&err, now)
        }
    }
}

/// Evaluates every profile, stamping each with the current time.
///
/// Returns new profiles in input order; the input is left untouched.
///
/// # Examples
///
/// ```
/// use charge_rate_engine::calculation::evaluate_all;
///
/// assert!(evaluate_all(&[]).is_empty());
/// ```
pub fn evaluate_all(profiles: &[WorkerProfile]) -> Vec<WorkerProfile> {
    evaluate_all_at(profiles, Utc::now())
}

/// Evaluates every profile, stamping each with `now`.
pub fn evaluate_all_at(profiles: &[WorkerProfile], now: DateTime<Utc>) -> Vec<WorkerProfile> {
    let start_time = Instant::now();
    let evaluated: Vec<WorkerProfile> = profiles
        .iter()
        .map(|profile| evaluate_profile(profile, now))
        .collect();

    log_batch(&evaluated, start_time, false);
    evaluated
}

/// Evaluates every profile on the rayon thread pool.
///
/// Output matches [`evaluate_all`]: same order, same per-profile outcomes.
pub fn evaluate_all_parallel(profiles: &[WorkerProfile]) -> Vec<WorkerProfile> {
    evaluate_all_parallel_at(profiles, Utc::now())
}

/// Parallel evaluation stamping each profile with `now`.
pub fn evaluate_all_parallel_at(
    profiles: &[WorkerProfile],
    now: DateTime<Utc>,
) -> Vec<WorkerProfile> {
    let start_time = Instant::now();
    let evaluated: Vec<WorkerProfile> = profiles
        .par_iter()
        .map(|profile| evaluate_profile(profile, now))
        .collect();

    log_batch(&evaluated, start_time, true);
    evaluated
}

fn log_batch(evaluated: &[WorkerProfile], start_time: Instant, parallel: bool) {
    let summary = BatchSummary::from_profiles(evaluated);
    info!(
        profiles = evaluated.len(),
        evaluated = summary.evaluated,
        failed = summary.failed,
        parallel,
        duration_us = start_time.elapsed().as_micros() as u64,
        "Batch evaluation completed"
    );
}
