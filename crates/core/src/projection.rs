//! View-state projection: presentation-free progress metrics derived from a
//! project and its leads.
//!
//! Pure and synchronous. Malformed or missing inputs yield "no data"
//! results (`0.0` ratio, `None` fractions), never errors or non-finite
//! numbers.

use serde::Serialize;

use crate::lead::{Lead, LeadStatus};
use crate::project::{Project, TimeFrame};
use crate::types::Timestamp;

/// Derived progress metrics for one project, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    /// Number of leads currently marked won.
    pub won_count: usize,
    /// The project's lead goal, carried so the UI can render "3/10 leads".
    pub leads_goal: i64,
    /// `won_count / leads_goal`. `0.0` when the goal is zero.
    pub won_ratio: f64,
    /// Fraction of the campaign window already elapsed, in `[0, 1]`.
    /// `None` when the window is absent, partial, or zero/negative-length.
    pub time_elapsed: Option<f64>,
    /// Whole days until the window's end. Negative once the deadline has
    /// passed; display treatment is the caller's concern.
    pub days_left: Option<i64>,
}

/// Count leads marked won.
pub fn won_count(leads: &[Lead]) -> usize {
    leads.iter().filter(|l| l.status == LeadStatus::Won).count()
}

/// Ratio of won leads to the goal count.
///
/// A goal of zero (or below, from pre-validation data) reads as "no
/// progress": the result is `0.0`, never a division by zero. The ratio is
/// not clamped above 1; overshooting the goal is real progress.
pub fn won_ratio(won: usize, leads_goal: i64) -> f64 {
    if leads_goal <= 0 {
        return 0.0;
    }
    won as f64 / leads_goal as f64
}

/// Fraction of the campaign window already elapsed, clamped to `[0, 1]`.
///
/// Defined only when both endpoints exist and the window spans at least one
/// whole day; zero-length and inverted windows yield `None` rather than a
/// zero or an error.
pub fn time_elapsed_fraction(frame: Option<&TimeFrame>, now: Timestamp) -> Option<f64> {
    let frame = frame?;
    let (start, end) = (frame.start?, frame.end?);
    let total_days = (end - start).num_days();
    if total_days <= 0 {
        return None;
    }
    let days_passed = (now - start).num_days().clamp(0, total_days);
    Some(days_passed as f64 / total_days as f64)
}

/// Whole days from `now` until the window's end. Never clamps: a passed
/// deadline comes back negative. `None` without an end date.
pub fn days_left(frame: Option<&TimeFrame>, now: Timestamp) -> Option<i64> {
    let end = frame?.end?;
    Some((end - now).num_days())
}

/// Compute the full snapshot for a project and its current leads.
pub fn snapshot(project: &Project, leads: &[Lead], now: Timestamp) -> ProgressSnapshot {
    let won = won_count(leads);
    ProgressSnapshot {
        won_count: won,
        leads_goal: project.leads_goal,
        won_ratio: won_ratio(won, project.leads_goal),
        time_elapsed: time_elapsed_fraction(project.time_frame.as_ref(), now),
        days_left: days_left(project.time_frame.as_ref(), now),
    }
}
