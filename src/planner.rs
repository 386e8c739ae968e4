use serde::Serialize;
use thiserror::Error;

use crate::duration::{MAX_TOTAL_SECONDS, MinSec, format_duration};

/// Most sets a single build can be split into.
pub const MAX_SETS: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("set count must be between 1 and {max}, got {0}", max = MAX_SETS)]
    InvalidSetCount(usize),

    #[error("no duration entered")]
    NoDuration,

    #[error("{} exceeds maximum combined duration of 59:59", display_total(.0))]
    ExceedsMaximum(u32),
}

fn display_total(seconds: &u32) -> String {
    format_duration(*seconds)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetTarget {
    /// 1-based position of the set.
    pub index: usize,
    pub target_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetPlan {
    pub targets: Vec<SetTarget>,
    pub total_seconds: u32,
}

impl SetPlan {
    pub fn target_seconds(&self) -> Vec<u32> {
        self.targets.iter().map(|t| t.target_seconds).collect()
    }

    pub fn set_count(&self) -> usize {
        self.targets.len()
    }
}

/// Turn the requested set count and per-set durations into clamped targets.
///
/// Entries past `set_count` are ignored and missing ones count as `0:00`.
/// The combined duration must land in `1..=3599` seconds.
pub fn plan(set_count: usize, per_set: &[MinSec]) -> Result<SetPlan, PlanError> {
    if !(1..=MAX_SETS).contains(&set_count) {
        return Err(PlanError::InvalidSetCount(set_count));
    }

    let targets: Vec<SetTarget> = (0..set_count)
        .map(|i| SetTarget {
            index: i + 1,
            target_seconds: per_set
                .get(i)
                .map(MinSec::clamped_seconds)
                .unwrap_or(0),
        })
        .collect();

    let total_seconds: u32 = targets.iter().map(|t| t.target_seconds).sum();

    if total_seconds < 1 {
        return Err(PlanError::NoDuration);
    }
    if total_seconds > MAX_TOTAL_SECONDS {
        return Err(PlanError::ExceedsMaximum(total_seconds));
    }

    Ok(SetPlan {
        targets,
        total_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_set_plan() {
        let plan = plan(1, &[MinSec::new(10, 0)]).unwrap();
        assert_eq!(plan.target_seconds(), vec![600]);
        assert_eq!(plan.total_seconds, 600);
        assert_eq!(plan.targets[0].index, 1);
    }

    #[test]
    fn test_ignores_entries_past_set_count() {
        let per_set = [MinSec::new(5, 0), MinSec::new(4, 30), MinSec::new(20, 0)];
        let plan = plan(2, &per_set).unwrap();
        assert_eq!(plan.target_seconds(), vec![300, 270]);
        assert_eq!(plan.total_seconds, 570);
    }

    #[test]
    fn test_missing_entries_count_as_zero() {
        let plan = plan(3, &[MinSec::new(1, 0)]).unwrap();
        assert_eq!(plan.target_seconds(), vec![60, 0, 0]);
        assert_eq!(plan.targets[2].index, 3);
    }

    #[test]
    fn test_clamps_before_combining() {
        let plan = plan(1, &[MinSec::new(99, -5)]).unwrap();
        assert_eq!(plan.total_seconds, 59 * 60);
    }

    #[test]
    fn test_rejects_zero_total() {
        assert_eq!(plan(2, &[MinSec::default(), MinSec::new(-3, 0)]), Err(PlanError::NoDuration));
    }

    #[test]
    fn test_rejects_total_over_maximum() {
        let per_set = [MinSec::new(30, 0), MinSec::new(30, 0)];
        let err = plan(2, &per_set).unwrap_err();
        assert_eq!(err, PlanError::ExceedsMaximum(3600));
        assert_eq!(err.to_string(), "60:00 exceeds maximum combined duration of 59:59");
    }

    #[test]
    fn test_accepts_exact_maximum() {
        let plan = plan(1, &[MinSec::new(59, 59)]).unwrap();
        assert_eq!(plan.total_seconds, MAX_TOTAL_SECONDS);
    }

    #[test]
    fn test_rejects_bad_set_count() {
        assert_eq!(plan(0, &[MinSec::new(1, 0)]), Err(PlanError::InvalidSetCount(0)));
        assert_eq!(plan(4, &[MinSec::new(1, 0)]), Err(PlanError::InvalidSetCount(4)));
    }
}
