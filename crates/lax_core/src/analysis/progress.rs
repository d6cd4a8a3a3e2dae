//! Season-goal progress recomputation.

use crate::models::SeasonGoal;

use super::aggregate::AggregatedMetrics;

/// Map fresh aggregated metrics onto the athlete's goals.
///
/// Returns new goal values rather than mutating in place, so a rerun with
/// the same inputs is a no-op and callers can diff before persisting.
/// Manually tracked goals (custom flag or `custom` tracking key) pass
/// through untouched; everything else gets `metrics[tracking_key]`, which
/// is `0.0` for a key the aggregation does not produce.
pub fn update_progress(goals: &[SeasonGoal], metrics: &AggregatedMetrics) -> Vec<SeasonGoal> {
    goals
        .iter()
        .map(|goal| {
            if goal.is_manually_tracked() {
                return goal.clone();
            }
            let mut updated = goal.clone();
            updated.current_value = metrics.get(&goal.tracking_key);
            if updated.current_value != goal.current_value {
                log::debug!(
                    "goal '{}' progress {} -> {} ({})",
                    updated.id,
                    goal.current_value,
                    updated.current_value,
                    updated.status().display_name()
                );
            }
            updated
        })
        .collect()
}
