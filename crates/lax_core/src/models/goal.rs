use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Sentinel tracking key for goals the athlete updates by hand. The
/// progress tracker never touches these.
pub const CUSTOM_TRACKING_KEY: &str = "custom";

/// How a goal's target is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Season total (goals, saves, ground balls...).
    Count,
    /// Pooled ratio in [0, 1] (save %, shooting %...).
    Percent,
    /// Per-game rate.
    Rate,
    /// Single-game best.
    Max,
}

/// Coarse progress classification shown on the goal card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    Completed,
    OnTrack,
    CatchUp,
    Stretch,
}

impl GoalStatus {
    /// Classify a progress fraction. The cutoffs are fixed display-tier
    /// boundaries shared with the UI.
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction >= 1.0 {
            GoalStatus::Completed
        } else if fraction >= 0.7 {
            GoalStatus::OnTrack
        } else if fraction >= 0.4 {
            GoalStatus::CatchUp
        } else {
            GoalStatus::Stretch
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GoalStatus::Completed => "Completed",
            GoalStatus::OnTrack => "On Track",
            GoalStatus::CatchUp => "Catch Up",
            GoalStatus::Stretch => "Stretch",
        }
    }
}

/// One of the athlete's three season goals.
///
/// `current_value` is only ever rewritten by the progress tracker (for
/// tracked goals) or by an explicit user edit (for custom goals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonGoal {
    pub id: String,
    pub title: String,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    #[serde(rename = "metricType")]
    pub metric_kind: MetricKind,
    pub tracking_key: String,
    pub is_custom: bool,
}

impl SeasonGoal {
    /// Create a goal, rejecting non-positive targets at construction so
    /// the progress math never sees them.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        target_value: f64,
        unit: impl Into<String>,
        metric_kind: MetricKind,
        tracking_key: impl Into<String>,
        is_custom: bool,
    ) -> Result<Self> {
        if target_value <= 0.0 {
            return Err(CoreError::InvalidTarget { value: target_value });
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            target_value,
            current_value: 0.0,
            unit: unit.into(),
            metric_kind,
            tracking_key: tracking_key.into(),
            is_custom,
        })
    }

    /// Whether the progress tracker should leave this goal alone.
    pub fn is_manually_tracked(&self) -> bool {
        self.is_custom || self.tracking_key == CUSTOM_TRACKING_KEY
    }

    /// Progress toward target, clamped to [0, 1]. Zero when the target is
    /// not positive (guarded at construction, but persisted data may
    /// predate the guard).
    pub fn progress_fraction(&self) -> f64 {
        if self.target_value > 0.0 {
            (self.current_value / self.target_value).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Progress as a whole percentage in [0, 100].
    pub fn progress_percent(&self) -> u8 {
        (self.progress_fraction() * 100.0).round() as u8
    }

    pub fn status(&self) -> GoalStatus {
        GoalStatus::from_fraction(self.progress_fraction())
    }
}
