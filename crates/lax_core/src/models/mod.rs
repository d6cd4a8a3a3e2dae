pub mod goal;
pub mod position;
pub mod stat_record;

pub use goal::{GoalStatus, MetricKind, SeasonGoal, CUSTOM_TRACKING_KEY};
pub use position::{Level, Position};
pub use stat_record::{Context, EntrySource, GameStats, StatField, StatRecord};
