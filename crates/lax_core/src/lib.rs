//! # lax_core - Stat Aggregation & Goal Progress Engine
//!
//! The computational core of a season-tracking app for youth lacrosse
//! athletes: validates logged game lines, reduces a season of records into
//! derived metrics and trends, maps those metrics onto season goals, and
//! picks the templated feedback card.
//!
//! ## Design
//! - Pure and synchronous: records and goals in, values out. No I/O, no
//!   clock reads, no shared mutable state. Fetching and persisting are the
//!   surrounding app's job.
//! - Permissive at the edges: unknown metric keys, zero denominators, and
//!   short trend windows yield defined fallback values, never errors.
//! - Callers supply records newest-first; trend windows slice positionally.

pub mod analysis;
pub mod data;
pub mod error;
pub mod models;
pub mod validation;

pub use analysis::{
    aggregate, aggregate_all, aggregate_key, per_game, select_insight, trend, update_progress,
    AggregatedMetrics, InsightCard, InsightState, MetricKey, Trend, TrendDirection,
    DEFAULT_TREND_WINDOW, RECENCY_WINDOW_DAYS, STABLE_BAND_PCT, UNLOCK_GAME_COUNT,
};
pub use data::catalog::{lookup, GoalTemplate};
pub use error::{CoreError, Result};
pub use models::{
    Context, EntrySource, GameStats, GoalStatus, Level, MetricKind, Position, SeasonGoal,
    StatField, StatRecord, CUSTOM_TRACKING_KEY,
};
pub use validation::{StatValidator, ValidationReport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
