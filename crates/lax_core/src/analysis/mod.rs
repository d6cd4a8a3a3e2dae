//! # Analysis Module
//!
//! Everything derived from a season of stat records.
//!
//! ## Submodules
//!
//! - `aggregate` - Metric reduction over a filtered record set
//! - `trend` - Recent-vs-previous window comparison
//! - `progress` - Season-goal progress recomputation
//! - `insight` - Rule-based feedback card selection
//!
//! All of it is pure and synchronous: records in, values out. Fetching
//! records and persisting updated goals happen around this module, never
//! inside it.

pub mod aggregate;
pub mod insight;
pub mod progress;
pub mod trend;


pub use aggregate::{
    aggregate, aggregate_all, aggregate_key, per_game, AggregatedMetrics, MetricKey,
};
pub use insight::{
    select_insight, InsightCard, InsightState, RECENCY_WINDOW_DAYS, UNLOCK_GAME_COUNT,
};
pub use progress::update_progress;
pub use trend::{trend, Trend, TrendDirection, DEFAULT_TREND_WINDOW, STABLE_BAND_PCT};
