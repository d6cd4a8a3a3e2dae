//! Recent-vs-previous trend windows.
//!
//! Precondition: callers supply records newest-first. The engine slices
//! positionally and does not sort or verify the order.

use serde::{Deserialize, Serialize};

use crate::models::StatRecord;

use super::aggregate::{aggregate, per_game, MetricKey};

/// Window size used by the app's trend arrows: last 3 games vs the 3
/// before them.
pub const DEFAULT_TREND_WINDOW: usize = 3;

/// Changes smaller than this (in percent) read as `Stable`. Keeps the UI
/// arrow from flipping on ordinary game-to-game noise.
pub const STABLE_BAND_PCT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    fn from_change(percent_change: f64) -> Self {
        if percent_change.abs() < STABLE_BAND_PCT {
            TrendDirection::Stable
        } else if percent_change > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }
}

/// Directional change of one metric between the two most recent windows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub recent_avg: f64,
    pub previous_avg: f64,
    pub percent_change: f64,
    pub direction: TrendDirection,
}

/// Metric value over one window: counts become per-game averages, ratios
/// stay pooled, so both windows are compared on the same footing.
fn window_value(window: &[StatRecord], key: MetricKey) -> f64 {
    if key.is_ratio() {
        aggregate(window, key)
    } else {
        per_game(window, key)
    }
}

/// Compare the newest `window` records against the `window` before them.
///
/// Returns `None` when there is not enough data (fewer than `2 * window`
/// records) or when the previous window value is zero, leaving the percent
/// change undefined. Both are "no trend to show", not errors.
pub fn trend(records: &[StatRecord], key: MetricKey, window: usize) -> Option<Trend> {
    if window == 0 || records.len() < 2 * window {
        return None;
    }

    let recent_avg = window_value(&records[..window], key);
    let previous_avg = window_value(&records[window..2 * window], key);
    if previous_avg == 0.0 {
        return None;
    }

    let percent_change = (recent_avg - previous_avg) / previous_avg * 100.0;
    Some(Trend {
        recent_avg,
        previous_avg,
        percent_change,
        direction: TrendDirection::from_change(percent_change),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Context, EntrySource, GameStats, StatRecord};
    use chrono::NaiveDate;

    /// Newest-first goalie season: `lines[0]` is the most recent game.
    fn goalie_season(lines: &[(u32, u32)]) -> Vec<StatRecord> {
        let today = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        lines
            .iter()
            .enumerate()
            .map(|(i, &(saves, shots_faced))| {
                let date = NaiveDate::from_ymd_opt(2026, 5, 28 - i as u32).unwrap();
                StatRecord::new(
                    "athlete-1",
                    date,
                    Context::Primary,
                    GameStats { saves, shots_faced, ..Default::default() },
                    EntrySource::Live,
                    today,
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_insufficient_data_is_none() {
        let records = goalie_season(&[(10, 12), (8, 10), (9, 11), (7, 9), (6, 8)]);
        assert_eq!(records.len(), 5);
        assert!(trend(&records, MetricKey::Saves, DEFAULT_TREND_WINDOW).is_none());
    }

    #[test]
    fn test_six_records_is_enough() {
        let records = goalie_season(&[(10, 12), (8, 10), (9, 11), (7, 9), (6, 8), (5, 7)]);
        assert!(trend(&records, MetricKey::Saves, DEFAULT_TREND_WINDOW).is_some());
    }

    #[test]
    fn test_count_trend_uses_per_game_average() {
        // Recent window saves: 10, 8, 9 -> 9.0/game; previous: 6, 6, 6 -> 6.0.
        let records = goalie_season(&[(10, 12), (8, 10), (9, 11), (6, 8), (6, 8), (6, 8)]);
        let t = trend(&records, MetricKey::Saves, 3).unwrap();
        assert_eq!(t.recent_avg, 9.0);
        assert_eq!(t.previous_avg, 6.0);
        assert_eq!(t.percent_change, 50.0);
        assert_eq!(t.direction, TrendDirection::Up);
    }

    #[test]
    fn test_ratio_trend_pools_within_each_window() {
        // Recent: 12/16 + 14/20 + 13/18 = 39/54; previous: 9/12 + 9/12 +
        // 12/16 = 30/40 = 0.75.
        let records =
            goalie_season(&[(12, 16), (14, 20), (13, 18), (9, 12), (9, 12), (12, 16)]);
        let t = trend(&records, MetricKey::SavePct, 3).unwrap();
        assert!((t.recent_avg - 39.0 / 54.0).abs() < 1e-9);
        assert!((t.previous_avg - 0.75).abs() < 1e-9);
        assert_eq!(t.direction, TrendDirection::Stable); // ≈ -3.7%
    }

    #[test]
    fn test_stable_band_is_symmetric() {
        // +4.9% and -4.9% both read Stable; ±5% does not.
        assert_eq!(TrendDirection::from_change(4.9), TrendDirection::Stable);
        assert_eq!(TrendDirection::from_change(-4.9), TrendDirection::Stable);
        assert_eq!(TrendDirection::from_change(5.0), TrendDirection::Up);
        assert_eq!(TrendDirection::from_change(-5.0), TrendDirection::Down);
    }

    #[test]
    fn test_zero_previous_window_is_none() {
        // No saves at all in the previous window: percent change undefined.
        let records = goalie_season(&[(10, 12), (8, 10), (9, 11), (0, 0), (0, 0), (0, 0)]);
        assert!(trend(&records, MetricKey::Saves, 3).is_none());
    }

    #[test]
    fn test_downward_trend() {
        let records = goalie_season(&[(4, 10), (5, 10), (3, 10), (9, 10), (8, 10), (9, 10)]);
        let t = trend(&records, MetricKey::Saves, 3).unwrap();
        assert_eq!(t.direction, TrendDirection::Down);
        assert!(t.percent_change < -5.0);
    }

    #[test]
    fn test_extra_records_beyond_two_windows_ignored() {
        let mut lines = vec![(10, 12), (8, 10), (9, 11), (6, 8), (6, 8), (6, 8)];
        let base = trend(&goalie_season(&lines), MetricKey::Saves, 3).unwrap();
        lines.push((1, 20));
        lines.push((0, 15));
        let extended = trend(&goalie_season(&lines), MetricKey::Saves, 3).unwrap();
        assert_eq!(base, extended);
    }

    #[test]
    fn test_zero_window_is_none() {
        let records = goalie_season(&[(10, 12), (8, 10)]);
        assert!(trend(&records, MetricKey::Saves, 0).is_none());
    }
}
