//! Season aggregation.
//!
//! Reduces a pre-filtered set of stat records into derived metrics. The
//! caller filters by competition context first; nothing here filters.
//!
//! Ratio metrics are pooled (`sum(numerator) / sum(denominator)` across the
//! whole set), never an average of per-game ratios. The two disagree as
//! soon as game volumes differ, and the pooled form is the one the app has
//! always displayed.

use std::collections::HashMap;

use crate::models::{GameStats, StatField, StatRecord};

/// Closed set of aggregate metrics a season goal can track.
///
/// The original string-keyed dispatch is kept only at the [`aggregate_key`]
/// boundary; internally every computation is exhaustively matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKey {
    Goals,
    Assists,
    Points,
    Shots,
    ShotsFaced,
    Saves,
    GoalsAllowed,
    Clears,
    GroundBalls,
    CausedTurnovers,
    FaceoffWins,
    FaceoffLosses,
    SavePct,
    ShootingPct,
    FaceoffPct,
}

/// How a metric reduces over a record set.
enum MetricRule {
    /// Sum one field across all records.
    Total(StatField),
    /// Sum two fields across all records (points = goals + assists).
    TotalPair(StatField, StatField),
    /// Pooled ratio of summed numerator over summed denominator.
    Ratio { num: StatField, den: RatioDenominator },
}

enum RatioDenominator {
    Field(StatField),
    FieldPair(StatField, StatField),
}

impl MetricKey {
    pub const ALL: [MetricKey; 15] = [
        MetricKey::Goals,
        MetricKey::Assists,
        MetricKey::Points,
        MetricKey::Shots,
        MetricKey::ShotsFaced,
        MetricKey::Saves,
        MetricKey::GoalsAllowed,
        MetricKey::Clears,
        MetricKey::GroundBalls,
        MetricKey::CausedTurnovers,
        MetricKey::FaceoffWins,
        MetricKey::FaceoffLosses,
        MetricKey::SavePct,
        MetricKey::ShootingPct,
        MetricKey::FaceoffPct,
    ];

    /// The string form used by goal tracking keys and the metrics map.
    pub fn key(&self) -> &'static str {
        match self {
            MetricKey::Goals => "goals",
            MetricKey::Assists => "assists",
            MetricKey::Points => "points",
            MetricKey::Shots => "shots",
            MetricKey::ShotsFaced => "shots_faced",
            MetricKey::Saves => "saves",
            MetricKey::GoalsAllowed => "goals_allowed",
            MetricKey::Clears => "clears",
            MetricKey::GroundBalls => "ground_balls",
            MetricKey::CausedTurnovers => "caused_turnovers",
            MetricKey::FaceoffWins => "faceoff_wins",
            MetricKey::FaceoffLosses => "faceoff_losses",
            MetricKey::SavePct => "save_pct",
            MetricKey::ShootingPct => "shooting_pct",
            MetricKey::FaceoffPct => "faceoff_pct",
        }
    }

    pub fn from_key(key: &str) -> Option<MetricKey> {
        MetricKey::ALL.iter().copied().find(|m| m.key() == key)
    }

    /// Ratio metrics average differently in trend windows than counts do.
    pub fn is_ratio(&self) -> bool {
        matches!(self.rule(), MetricRule::Ratio { .. })
    }

    fn rule(&self) -> MetricRule {
        match self {
            MetricKey::Goals => MetricRule::Total(StatField::Goals),
            MetricKey::Assists => MetricRule::Total(StatField::Assists),
            MetricKey::Points => MetricRule::TotalPair(StatField::Goals, StatField::Assists),
            MetricKey::Shots => MetricRule::Total(StatField::Shots),
            MetricKey::ShotsFaced => MetricRule::Total(StatField::ShotsFaced),
            MetricKey::Saves => MetricRule::Total(StatField::Saves),
            MetricKey::GoalsAllowed => MetricRule::Total(StatField::GoalsAllowed),
            MetricKey::Clears => MetricRule::Total(StatField::Clears),
            MetricKey::GroundBalls => MetricRule::Total(StatField::GroundBalls),
            MetricKey::CausedTurnovers => MetricRule::Total(StatField::CausedTurnovers),
            MetricKey::FaceoffWins => MetricRule::Total(StatField::FaceoffWins),
            MetricKey::FaceoffLosses => MetricRule::Total(StatField::FaceoffLosses),
            MetricKey::SavePct => MetricRule::Ratio {
                num: StatField::Saves,
                den: RatioDenominator::Field(StatField::ShotsFaced),
            },
            MetricKey::ShootingPct => MetricRule::Ratio {
                num: StatField::Goals,
                den: RatioDenominator::Field(StatField::Shots),
            },
            MetricKey::FaceoffPct => MetricRule::Ratio {
                num: StatField::FaceoffWins,
                den: RatioDenominator::FieldPair(
                    StatField::FaceoffWins,
                    StatField::FaceoffLosses,
                ),
            },
        }
    }
}

fn sum_field(records: &[StatRecord], field: StatField) -> u64 {
    records.iter().map(|r| u64::from(r.stats.get(field))).sum()
}

fn denominator_value(stats: &GameStats, den: &RatioDenominator) -> u64 {
    match den {
        RatioDenominator::Field(f) => u64::from(stats.get(*f)),
        RatioDenominator::FieldPair(a, b) => u64::from(stats.get(*a)) + u64::from(stats.get(*b)),
    }
}

/// Reduce a record set to one metric value.
///
/// Counts sum; ratios pool; a zero pooled denominator yields `0.0`.
pub fn aggregate(records: &[StatRecord], key: MetricKey) -> f64 {
    match key.rule() {
        MetricRule::Total(field) => sum_field(records, field) as f64,
        MetricRule::TotalPair(a, b) => (sum_field(records, a) + sum_field(records, b)) as f64,
        MetricRule::Ratio { num, den } => {
            let numerator = sum_field(records, num);
            let denominator: u64 =
                records.iter().map(|r| denominator_value(&r.stats, &den)).sum();
            if denominator == 0 {
                0.0
            } else {
                numerator as f64 / denominator as f64
            }
        }
    }
}

/// String-keyed boundary used by goal tracking keys.
///
/// An unknown key resolves to `0.0` rather than erroring. That permissive
/// default is long-standing observable behavior the presentation layer
/// relies on; see the silent-zero tests before changing it.
pub fn aggregate_key(records: &[StatRecord], key: &str) -> f64 {
    match MetricKey::from_key(key) {
        Some(metric) => aggregate(records, metric),
        None => {
            log::debug!("unknown metric key '{}', defaulting to 0", key);
            0.0
        }
    }
}

/// Per-game rate for display. Not a stored metric; `0.0` for an empty set.
pub fn per_game(records: &[StatRecord], key: MetricKey) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    aggregate(records, key) / records.len() as f64
}

/// Snapshot of every metric over one filtered record set.
///
/// Derived on demand and never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedMetrics {
    values: HashMap<String, f64>,
}

impl AggregatedMetrics {
    /// Value for a tracking key, `0.0` when absent (same permissive default
    /// as [`aggregate_key`]).
    pub fn get(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[cfg(test)]
    pub(crate) fn from_entries(entries: &[(&str, f64)]) -> Self {
        Self {
            values: entries.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }
}

/// Compute the full metric snapshot for a filtered record set.
pub fn aggregate_all(records: &[StatRecord]) -> AggregatedMetrics {
    let mut values = HashMap::with_capacity(MetricKey::ALL.len());
    for key in MetricKey::ALL {
        values.insert(key.key().to_string(), aggregate(records, key));
    }
    AggregatedMetrics { values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Context, EntrySource, GameStats, StatRecord};
    use chrono::NaiveDate;

    fn record_on(day: u32, stats: GameStats) -> StatRecord {
        let date = NaiveDate::from_ymd_opt(2026, 4, day).unwrap();
        StatRecord::new(
            "athlete-1",
            date,
            Context::Primary,
            stats,
            EntrySource::Live,
            NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
        )
        .unwrap()
    }

    fn shooter(goals: u32, shots: u32) -> StatRecord {
        record_on(1, GameStats { goals, shots, ..Default::default() })
    }

    #[test]
    fn test_count_metric_sums() {
        let records = vec![shooter(3, 8), shooter(1, 5), shooter(0, 2)];
        assert_eq!(aggregate(&records, MetricKey::Goals), 4.0);
        assert_eq!(aggregate(&records, MetricKey::Shots), 15.0);
    }

    #[test]
    fn test_points_is_goals_plus_assists() {
        let records = vec![
            record_on(1, GameStats { goals: 2, assists: 3, ..Default::default() }),
            record_on(2, GameStats { goals: 1, assists: 0, ..Default::default() }),
        ];
        assert_eq!(aggregate(&records, MetricKey::Points), 6.0);
    }

    #[test]
    fn test_ratio_is_pooled_not_mean_of_per_game() {
        // Game 1: 5/10 (0.50), game 2: 0/2 (0.00). Mean of per-game
        // ratios = 0.25; pooled = 5/12 ≈ 0.4167. Unequal game volumes make
        // the two diverge, which is exactly what this test pins down.
        let records = vec![
            record_on(1, GameStats { saves: 5, shots_faced: 10, ..Default::default() }),
            record_on(2, GameStats { saves: 0, shots_faced: 2, ..Default::default() }),
        ];
        let pooled = aggregate(&records, MetricKey::SavePct);
        assert!((pooled - 5.0 / 12.0).abs() < 1e-9);
        assert!((pooled - 0.25).abs() > 0.1, "pooled must differ from per-game mean");
    }

    #[test]
    fn test_zero_denominator_is_zero() {
        let records = vec![record_on(1, GameStats::default())];
        assert_eq!(aggregate(&records, MetricKey::SavePct), 0.0);
        assert_eq!(aggregate(&records, MetricKey::ShootingPct), 0.0);
        assert_eq!(aggregate(&records, MetricKey::FaceoffPct), 0.0);
    }

    #[test]
    fn test_empty_set_is_zero() {
        assert_eq!(aggregate(&[], MetricKey::Goals), 0.0);
        assert_eq!(aggregate(&[], MetricKey::SavePct), 0.0);
        assert_eq!(per_game(&[], MetricKey::Goals), 0.0);
    }

    #[test]
    fn test_faceoff_pct_denominator_is_wins_plus_losses() {
        let records = vec![
            record_on(1, GameStats { faceoff_wins: 12, faceoff_losses: 8, ..Default::default() }),
            record_on(2, GameStats { faceoff_wins: 6, faceoff_losses: 14, ..Default::default() }),
        ];
        assert!((aggregate(&records, MetricKey::FaceoffPct) - 18.0 / 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_per_game_rate() {
        let records = vec![shooter(3, 8), shooter(1, 5)];
        assert_eq!(per_game(&records, MetricKey::Goals), 2.0);
    }

    #[test]
    fn test_unknown_key_silently_zero() {
        // Deliberate permissive default, not an error path. If this ever
        // changes, the presentation layer's resilience contract changes
        // with it.
        let records = vec![shooter(3, 8)];
        assert_eq!(aggregate_key(&records, "xg_per_possession"), 0.0);
        assert_eq!(aggregate_key(&records, ""), 0.0);
    }

    #[test]
    fn test_known_key_matches_enum_path() {
        let records = vec![shooter(3, 8), shooter(1, 5)];
        assert_eq!(
            aggregate_key(&records, "shooting_pct"),
            aggregate(&records, MetricKey::ShootingPct)
        );
    }

    #[test]
    fn test_aggregate_all_covers_every_key() {
        let metrics = aggregate_all(&[shooter(3, 8)]);
        for key in MetricKey::ALL {
            // get() must hit a real entry, not the absent-key default.
            assert_eq!(metrics.get(key.key()), aggregate(&[shooter(3, 8)], key));
        }
        assert_eq!(metrics.get("not_a_metric"), 0.0);
    }

    #[test]
    fn test_key_round_trip() {
        for key in MetricKey::ALL {
            assert_eq!(MetricKey::from_key(key.key()), Some(key));
        }
        assert_eq!(MetricKey::from_key("bogus"), None);
    }
}
