//! Season Report Library
//!
//! File-loading and report-building half of the CLI. This crate is the
//! "external collaborator" around `lax_core`: it owns all I/O, enforces
//! the newest-first ordering the engine's trend windows expect, and
//! filters by competition context before handing records to the engine.

use std::fs;
use std::path::Path;

use anyhow::{Context as AnyhowContext, Result};
use chrono::NaiveDate;
use serde::Serialize;

use lax_core::{
    aggregate_all, per_game, select_insight, trend, update_progress, Context, InsightCard,
    MetricKey, Position, SeasonGoal, StatRecord, StatValidator, Trend, DEFAULT_TREND_WINDOW,
};

/// One row of the per-position stat table.
#[derive(Debug, Clone, Serialize)]
pub struct MetricRow {
    pub key: String,
    pub total: f64,
    /// Per-game rate; absent for ratio metrics, which are already pooled.
    pub per_game: Option<f64>,
    pub trend: Option<Trend>,
}

/// One row of the goal progress table.
#[derive(Debug, Clone, Serialize)]
pub struct GoalRow {
    pub title: String,
    pub current: f64,
    pub target: f64,
    pub progress_percent: u8,
    pub status: String,
}

/// Everything the `report` subcommand prints.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonReport {
    pub games: usize,
    pub context: Context,
    pub metrics: Vec<MetricRow>,
    pub goals: Vec<GoalRow>,
    pub insight: Option<InsightCard>,
}

/// Load stat records from a JSON array file.
pub fn load_records(path: &Path) -> Result<Vec<StatRecord>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file: {}", path.display()))?;
    let records: Vec<StatRecord> =
        serde_json::from_str(&json).context("Failed to parse stat records")?;
    log::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load season goals from a JSON array file.
pub fn load_goals(path: &Path) -> Result<Vec<SeasonGoal>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read goals file: {}", path.display()))?;
    serde_json::from_str(&json).context("Failed to parse season goals")
}

/// Filter to one competition context and sort newest-first.
///
/// The engine documents newest-first ordering as a caller precondition;
/// this is where the caller meets it.
pub fn prepare_records(records: Vec<StatRecord>, context: Context) -> Vec<StatRecord> {
    let mut filtered: Vec<StatRecord> =
        records.into_iter().filter(|r| r.context == context).collect();
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}

/// Run the full engine pass over prepared records.
pub fn build_report(
    records: &[StatRecord],
    goals: &[SeasonGoal],
    position: Position,
    context: Context,
    as_of: NaiveDate,
) -> SeasonReport {
    let metrics = aggregate_all(records);

    let metric_rows = position_metric_keys(position)
        .iter()
        .map(|&key| MetricRow {
            key: key.key().to_string(),
            total: metrics.get(key.key()),
            per_game: (!key.is_ratio()).then(|| per_game(records, key)),
            trend: trend(records, key, DEFAULT_TREND_WINDOW),
        })
        .collect();

    let goal_rows = update_progress(goals, &metrics)
        .into_iter()
        .map(|goal| GoalRow {
            title: goal.title.clone(),
            current: goal.current_value,
            target: goal.target_value,
            progress_percent: goal.progress_percent(),
            status: goal.status().display_name().to_string(),
        })
        .collect();

    let insight = select_insight(
        position,
        &metrics,
        records.len(),
        records.first().map(|r| r.date),
        as_of,
    );

    SeasonReport { games: records.len(), context, metrics: metric_rows, goals: goal_rows, insight }
}

/// Metric keys worth a table row for a position: the fields it tracks
/// (mirroring `Position::stat_fields`) plus the ratios those fields feed.
fn position_metric_keys(position: Position) -> Vec<MetricKey> {
    use MetricKey::*;
    match position {
        Position::Goalie => vec![ShotsFaced, Saves, GoalsAllowed, Clears, GroundBalls, SavePct],
        Position::Attack => {
            vec![Goals, Assists, Points, Shots, ShootingPct, GroundBalls, CausedTurnovers]
        }
        Position::Midfield => {
            vec![Goals, Assists, Points, Shots, ShootingPct, GroundBalls, CausedTurnovers, Clears]
        }
        Position::Defense => vec![GroundBalls, CausedTurnovers, Clears, Goals, Assists, Points],
        Position::Faceoff => {
            vec![FaceoffWins, FaceoffLosses, FaceoffPct, GroundBalls, Goals, Assists]
        }
        Position::Lsm => vec![GroundBalls, CausedTurnovers, Clears, Goals, Assists, Points],
    }
}

/// Validation summary for the `validate` subcommand.
pub fn validate_records(records: &[StatRecord], position: Position) -> Vec<(String, Vec<String>)> {
    records
        .iter()
        .map(|record| {
            let report = StatValidator::validate(record, position);
            (record.id.clone(), report.warnings)
        })
        .filter(|(_, warnings)| !warnings.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lax_core::{EntrySource, GameStats};
    use std::io::Write;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn goalie_game(m: u32, d: u32, context: Context, shots_faced: u32, saves: u32) -> StatRecord {
        StatRecord::new(
            "athlete-1",
            day(m, d),
            context,
            GameStats {
                shots_faced,
                saves,
                goals_allowed: shots_faced - saves,
                ..Default::default()
            },
            EntrySource::AfterAction,
            day(6, 30),
        )
        .unwrap()
    }

    #[test]
    fn test_prepare_records_filters_and_sorts_newest_first() {
        let records = vec![
            goalie_game(4, 8, Context::Primary, 16, 12),
            goalie_game(4, 20, Context::Primary, 18, 13),
            goalie_game(4, 18, Context::Secondary, 30, 10),
            goalie_game(4, 14, Context::Primary, 20, 14),
        ];
        let prepared = prepare_records(records, Context::Primary);
        assert_eq!(prepared.len(), 3);
        assert_eq!(prepared[0].date, day(4, 20));
        assert_eq!(prepared[2].date, day(4, 8));
    }

    #[test]
    fn test_report_round_trip_through_files() {
        let records = vec![
            goalie_game(4, 20, Context::Primary, 18, 13),
            goalie_game(4, 14, Context::Primary, 20, 14),
            goalie_game(4, 8, Context::Primary, 16, 12),
        ];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&records).unwrap()).unwrap();

        let loaded = load_records(file.path()).unwrap();
        assert_eq!(loaded, records);

        let prepared = prepare_records(loaded, Context::Primary);
        let report = build_report(&prepared, &[], Position::Goalie, Context::Primary, day(4, 25));
        assert_eq!(report.games, 3);
        let save_pct = report.metrics.iter().find(|m| m.key == "save_pct").unwrap();
        assert!((save_pct.total - 39.0 / 54.0).abs() < 1e-9);
        let card = report.insight.unwrap();
        assert!(card.insight.contains("consistency"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_records(Path::new("/nonexistent/records.json")).is_err());
    }

    #[test]
    fn test_validate_records_surfaces_only_offenders() {
        let clean = goalie_game(4, 8, Context::Primary, 16, 12);
        let mut suspect = goalie_game(4, 9, Context::Primary, 10, 10);
        suspect.stats.saves = 12;
        let flagged = validate_records(&[clean, suspect.clone()], Position::Goalie);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].0, suspect.id);
    }
}
