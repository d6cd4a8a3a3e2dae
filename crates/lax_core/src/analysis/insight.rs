//! Rule-based feedback card selection.
//!
//! No model, no scoring: each position carries exactly one threshold rule
//! choosing between two canned templates, with current metric values
//! interpolated in. The UI test fixtures pin the selected template per
//! input, so the binary branch per position is load-bearing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Position;

use super::aggregate::AggregatedMetrics;

/// Games an athlete must log before the insight card activates.
pub const UNLOCK_GAME_COUNT: usize = 3;

/// A season older than this (days since the last logged game) flips the
/// card into its off-season recap.
pub const RECENCY_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightState {
    /// Fewer than three games logged; counting down to unlock.
    Teaser,
    /// In-season feedback keyed on current metrics.
    Active,
    /// No recent games; season recap.
    OffSeason,
}

/// The card shown on the dashboard. Absent entirely (`None` from
/// [`select_insight`]) when the athlete has logged nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightCard {
    pub state: InsightState,
    pub insight: String,
    pub next_action: String,
}

/// Pick the feedback card for the current season state.
///
/// Gates are evaluated in order: nothing logged -> hidden; under three
/// games -> teaser countdown; a game within the last 30 days -> active
/// per-position template; otherwise -> off-season recap. `today` is a
/// parameter so the recency gate stays deterministic.
pub fn select_insight(
    position: Position,
    metrics: &AggregatedMetrics,
    record_count: usize,
    last_game_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<InsightCard> {
    if record_count == 0 {
        return None;
    }

    if record_count < UNLOCK_GAME_COUNT {
        let remaining = UNLOCK_GAME_COUNT - record_count;
        return Some(InsightCard {
            state: InsightState::Teaser,
            insight: format!(
                "Log {} more game{} to unlock your personalized insights.",
                remaining,
                if remaining == 1 { "" } else { "s" }
            ),
            next_action: "Keep logging every game you play.".to_string(),
        });
    }

    let in_season = last_game_date
        .map(|last| (today - last).num_days() <= RECENCY_WINDOW_DAYS)
        .unwrap_or(false);

    if in_season {
        let (insight, next_action) = active_templates(position, metrics, record_count);
        Some(InsightCard { state: InsightState::Active, insight, next_action })
    } else {
        Some(InsightCard {
            state: InsightState::OffSeason,
            insight: format!(
                "Season wrapped: {} games logged with {}.",
                record_count,
                headline_stat(position, metrics)
            ),
            next_action: "Review your goal progress and set next season's targets.".to_string(),
        })
    }
}

/// One threshold, two templates, per position.
fn active_templates(
    position: Position,
    metrics: &AggregatedMetrics,
    record_count: usize,
) -> (String, String) {
    let games = record_count as f64;
    match position {
        Position::Goalie => {
            let save_pct = metrics.get("save_pct");
            if save_pct > 0.70 {
                (
                    format!(
                        "Stopping {:.0}% of shots shows real consistency in the cage.",
                        save_pct * 100.0
                    ),
                    "Keep your warmup routine exactly as it is.".to_string(),
                )
            } else {
                (
                    format!(
                        "Your save rate is sitting at {:.0}%, and low shots are getting through.",
                        save_pct * 100.0
                    ),
                    "Add 15 minutes of low-shot reaction work before practice.".to_string(),
                )
            }
        }
        Position::Attack => {
            let shooting_pct = metrics.get("shooting_pct");
            if shooting_pct > 0.30 {
                (
                    format!(
                        "You are finishing {:.0}% of your shots, so defenses have to respect you.",
                        shooting_pct * 100.0
                    ),
                    "Start hunting the feed: your shot is drawing slides.".to_string(),
                )
            } else {
                (
                    format!(
                        "Shooting {:.0}% suggests forced looks more than cold hands.",
                        shooting_pct * 100.0
                    ),
                    "Work time-and-room shots from 8 yards until they feel automatic."
                        .to_string(),
                )
            }
        }
        Position::Midfield => {
            let points_per_game = metrics.get("points") / games;
            if points_per_game >= 2.0 {
                (
                    format!(
                        "{:.1} points a game from the midfield is two-way engine territory.",
                        points_per_game
                    ),
                    "Push transition harder; your legs are winning possessions.".to_string(),
                )
            } else {
                (
                    format!(
                        "You are producing {:.1} points a game, and the hustle plays are there.",
                        points_per_game
                    ),
                    "Finish your dodges: commit to the shot once you beat your man.".to_string(),
                )
            }
        }
        Position::Defense => {
            let takeaways_per_game = metrics.get("caused_turnovers") / games;
            if takeaways_per_game >= 1.0 {
                (
                    format!(
                        "Averaging {:.1} caused turnovers a game is lockdown defense.",
                        takeaways_per_game
                    ),
                    "Keep throwing checks early in possessions; it is working.".to_string(),
                )
            } else {
                (
                    format!(
                        "At {:.1} caused turnovers a game there is more to take.",
                        takeaways_per_game
                    ),
                    "Focus on footwork first; the takeaway comes from position.".to_string(),
                )
            }
        }
        Position::Faceoff => {
            let faceoff_pct = metrics.get("faceoff_pct");
            if faceoff_pct > 0.50 {
                (
                    format!(
                        "Winning {:.0}% at the X means your team starts with the ball.",
                        faceoff_pct * 100.0
                    ),
                    "Add exit moves to turn clamp wins into fast breaks.".to_string(),
                )
            } else {
                (
                    format!(
                        "A {:.0}% win rate at the X says the clamp needs reps.",
                        faceoff_pct * 100.0
                    ),
                    "Drill your counter move; opponents have scouted your first.".to_string(),
                )
            }
        }
        Position::Lsm => {
            let ground_balls_per_game = metrics.get("ground_balls") / games;
            if ground_balls_per_game >= 3.0 {
                (
                    format!(
                        "{:.1} ground balls a game means you are living between the lines.",
                        ground_balls_per_game
                    ),
                    "Look upfield after the scoop; your outlet starts the break.".to_string(),
                )
            } else {
                (
                    format!(
                        "{:.1} ground balls a game leaves loose possessions on the turf.",
                        ground_balls_per_game
                    ),
                    "Box out before the scoop instead of raking through traffic.".to_string(),
                )
            }
        }
    }
}

/// Headline counting stat for the off-season recap line.
fn headline_stat(position: Position, metrics: &AggregatedMetrics) -> String {
    match position {
        Position::Goalie => format!("{:.0} saves", metrics.get("saves")),
        Position::Attack | Position::Midfield => {
            format!("{:.0} points", metrics.get("points"))
        }
        Position::Defense | Position::Lsm => {
            format!("{:.0} ground balls", metrics.get("ground_balls"))
        }
        Position::Faceoff => format!("{:.0} faceoff wins", metrics.get("faceoff_wins")),
    }
}
