use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, Result};

/// Which competitive tier a game belongs to. Stats are tracked separately
/// per context; aggregation callers filter by one context before reducing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// School-team games (conference flag is meaningful here).
    Primary,
    /// Club/travel-team games.
    Secondary,
}

/// How the entry was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntrySource {
    #[serde(rename = "live")]
    Live,
    #[serde(rename = "after-action")]
    AfterAction,
    #[serde(rename = "scanned")]
    Scanned,
}

/// The eleven countable stat fields across all positions.
///
/// Any single record only populates the subset for the athlete's position
/// (`Position::stat_fields`); the rest stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatField {
    ShotsFaced,
    Saves,
    GoalsAllowed,
    Clears,
    Goals,
    Assists,
    Shots,
    GroundBalls,
    CausedTurnovers,
    FaceoffWins,
    FaceoffLosses,
}

impl StatField {
    pub const ALL: [StatField; 11] = [
        StatField::ShotsFaced,
        StatField::Saves,
        StatField::GoalsAllowed,
        StatField::Clears,
        StatField::Goals,
        StatField::Assists,
        StatField::Shots,
        StatField::GroundBalls,
        StatField::CausedTurnovers,
        StatField::FaceoffWins,
        StatField::FaceoffLosses,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            StatField::ShotsFaced => "Shots Faced",
            StatField::Saves => "Saves",
            StatField::GoalsAllowed => "Goals Allowed",
            StatField::Clears => "Clears",
            StatField::Goals => "Goals",
            StatField::Assists => "Assists",
            StatField::Shots => "Shots",
            StatField::GroundBalls => "Ground Balls",
            StatField::CausedTurnovers => "Caused Turnovers",
            StatField::FaceoffWins => "Faceoff Wins",
            StatField::FaceoffLosses => "Faceoff Losses",
        }
    }
}

fn is_zero(v: &u32) -> bool {
    *v == 0
}

/// Per-game stat counts.
///
/// Fields are unsigned, so negative counts are unrepresentable and get
/// rejected at the deserialization boundary rather than deep inside
/// aggregation. Unpopulated fields default to zero on both read and write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub shots_faced: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub saves: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub goals_allowed: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub clears: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub goals: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub assists: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub shots: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub ground_balls: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub caused_turnovers: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub faceoff_wins: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub faceoff_losses: u32,
}

impl GameStats {
    pub fn get(&self, field: StatField) -> u32 {
        match field {
            StatField::ShotsFaced => self.shots_faced,
            StatField::Saves => self.saves,
            StatField::GoalsAllowed => self.goals_allowed,
            StatField::Clears => self.clears,
            StatField::Goals => self.goals,
            StatField::Assists => self.assists,
            StatField::Shots => self.shots,
            StatField::GroundBalls => self.ground_balls,
            StatField::CausedTurnovers => self.caused_turnovers,
            StatField::FaceoffWins => self.faceoff_wins,
            StatField::FaceoffLosses => self.faceoff_losses,
        }
    }

    pub fn set(&mut self, field: StatField, value: u32) {
        match field {
            StatField::ShotsFaced => self.shots_faced = value,
            StatField::Saves => self.saves = value,
            StatField::GoalsAllowed => self.goals_allowed = value,
            StatField::Clears => self.clears = value,
            StatField::Goals => self.goals = value,
            StatField::Assists => self.assists = value,
            StatField::Shots => self.shots = value,
            StatField::GroundBalls => self.ground_balls = value,
            StatField::CausedTurnovers => self.caused_turnovers = value,
            StatField::FaceoffWins => self.faceoff_wins = value,
            StatField::FaceoffLosses => self.faceoff_losses = value,
        }
    }
}

/// One logged game for one athlete.
///
/// Immutable once persisted; the engine consumes records read-only and the
/// edit/delete flows live in the app layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRecord {
    pub id: String,
    pub athlete_id: String,
    pub date: NaiveDate,
    pub context: Context,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    pub stats: GameStats,
    #[serde(default)]
    pub is_conference_game: bool,
    pub source: EntrySource,
}

impl StatRecord {
    /// Create a record for a game played on `date`.
    ///
    /// `today` is passed in rather than read from the clock so the check
    /// stays deterministic; future-dated games are rejected outright.
    pub fn new(
        athlete_id: impl Into<String>,
        date: NaiveDate,
        context: Context,
        stats: GameStats,
        source: EntrySource,
        today: NaiveDate,
    ) -> Result<Self> {
        if date > today {
            return Err(CoreError::FutureDate { date });
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            athlete_id: athlete_id.into(),
            date,
            context,
            opponent: None,
            stats,
            is_conference_game: false,
            source,
        })
    }

    /// Save percentage for this single game, `None` when no shots were faced.
    pub fn save_percentage(&self) -> Option<f64> {
        if self.stats.shots_faced == 0 {
            return None;
        }
        Some(f64::from(self.stats.saves) / f64::from(self.stats.shots_faced))
    }

    /// Shooting percentage for this single game, `None` when no shots taken.
    pub fn shooting_percentage(&self) -> Option<f64> {
        if self.stats.shots == 0 {
            return None;
        }
        Some(f64::from(self.stats.goals) / f64::from(self.stats.shots))
    }

    /// Faceoff win rate for this single game, `None` when no draws taken.
    pub fn faceoff_win_percentage(&self) -> Option<f64> {
        let taken = self.stats.faceoff_wins + self.stats.faceoff_losses;
        if taken == 0 {
            return None;
        }
        Some(f64::from(self.stats.faceoff_wins) / f64::from(taken))
    }
}
