use serde::{Deserialize, Serialize};

use super::stat_record::StatField;

/// Field positions an athlete can register under.
///
/// `Faceoff` and `Lsm` only exist in the boys' game; the goal catalog and
/// per-position field tables reflect that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Goalie,
    Attack,
    Midfield,
    Defense,
    Faceoff,
    Lsm,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Goalie,
        Position::Attack,
        Position::Midfield,
        Position::Defense,
        Position::Faceoff,
        Position::Lsm,
    ];

    /// The ordered stat fields tracked for this position.
    ///
    /// This is the single table both the entry UI and the aggregation layer
    /// key off, so the two can never disagree about which fields a position
    /// populates.
    pub fn stat_fields(&self) -> &'static [StatField] {
        match self {
            Position::Goalie => &[
                StatField::ShotsFaced,
                StatField::Saves,
                StatField::GoalsAllowed,
                StatField::Clears,
                StatField::GroundBalls,
            ],
            Position::Attack => &[
                StatField::Goals,
                StatField::Assists,
                StatField::Shots,
                StatField::GroundBalls,
                StatField::CausedTurnovers,
            ],
            Position::Midfield => &[
                StatField::Goals,
                StatField::Assists,
                StatField::Shots,
                StatField::GroundBalls,
                StatField::CausedTurnovers,
                StatField::Clears,
            ],
            Position::Defense => &[
                StatField::GroundBalls,
                StatField::CausedTurnovers,
                StatField::Clears,
                StatField::Goals,
                StatField::Assists,
            ],
            Position::Faceoff => &[
                StatField::FaceoffWins,
                StatField::FaceoffLosses,
                StatField::GroundBalls,
                StatField::Goals,
                StatField::Assists,
            ],
            Position::Lsm => &[
                StatField::GroundBalls,
                StatField::CausedTurnovers,
                StatField::Clears,
                StatField::Goals,
                StatField::Assists,
            ],
        }
    }

    /// Positions whose field set includes `Shots` (used by the
    /// goals-vs-shots validation rule).
    pub fn takes_shots(&self) -> bool {
        self.stat_fields().contains(&StatField::Shots)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Position::Goalie => "Goalie",
            Position::Attack => "Attack",
            Position::Midfield => "Midfield",
            Position::Defense => "Defense",
            Position::Faceoff => "Faceoff",
            Position::Lsm => "LSM",
        }
    }
}

/// Team level a season is played at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "freshman")]
    Freshman,
    #[serde(rename = "jv")]
    JuniorVarsity,
    #[serde(rename = "varsity")]
    Varsity,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Freshman, Level::JuniorVarsity, Level::Varsity];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goalie_fields_include_shots_faced() {
        let fields = Position::Goalie.stat_fields();
        assert!(fields.contains(&StatField::ShotsFaced));
        assert!(fields.contains(&StatField::Saves));
        assert!(!fields.contains(&StatField::Shots));
    }

    #[test]
    fn test_shot_takers() {
        assert!(Position::Attack.takes_shots());
        assert!(Position::Midfield.takes_shots());
        assert!(!Position::Goalie.takes_shots());
        assert!(!Position::Defense.takes_shots());
        assert!(!Position::Faceoff.takes_shots());
    }

    #[test]
    fn test_every_position_has_fields() {
        for position in Position::ALL {
            assert!(
                !position.stat_fields().is_empty(),
                "{:?} has no stat fields",
                position
            );
        }
    }

    #[test]
    fn test_position_serde_tags() {
        let json = serde_json::to_string(&Position::Faceoff).unwrap();
        assert_eq!(json, "\"faceoff\"");
        let level: Level = serde_json::from_str("\"jv\"").unwrap();
        assert_eq!(level, Level::JuniorVarsity);
    }
}
