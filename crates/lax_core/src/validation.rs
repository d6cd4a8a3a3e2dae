//! Cross-field consistency checks on a single stat record.
//!
//! Every rule produces a *soft* warning: unusual lines happen in real games
//! (a scorekeeper may undercount shots faced), so the engine reports and
//! the save flow asks the athlete to confirm. Nothing here blocks a save
//! or mutates the record.

use crate::models::{Position, StatRecord};

/// Outcome of validating one record. `is_valid` is simply "no warnings";
/// the caller owns the explicit save-anyway override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn from_warnings(warnings: Vec<String>) -> Self {
        Self { is_valid: warnings.is_empty(), warnings }
    }
}

/// Stat record validation utility.
pub struct StatValidator;

impl StatValidator {
    /// Run every consistency rule independently; multiple warnings may fire
    /// for one record. Pure function, the record is never modified.
    pub fn validate(record: &StatRecord, position: Position) -> ValidationReport {
        let mut warnings = Vec::new();
        let stats = &record.stats;

        if stats.shots_faced > 0 {
            if stats.saves > stats.shots_faced {
                warnings.push(format!(
                    "Saves ({}) cannot exceed shots faced ({})",
                    stats.saves, stats.shots_faced
                ));
            } else {
                // The expected goals-allowed only makes sense once the save
                // count itself is plausible.
                let expected_allowed = stats.shots_faced - stats.saves;
                if stats.goals_allowed != expected_allowed {
                    warnings.push(format!(
                        "Goals allowed ({}) does not match shots faced minus saves (expected {})",
                        stats.goals_allowed, expected_allowed
                    ));
                }
            }
        }

        if position.takes_shots() && stats.shots > 0 && stats.goals > stats.shots {
            warnings.push(format!(
                "Goals ({}) cannot exceed shots ({})",
                stats.goals, stats.shots
            ));
        }

        if !warnings.is_empty() {
            log::debug!(
                "record {} produced {} validation warning(s)",
                record.id,
                warnings.len()
            );
        }

        ValidationReport::from_warnings(warnings)
    }
}
