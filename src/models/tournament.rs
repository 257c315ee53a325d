//! Tournament configuration and scheduling errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur while generating a match schedule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// No participants supplied; nothing to schedule.
    NoParticipants,
    /// No playing fields supplied; matches cannot be placed anywhere.
    NoFields,
    /// Minimum matches per participant outside the accepted 1..=10 range.
    MinimumMatchesOutOfRange { value: u32 },
    /// Match interval outside the accepted 0..=300 minute range.
    MatchIntervalOutOfRange { value: u32 },
    /// The assigner could not place any remaining match at the current time
    /// slot and the slot never advances: a zero match interval keeps
    /// conflicting participants stuck at one time value (or no field
    /// capacity is available at all).
    UnschedulableMatches { remaining: usize },
    /// The reduced round-robin for a group cannot be realized: the removal
    /// degree sequence is not graphical for this group size and minimum-match
    /// value. The tournament configuration itself is at fault.
    InfeasibleDegreeSequence {
        group_size: usize,
        minimum_matches: u32,
    },
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::NoParticipants => write!(f, "No participants to schedule"),
            ScheduleError::NoFields => write!(f, "No playing fields available"),
            ScheduleError::MinimumMatchesOutOfRange { value } => {
                write!(f, "Minimum matches must be between 1 and 10 (got {value})")
            }
            ScheduleError::MatchIntervalOutOfRange { value } => {
                write!(f, "Match interval must be between 0 and 300 minutes (got {value})")
            }
            ScheduleError::UnschedulableMatches { remaining } => {
                write!(
                    f,
                    "Could not place {remaining} remaining matches in any time slot"
                )
            }
            ScheduleError::InfeasibleDegreeSequence {
                group_size,
                minimum_matches,
            } => {
                write!(
                    f,
                    "No valid schedule exists for a group of {group_size} with {minimum_matches} minimum matches"
                )
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Tournament configuration consumed by the scheduler. Persistence and
/// editing of tournaments belong to the surrounding application; the core
/// only reads `start_date`, `match_interval` and `minimum_matches`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// First time slot of the schedule.
    pub start_date: DateTime<Utc>,
    pub location: String,
    /// Minutes between consecutive time slots.
    pub match_interval: u32,
    /// Matches every participant must be guaranteed.
    pub minimum_matches: u32,
}

impl Tournament {
    /// Create a tournament configuration with a fresh id.
    pub fn new(
        name: impl Into<String>,
        start_date: DateTime<Utc>,
        location: impl Into<String>,
        match_interval: u32,
        minimum_matches: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start_date,
            location: location.into(),
            match_interval,
            minimum_matches,
        }
    }

    /// Group size for a clean round-robin: every participant meets exactly
    /// `minimum_matches` opponents.
    pub fn standard_group_size(&self) -> usize {
        self.minimum_matches as usize + 1
    }
}
