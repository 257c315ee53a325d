//! Configuration bounds checks for scheduling requests.

use crate::models::{ScheduleError, Tournament};

/// Accepted range for minimum matches per participant.
pub const MINIMUM_MATCHES_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// Accepted range for the match interval, in minutes.
pub const MATCH_INTERVAL_RANGE: std::ops::RangeInclusive<u32> = 0..=300;

/// Check the tournament configuration values the scheduler depends on.
/// Name, location and date validation stay with the input layer.
pub fn validate_tournament(tournament: &Tournament) -> Result<(), ScheduleError> {
    if !MINIMUM_MATCHES_RANGE.contains(&tournament.minimum_matches) {
        return Err(ScheduleError::MinimumMatchesOutOfRange {
            value: tournament.minimum_matches,
        });
    }
    if !MATCH_INTERVAL_RANGE.contains(&tournament.match_interval) {
        return Err(ScheduleError::MatchIntervalOutOfRange {
            value: tournament.match_interval,
        });
    }
    Ok(())
}
