//! Time and field assignment: turn unordered match candidates into concrete
//! time slots and fields without conflicts.

use crate::models::{Field, MatchCandidate, ParticipantId, ScheduleError, ScheduledMatch};
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, HashSet};

/// Greedily schedule a group's candidates onto `fields`, one pass per time
/// slot starting at `start`, slots `interval_minutes` apart.
///
/// Per slot, candidates are scanned in order and placed on the next free
/// field unless one of their participants is already playing at that slot;
/// at most `min(group_size / 2, fields.len())` matches start per slot.
///
/// Guarantees: no participant twice at the same slot, no two matches on the
/// same field at the same slot, consecutive matches on one field separated
/// by at least one interval.
///
/// Fails with [`ScheduleError::UnschedulableMatches`] when a full pass
/// places nothing: with a positive interval a fresh slot always accepts the
/// first pending candidate, so a stalled pass means a zero interval left
/// conflicting participants pinned to one time value (or there is no field
/// capacity at all), and the remaining candidates can never be placed.
pub fn assign_times_and_fields(
    candidates: Vec<MatchCandidate>,
    fields: &[Field],
    start: DateTime<Utc>,
    interval_minutes: u32,
    group_size: usize,
) -> Result<Vec<ScheduledMatch>, ScheduleError> {
    let simultaneous = (group_size / 2).min(fields.len());

    let mut pending = candidates;
    let mut scheduled = Vec::new();
    // Participants already playing per time slot.
    let mut busy_per_slot: HashMap<DateTime<Utc>, HashSet<ParticipantId>> = HashMap::new();
    let mut current = start;

    while !pending.is_empty() {
        let busy = busy_per_slot.entry(current).or_default();

        let mut placed = 0;
        let mut i = 0;
        while i < pending.len() && placed < simultaneous {
            let ids = [
                pending[i].participants[0].id,
                pending[i].participants[1].id,
            ];
            if ids.iter().any(|id| busy.contains(id)) {
                i += 1;
                continue;
            }

            let candidate = pending.remove(i);
            busy.extend(ids);
            scheduled.push(ScheduledMatch::new(candidate, current, fields[placed].id));
            placed += 1;
        }

        if placed == 0 {
            return Err(ScheduleError::UnschedulableMatches {
                remaining: pending.len(),
            });
        }

        current += Duration::minutes(i64::from(interval_minutes));
    }

    Ok(scheduled)
}
