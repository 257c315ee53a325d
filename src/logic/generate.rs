//! Schedule generation: the full pipeline from roster to assembled schedule.

use crate::logic::assignment::assign_times_and_fields;
use crate::logic::grouping::create_groups;
use crate::logic::pairing::{pair_exception_group, pair_standard_group};
use crate::logic::validation::validate_tournament;
use crate::models::{Field, Participant, Schedule, ScheduleError, ScheduledMatch, Tournament};
use chrono::Duration;

/// Generate the complete match schedule for one tournament.
///
/// Participants are split into groups, each group is paired (full round-robin
/// for standard groups, reduced pairing for the rest), and groups are then
/// scheduled two at a time on disjoint halves of the field pool so both run
/// concurrently. An unpaired trailing group uses every field. The start time
/// advances by three intervals per step, or further when a step needs more
/// than three rounds, so fields are never double-booked across steps.
///
/// Either a full consistent schedule is returned, or the first error; nothing
/// partial is ever produced.
pub fn generate_schedule(
    tournament: &Tournament,
    participants: &[Participant],
    fields: &[Field],
) -> Result<Schedule, ScheduleError> {
    validate_tournament(tournament)?;
    if participants.is_empty() {
        return Err(ScheduleError::NoParticipants);
    }
    if fields.is_empty() {
        return Err(ScheduleError::NoFields);
    }

    let minimum_matches = tournament.minimum_matches;
    let standard_size = tournament.standard_group_size();

    let groups = create_groups(participants, minimum_matches);
    log::debug!(
        "partitioned {} participants into {} groups",
        participants.len(),
        groups.len()
    );

    let mut matches_per_group = Vec::with_capacity(groups.len());
    for group in &groups {
        let group_matches = if group.len() == standard_size {
            pair_standard_group(group)
        } else {
            pair_exception_group(group, minimum_matches)?
        };
        log::debug!(
            "group of {} paired into {} matches",
            group.len(),
            group_matches.len()
        );
        matches_per_group.push(group_matches);
    }

    let interval = tournament.match_interval;
    let half = fields.len() / 2;
    let mut start = tournament.start_date;
    let mut scheduled: Vec<ScheduledMatch> = Vec::new();

    let mut i = 0;
    while i < groups.len() {
        let step_start = scheduled.len();

        if i + 1 < groups.len() && half > 0 {
            // Paired groups run concurrently on disjoint halves of the pool.
            scheduled.extend(assign_times_and_fields(
                std::mem::take(&mut matches_per_group[i]),
                &fields[..half],
                start,
                interval,
                groups[i].len(),
            )?);
            scheduled.extend(assign_times_and_fields(
                std::mem::take(&mut matches_per_group[i + 1]),
                &fields[half..],
                start,
                interval,
                groups[i + 1].len(),
            )?);
            i += 2;
        } else {
            // Trailing odd group, or too few fields to split: full pool.
            scheduled.extend(assign_times_and_fields(
                std::mem::take(&mut matches_per_group[i]),
                fields,
                start,
                interval,
                groups[i].len(),
            )?);
            i += 1;
        }

        // Reserve three rounds per step; stretch past the last assigned slot
        // when a group needed more, so the next step cannot reuse its fields.
        let mut next = start + Duration::minutes(i64::from(3 * interval));
        if let Some(last) = scheduled[step_start..].iter().map(|m| m.time).max() {
            next = next.max(last + Duration::minutes(i64::from(interval)));
        }
        start = next;
    }

    log::info!("generated schedule with {} matches", scheduled.len());
    Ok(Schedule::new(scheduled, fields))
}
