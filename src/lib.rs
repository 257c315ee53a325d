//! Tournament match scheduling: library with models and scheduling logic.
//!
//! Given a roster of participants, a minimum number of matches per
//! participant, a set of playing fields and a start time, produces a
//! conflict-free schedule assigning every match a time slot and a field.
//! Persistence, authentication and presentation belong to the surrounding
//! application; this crate only computes the schedule.

pub mod logic;
pub mod models;

pub use logic::{
    assign_times_and_fields, create_groups, generate_schedule, pair_exception_group,
    pair_standard_group, validate_tournament,
};
pub use models::{
    Field, FieldId, MatchCandidate, MatchId, MatchOverview, Participant, ParticipantId, Schedule,
    ScheduleError, ScheduledMatch, Tournament, TournamentId,
};
