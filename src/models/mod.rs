//! Data structures for tournament scheduling: participants, fields, matches, schedules.

mod field;
mod game;
mod participant;
mod schedule;
mod tournament;

pub use field::{Field, FieldId};
pub use game::{MatchCandidate, MatchId, ScheduledMatch};
pub use participant::{Participant, ParticipantId};
pub use schedule::{FieldSummary, MatchOverview, ParticipantSummary, Schedule};
pub use tournament::{ScheduleError, Tournament, TournamentId};
