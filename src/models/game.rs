//! Match candidates and scheduled matches.

use crate::models::field::FieldId;
use crate::models::participant::Participant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a match. Matches are created in memory and only get a
/// durable id once the persistence collaborator stores them, so the
/// unassigned state is explicit rather than a nullable id.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchId {
    /// Not yet stored; no durable id exists.
    #[default]
    Pending,
    /// Stored; durable id assigned on write.
    Persisted(Uuid),
}

/// A pairing produced by the pairing stage: two participants in slot order
/// (slot 1 first), with no time or field assigned yet. `local_id` is
/// sequential per group and used only for intra-run bookkeeping.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub local_id: usize,
    pub participants: [Participant; 2],
}

impl MatchCandidate {
    pub fn new(local_id: usize, slot_1: Participant, slot_2: Participant) -> Self {
        Self {
            local_id,
            participants: [slot_1, slot_2],
        }
    }
}

/// A match candidate with a concrete time slot and field. Immutable once
/// produced by the assignment stage.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    /// Pending until the persistence collaborator stores the match.
    pub id: MatchId,
    pub participants: [Participant; 2],
    pub time: DateTime<Utc>,
    pub field_id: FieldId,
}

impl ScheduledMatch {
    pub fn new(candidate: MatchCandidate, time: DateTime<Utc>, field_id: FieldId) -> Self {
        Self {
            id: MatchId::Pending,
            participants: candidate.participants,
            time,
            field_id,
        }
    }
}
