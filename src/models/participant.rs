//! Participant data structure (a team or player registered for a tournament).

use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant (used in matches and lookups).
pub type ParticipantId = Uuid;

/// A participant in a tournament. Owned by the external roster collaborator;
/// immutable once loaded and referenced by id throughout scheduling.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub tournament_id: TournamentId,
    pub name: String,
}

impl Participant {
    /// Create a participant with a fresh id (real ids come from the roster owner).
    pub fn new(tournament_id: TournamentId, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            name: name.into(),
        }
    }
}
