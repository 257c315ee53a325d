//! Playing field data structure.

use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a playing field.
pub type FieldId = Uuid;

/// A playing field available to a tournament. Supplied externally; immutable.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub tournament_id: TournamentId,
    pub name: String,
}

impl Field {
    /// Create a field with a fresh id (real ids come from the external collaborator).
    pub fn new(tournament_id: TournamentId, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            name: name.into(),
        }
    }
}
