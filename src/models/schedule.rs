//! The assembled schedule and its display mapping.

use crate::models::field::{Field, FieldId};
use crate::models::game::{MatchId, ScheduledMatch};
use crate::models::participant::ParticipantId;
use serde::{Deserialize, Serialize};

/// Field reference in the display shape.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub id: FieldId,
    pub name: String,
}

/// Participant reference in the display shape.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParticipantSummary {
    pub id: ParticipantId,
    pub name: String,
}

/// Display/persistence view of one scheduled match: human-readable date and
/// time strings, field name, participant names in slot order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchOverview {
    pub id: MatchId,
    /// "dd.MM"
    pub date: String,
    /// "HH:MM"
    pub time: String,
    pub field: FieldSummary,
    pub participants: Vec<ParticipantSummary>,
}

impl MatchOverview {
    /// Map a scheduled match to its display shape. A field id with no match
    /// in `fields` falls back to a placeholder name.
    pub fn from_match(m: &ScheduledMatch, fields: &[Field]) -> Self {
        let field = match fields.iter().find(|f| f.id == m.field_id) {
            Some(f) => FieldSummary {
                id: f.id,
                name: f.name.clone(),
            },
            None => FieldSummary {
                id: m.field_id,
                name: "Unknown Field".to_string(),
            },
        };

        Self {
            id: m.id,
            date: m.time.format("%d.%m").to_string(),
            time: m.time.format("%H:%M").to_string(),
            field,
            participants: m
                .participants
                .iter()
                .map(|p| ParticipantSummary {
                    id: p.id,
                    name: p.name.clone(),
                })
                .collect(),
        }
    }
}

/// The full ordered schedule for one tournament: every scheduled match in
/// processing order, plus the derived per-match display data. Created fresh
/// for a single scheduling run and handed to the persistence collaborator.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub matches: Vec<ScheduledMatch>,
    pub overview: Vec<MatchOverview>,
}

impl Schedule {
    /// Assemble a schedule from scheduled matches, deriving the overview.
    pub fn new(matches: Vec<ScheduledMatch>, fields: &[Field]) -> Self {
        let overview = matches
            .iter()
            .map(|m| MatchOverview::from_match(m, fields))
            .collect();
        Self { matches, overview }
    }
}
