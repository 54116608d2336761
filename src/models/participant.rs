//! Participant (a registered team) and its confirmation state.

use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant (used in match slots and as the winner).
pub type ParticipantId = Uuid;

/// Registration state. Only `Confirmed` participants are eligible for the draw.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    /// Registered, entry not yet settled (fee, crowdfunding goal, ...).
    #[default]
    Pending,
    Confirmed,
    Withdrawn,
}

/// A team registered into a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub tournament_id: TournamentId,
    pub name: String,
    pub status: ParticipantStatus,
    pub registered_at: DateTime<Utc>,
}

impl Participant {
    /// Create a pending participant with the given team name.
    pub fn new(tournament_id: TournamentId, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            name: name.into().trim().to_string(),
            status: ParticipantStatus::Pending,
            registered_at: Utc::now(),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == ParticipantStatus::Confirmed
    }

    pub fn confirm(&mut self) {
        self.status = ParticipantStatus::Confirmed;
    }

    pub fn withdraw(&mut self) {
        self.status = ParticipantStatus::Withdrawn;
    }
}
