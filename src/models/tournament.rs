//! Tournament and BracketStatus.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Bracket sizes the engine can build: powers of two from 2 to 32.
pub const SUPPORTED_SIZES: [u32; 5] = [2, 4, 8, 16, 32];

/// Whether the knockout tree has been materialized. One-way: never reset by the engine.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketStatus {
    #[default]
    NotGenerated,
    Generated,
}

/// The parts of a tournament the bracket engine reads and writes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// Fixed capacity; must be one of [`SUPPORTED_SIZES`] for a bracket to be generated.
    pub max_teams: u32,
    pub bracket_status: BracketStatus,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a tournament with no bracket yet.
    ///
    /// Capacity is not validated here; an unsupported size is only rejected when generation is
    /// attempted, so registration can proceed independently of the bracket.
    pub fn new(name: impl Into<String>, max_teams: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into().trim().to_string(),
            max_teams,
            bracket_status: BracketStatus::NotGenerated,
            created_at: Utc::now(),
        }
    }

    pub fn is_generated(&self) -> bool {
        self.bracket_status == BracketStatus::Generated
    }
}
