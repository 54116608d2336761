//! Data structures for the bracket engine: tournaments, participants, matches, errors.

mod error;
mod game;
mod participant;
mod tournament;

pub use error::{BracketError, Missing, StoreError};
pub use game::{Match, MatchId, MatchResult, MatchStatus, Outcome, Slot};
pub use participant::{Participant, ParticipantId, ParticipantStatus};
pub use tournament::{BracketStatus, Tournament, TournamentId, SUPPORTED_SIZES};
