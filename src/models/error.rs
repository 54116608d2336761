//! Errors returned by bracket generation, result submission and the storage seam.

use crate::models::game::MatchId;
use crate::models::participant::ParticipantId;
use crate::models::tournament::TournamentId;
use thiserror::Error;

/// Which entity a `NotFound` refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Missing {
    Tournament(TournamentId),
    /// The match does not exist, or does not belong to the given tournament.
    Match(MatchId),
    Participant(ParticipantId),
}

impl std::fmt::Display for Missing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Missing::Tournament(id) => write!(f, "tournament {}", id),
            Missing::Match(id) => write!(f, "match {}", id),
            Missing::Participant(id) => write!(f, "participant {}", id),
        }
    }
}

/// Faults raised by a storage backend. These are not business-rule rejections; callers may
/// retry the whole operation.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum StoreError {
    #[error("storage lock poisoned")]
    Poisoned,

    #[error("no stored tournament {0}")]
    MissingTournament(TournamentId),

    #[error("no stored match {0}")]
    MissingMatch(MatchId),

    #[error("match {0} already stored")]
    DuplicateMatch(MatchId),
}

/// Every way generating a bracket or submitting a result can fail.
///
/// All variants except `Store` are deterministic rejections: nothing was written.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum BracketError {
    #[error("Not found: {0}")]
    NotFound(Missing),

    #[error("Bracket already generated; clear the existing matches before generating again")]
    AlreadyGenerated,

    #[error("Unsupported bracket size {0}: max teams must be 2, 4, 8, 16 or 32")]
    UnsupportedSize(u32),

    #[error("Need {required} confirmed teams, only {confirmed} confirmed")]
    InsufficientParticipants { required: usize, confirmed: usize },

    #[error("More than {capacity} confirmed teams")]
    Overcapacity { capacity: usize },

    #[error("Match already finished")]
    AlreadyFinished,

    #[error("Both teams must be known before a result can be submitted")]
    SlotsNotReady,

    #[error("Scores are level; submit a deciding tie-break")]
    UndecidedDraw,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BracketError {
    pub fn tournament_not_found(id: TournamentId) -> Self {
        BracketError::NotFound(Missing::Tournament(id))
    }

    pub fn match_not_found(id: MatchId) -> Self {
        BracketError::NotFound(Missing::Match(id))
    }
}
