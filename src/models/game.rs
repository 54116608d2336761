//! Match, Slot, MatchStatus and the reported result of a match.

use crate::models::participant::ParticipantId;
use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// One of the two participant positions in a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    A,
    B,
}

/// Match lifecycle. `Finished` is terminal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Finished,
}

/// A score as reported by the administrator. Tie-break scores (penalty shootout) only matter
/// when the regulation scores are level.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score_a: u32,
    pub score_b: u32,
    #[serde(default)]
    pub tie_break_a: Option<u32>,
    #[serde(default)]
    pub tie_break_b: Option<u32>,
}

impl MatchResult {
    /// Regulation-time result with no tie-break.
    pub fn new(score_a: u32, score_b: u32) -> Self {
        Self {
            score_a,
            score_b,
            tie_break_a: None,
            tie_break_b: None,
        }
    }

    /// Level regulation score decided by a tie-break.
    pub fn with_tie_break(mut self, tie_break_a: u32, tie_break_b: u32) -> Self {
        self.tie_break_a = Some(tie_break_a);
        self.tie_break_b = Some(tie_break_b);
        self
    }

    pub fn is_level(&self) -> bool {
        self.score_a == self.score_b
    }
}

/// Everything written to a match when it is resolved.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Outcome {
    pub score_a: u32,
    pub score_b: u32,
    /// `None` unless the regulation scores were level.
    pub tie_break_a: Option<u32>,
    pub tie_break_b: Option<u32>,
    pub winner_id: ParticipantId,
    pub finished_at: DateTime<Utc>,
}

/// A node of the knockout tree.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    /// Size of the bracket slice this match decides: 2 is the final, 4 a semi-final, and so on.
    pub round: u32,
    /// 1-based position within the round.
    pub match_number: u32,
    pub team_a: Option<ParticipantId>,
    pub team_b: Option<ParticipantId>,
    /// Match in round `round / 2` this one feeds. `None` only for the final.
    pub next_match_id: Option<MatchId>,
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    pub tie_break_a: Option<u32>,
    pub tie_break_b: Option<u32>,
    /// Set together with `status = Finished`; always one of the two slot occupants.
    pub winner_id: Option<ParticipantId>,
    pub status: MatchStatus,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Match {
    /// A scheduled match with empty slots.
    pub fn new(
        tournament_id: TournamentId,
        round: u32,
        match_number: u32,
        next_match_id: Option<MatchId>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            round,
            match_number,
            team_a: None,
            team_b: None,
            next_match_id,
            score_a: None,
            score_b: None,
            tie_break_a: None,
            tie_break_b: None,
            winner_id: None,
            status: MatchStatus::Scheduled,
            finished_at: None,
        }
    }

    /// Fill both slots (first-round matches, straight from the draw).
    pub fn with_teams(mut self, team_a: ParticipantId, team_b: ParticipantId) -> Self {
        self.team_a = Some(team_a);
        self.team_b = Some(team_b);
        self
    }

    pub fn slot(&self, slot: Slot) -> Option<ParticipantId> {
        match slot {
            Slot::A => self.team_a,
            Slot::B => self.team_b,
        }
    }

    /// Write one slot, leaving every other field untouched.
    pub fn set_slot(&mut self, slot: Slot, participant: ParticipantId) {
        match slot {
            Slot::A => self.team_a = Some(participant),
            Slot::B => self.team_b = Some(participant),
        }
    }

    /// Both occupants, or `None` while either slot is still empty.
    pub fn occupants(&self) -> Option<(ParticipantId, ParticipantId)> {
        self.team_a.zip(self.team_b)
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    pub fn is_final(&self) -> bool {
        self.next_match_id.is_none()
    }

    /// Write the outcome fields and mark the match finished. Slots are not touched.
    pub fn apply_outcome(&mut self, outcome: &Outcome) {
        self.score_a = Some(outcome.score_a);
        self.score_b = Some(outcome.score_b);
        self.tie_break_a = outcome.tie_break_a;
        self.tie_break_b = outcome.tie_break_b;
        self.winner_id = Some(outcome.winner_id);
        self.status = MatchStatus::Finished;
        self.finished_at = Some(outcome.finished_at);
    }
}
