//! In-memory store: one mutex over all tables, transactions work on a staged copy.

use crate::models::{
    BracketError, BracketStatus, Match, MatchId, Missing, Outcome, Participant, ParticipantId, Slot,
    StoreError, Tournament, TournamentId,
};
use crate::store::{BracketStore, StoreTx};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Clone, Debug, Default)]
struct Tables {
    tournaments: HashMap<TournamentId, Tournament>,
    /// Registration order is the order of the confirmed-participant query.
    participants: Vec<Participant>,
    matches: HashMap<MatchId, Match>,
}

impl Tables {
    fn tournament_exists(&self, id: TournamentId) -> Result<(), BracketError> {
        if self.tournaments.contains_key(&id) {
            Ok(())
        } else {
            Err(BracketError::tournament_not_found(id))
        }
    }

    fn participant_mut(
        &mut self,
        tournament_id: TournamentId,
        participant_id: ParticipantId,
    ) -> Result<&mut Participant, BracketError> {
        self.tournament_exists(tournament_id)?;
        self.participants
            .iter_mut()
            .find(|p| p.id == participant_id && p.tournament_id == tournament_id)
            .ok_or(BracketError::NotFound(Missing::Participant(participant_id)))
    }
}

/// Shared tournament/participant/match storage for a single process.
///
/// A transaction holds the lock for its whole lifetime, so transactions are fully serialized:
/// two submissions for the same match can never both observe it as scheduled.
///
/// `begin` stages a copy of every table, so each transaction costs time proportional to the whole
/// store, not to the tournament it touches. Fine for an admin surface with a handful of
/// tournaments; a database-backed `BracketStore` is the way to scale past that.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Create a tournament with no bracket.
    pub fn create_tournament(
        &self,
        name: impl Into<String>,
        max_teams: u32,
    ) -> Result<Tournament, StoreError> {
        let tournament = Tournament::new(name, max_teams);
        self.lock()?
            .tournaments
            .insert(tournament.id, tournament.clone());
        Ok(tournament)
    }

    pub fn tournament(&self, id: TournamentId) -> Result<Option<Tournament>, StoreError> {
        Ok(self.lock()?.tournaments.get(&id).cloned())
    }

    /// Register a team as pending.
    pub fn register_participant(
        &self,
        tournament_id: TournamentId,
        name: impl Into<String>,
    ) -> Result<Participant, BracketError> {
        let mut tables = self.lock()?;
        tables.tournament_exists(tournament_id)?;
        let participant = Participant::new(tournament_id, name);
        tables.participants.push(participant.clone());
        Ok(participant)
    }

    /// Mark a participant confirmed (entry settled upstream).
    pub fn confirm_participant(
        &self,
        tournament_id: TournamentId,
        participant_id: ParticipantId,
    ) -> Result<Participant, BracketError> {
        let mut tables = self.lock()?;
        let participant = tables.participant_mut(tournament_id, participant_id)?;
        participant.confirm();
        Ok(participant.clone())
    }

    pub fn withdraw_participant(
        &self,
        tournament_id: TournamentId,
        participant_id: ParticipantId,
    ) -> Result<Participant, BracketError> {
        let mut tables = self.lock()?;
        let participant = tables.participant_mut(tournament_id, participant_id)?;
        participant.withdraw();
        Ok(participant.clone())
    }

    /// All participants of a tournament in registration order.
    pub fn participants(&self, tournament_id: TournamentId) -> Result<Vec<Participant>, StoreError> {
        Ok(self
            .lock()?
            .participants
            .iter()
            .filter(|p| p.tournament_id == tournament_id)
            .cloned()
            .collect())
    }

    /// All matches of a tournament, first round first, then by match number.
    pub fn matches(&self, tournament_id: TournamentId) -> Result<Vec<Match>, StoreError> {
        let mut matches: Vec<Match> = self
            .lock()?
            .matches
            .values()
            .filter(|m| m.tournament_id == tournament_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            b.round
                .cmp(&a.round)
                .then(a.match_number.cmp(&b.match_number))
        });
        Ok(matches)
    }
}

impl BracketStore for MemoryStore {
    type Tx<'a> = MemoryTx<'a>;

    fn begin(&self) -> Result<MemoryTx<'_>, StoreError> {
        let guard = self.lock()?;
        let staged = guard.clone();
        Ok(MemoryTx { guard, staged })
    }
}

/// Transaction over a [`MemoryStore`]. Writes go to `staged` and only replace the shared tables
/// on commit; dropping the transaction discards them.
pub struct MemoryTx<'a> {
    guard: MutexGuard<'a, Tables>,
    staged: Tables,
}

impl MemoryTx<'_> {
    fn match_mut(&mut self, match_id: MatchId) -> Result<&mut Match, StoreError> {
        self.staged
            .matches
            .get_mut(&match_id)
            .ok_or(StoreError::MissingMatch(match_id))
    }
}

impl StoreTx for MemoryTx<'_> {
    fn tournament(&mut self, id: TournamentId) -> Result<Option<Tournament>, StoreError> {
        Ok(self.staged.tournaments.get(&id).cloned())
    }

    fn set_bracket_status(
        &mut self,
        id: TournamentId,
        status: BracketStatus,
    ) -> Result<(), StoreError> {
        let tournament = self
            .staged
            .tournaments
            .get_mut(&id)
            .ok_or(StoreError::MissingTournament(id))?;
        tournament.bracket_status = status;
        Ok(())
    }

    fn confirmed_participants(
        &mut self,
        id: TournamentId,
        limit: usize,
    ) -> Result<Vec<ParticipantId>, StoreError> {
        Ok(self
            .staged
            .participants
            .iter()
            .filter(|p| p.tournament_id == id && p.is_confirmed())
            .take(limit)
            .map(|p| p.id)
            .collect())
    }

    fn insert_matches(&mut self, matches: Vec<Match>) -> Result<(), StoreError> {
        for m in matches {
            if self.staged.matches.contains_key(&m.id) {
                return Err(StoreError::DuplicateMatch(m.id));
            }
            self.staged.matches.insert(m.id, m);
        }
        Ok(())
    }

    fn find_match(
        &mut self,
        tournament_id: TournamentId,
        match_id: MatchId,
    ) -> Result<Option<Match>, StoreError> {
        Ok(self
            .staged
            .matches
            .get(&match_id)
            .filter(|m| m.tournament_id == tournament_id)
            .cloned())
    }

    fn record_outcome(&mut self, match_id: MatchId, outcome: &Outcome) -> Result<(), StoreError> {
        self.match_mut(match_id)?.apply_outcome(outcome);
        Ok(())
    }

    fn fill_slot(
        &mut self,
        match_id: MatchId,
        slot: Slot,
        participant: ParticipantId,
    ) -> Result<(), StoreError> {
        self.match_mut(match_id)?.set_slot(slot, participant);
        Ok(())
    }

    fn commit(mut self) -> Result<(), StoreError> {
        *self.guard = std::mem::take(&mut self.staged);
        Ok(())
    }
}
