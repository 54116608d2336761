//! Storage seam between the bracket engine and whatever holds tournaments and matches.
//!
//! Both engine operations run inside one [`StoreTx`]. A transaction that is dropped without
//! [`StoreTx::commit`] discards everything staged in it, so an early `?` return never leaves
//! partial state behind.

mod memory;

pub use memory::{MemoryStore, MemoryTx};

use crate::models::{
    BracketStatus, Match, MatchId, Outcome, ParticipantId, Slot, StoreError, Tournament,
    TournamentId,
};

/// A backend able to open transactions.
pub trait BracketStore {
    type Tx<'a>: StoreTx
    where
        Self: 'a;

    /// Acquire a transaction. Concurrent transactions touching the same rows must be serialized
    /// by the backend (row locks, compare-and-swap or a store-wide lock).
    fn begin(&self) -> Result<Self::Tx<'_>, StoreError>;
}

/// Reads and field-level writes available inside a transaction.
pub trait StoreTx {
    fn tournament(&mut self, id: TournamentId) -> Result<Option<Tournament>, StoreError>;

    fn set_bracket_status(
        &mut self,
        id: TournamentId,
        status: BracketStatus,
    ) -> Result<(), StoreError>;

    /// Up to `limit` confirmed participant ids for the tournament, in confirmation-query order.
    fn confirmed_participants(
        &mut self,
        id: TournamentId,
        limit: usize,
    ) -> Result<Vec<ParticipantId>, StoreError>;

    fn insert_matches(&mut self, matches: Vec<Match>) -> Result<(), StoreError>;

    /// The match, only if it belongs to `tournament_id`.
    fn find_match(
        &mut self,
        tournament_id: TournamentId,
        match_id: MatchId,
    ) -> Result<Option<Match>, StoreError>;

    /// Write score, tie-break, winner and status. Slots are left alone.
    fn record_outcome(&mut self, match_id: MatchId, outcome: &Outcome) -> Result<(), StoreError>;

    /// Write a single slot of a match.
    fn fill_slot(
        &mut self,
        match_id: MatchId,
        slot: Slot,
        participant: ParticipantId,
    ) -> Result<(), StoreError>;

    fn commit(self) -> Result<(), StoreError>;
}
