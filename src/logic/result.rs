//! Result submission: decide a match and advance its winner into the next round.

use crate::logic::rules::{decide_winner, feeder_slot};
use crate::models::{BracketError, MatchId, MatchResult, Outcome, TournamentId};
use crate::store::{BracketStore, StoreTx};
use chrono::Utc;

/// Resolve one match from a reported result.
///
/// 1. The match must exist in the tournament, still be scheduled and have both teams.
/// 2. The winner comes from [`decide_winner`]; a level score without a deciding tie-break is
///    rejected with `UndecidedDraw`.
/// 3. Scores, winner and `Finished` are written, and the winner is copied into slot A (odd match
///    number) or slot B (even) of the next match, in the same transaction.
///
/// A second submission for the same match fails with `AlreadyFinished` and changes nothing.
pub fn submit_match_result<S: BracketStore>(
    store: &S,
    tournament_id: TournamentId,
    match_id: MatchId,
    result: MatchResult,
) -> Result<(), BracketError> {
    let mut tx = store.begin()?;

    let m = tx
        .find_match(tournament_id, match_id)?
        .ok_or_else(|| BracketError::match_not_found(match_id))?;
    if m.is_finished() {
        return Err(BracketError::AlreadyFinished);
    }
    if m.occupants().is_none() {
        return Err(BracketError::SlotsNotReady);
    }

    let winner_id = m
        .slot(decide_winner(&result)?.slot())
        .ok_or(BracketError::SlotsNotReady)?;
    // Tie-break scores are only kept when they decided the match.
    let (tie_break_a, tie_break_b) = if result.is_level() {
        (result.tie_break_a, result.tie_break_b)
    } else {
        (None, None)
    };
    let outcome = Outcome {
        score_a: result.score_a,
        score_b: result.score_b,
        tie_break_a,
        tie_break_b,
        winner_id,
        finished_at: Utc::now(),
    };
    tx.record_outcome(m.id, &outcome)?;

    match m.next_match_id {
        Some(next_id) => {
            let slot = feeder_slot(m.match_number);
            tx.fill_slot(next_id, slot, winner_id)?;
            tx.commit()?;
            log::debug!(
                "Match {} (round {}, #{}) won by {}; advanced to slot {:?} of {}",
                m.id,
                m.round,
                m.match_number,
                winner_id,
                slot,
                next_id
            );
        }
        None => {
            tx.commit()?;
            log::info!(
                "Final of tournament {} decided: champion {}",
                tournament_id,
                winner_id
            );
        }
    }
    Ok(())
}
