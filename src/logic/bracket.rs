//! Bracket generation: validate a tournament, draw the confirmed teams and build every match.

use crate::logic::rules::{next_slot_of, round_sizes};
use crate::models::{BracketError, BracketStatus, Match, MatchId, ParticipantId, TournamentId};
use crate::store::{BracketStore, StoreTx};
use rand::seq::SliceRandom;
use rand::Rng;

/// Orders the confirmed teams before they are paired into first-round matches.
pub trait Draw {
    fn draw(&mut self, entrants: &mut [ParticipantId]);
}

/// Unbiased shuffle (Fisher-Yates) using the wrapped RNG.
///
/// Production uses `RandomDraw(rand::thread_rng())`; tests seed a `StdRng`.
#[derive(Clone, Debug)]
pub struct RandomDraw<R>(pub R);

impl<R: Rng> Draw for RandomDraw<R> {
    fn draw(&mut self, entrants: &mut [ParticipantId]) {
        entrants.shuffle(&mut self.0);
    }
}

/// Keeps the confirmed order as the draw order.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepOrder;

impl Draw for KeepOrder {
    fn draw(&mut self, _entrants: &mut [ParticipantId]) {}
}

impl<D: Draw + ?Sized> Draw for &mut D {
    fn draw(&mut self, entrants: &mut [ParticipantId]) {
        (**self).draw(entrants)
    }
}

/// Knobs for [`generate_bracket`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GenerateOptions {
    /// Reject tournaments with more confirmed teams than `max_teams` instead of drawing from the
    /// first `max_teams` returned by the confirmation query.
    pub strict_capacity: bool,
}

/// Build the full knockout tree for a tournament and mark its bracket generated.
///
/// Checks, in order: tournament exists, bracket not generated yet, supported size, enough
/// confirmed teams. Every match and the status flip are written in one transaction; any error
/// leaves the store untouched.
pub fn generate_bracket<S, D>(
    store: &S,
    tournament_id: TournamentId,
    draw: &mut D,
    options: GenerateOptions,
) -> Result<(), BracketError>
where
    S: BracketStore,
    D: Draw + ?Sized,
{
    let mut tx = store.begin()?;

    let tournament = tx
        .tournament(tournament_id)?
        .ok_or_else(|| BracketError::tournament_not_found(tournament_id))?;
    if tournament.is_generated() {
        return Err(BracketError::AlreadyGenerated);
    }
    let rounds = round_sizes(tournament.max_teams)?;

    let capacity = tournament.max_teams as usize;
    let limit = if options.strict_capacity {
        capacity + 1
    } else {
        capacity
    };
    let mut entrants = tx.confirmed_participants(tournament_id, limit)?;
    entrants.truncate(limit);
    if entrants.len() < capacity {
        return Err(BracketError::InsufficientParticipants {
            required: capacity,
            confirmed: entrants.len(),
        });
    }
    if entrants.len() > capacity {
        return Err(BracketError::Overcapacity { capacity });
    }

    draw.draw(&mut entrants);
    let matches = plan_bracket(tournament_id, &rounds, &entrants);
    let match_count = matches.len();

    tx.insert_matches(matches)?;
    tx.set_bracket_status(tournament_id, BracketStatus::Generated)?;
    tx.commit()?;

    log::info!(
        "Generated bracket for tournament {} ({} teams, {} matches)",
        tournament_id,
        capacity,
        match_count
    );
    Ok(())
}

/// Lay out every match of the bracket.
///
/// `rounds` runs from the final (2) up to the first round; `draw` holds exactly as many teams as
/// the first round has slots. Rounds are built from the final outward so each match's next-match
/// id is already known when the match is created. The order only affects when ids are allocated:
/// the result lists the first round first, and matches are stored in that order.
pub fn plan_bracket(
    tournament_id: TournamentId,
    rounds: &[u32],
    draw: &[ParticipantId],
) -> Vec<Match> {
    let first_round = rounds.last().copied().unwrap_or(0);
    let mut matches = Vec::with_capacity(draw.len().saturating_sub(1));
    let mut next_round_ids: Vec<MatchId> = Vec::new();

    for &round in rounds {
        let mut pairs = draw.chunks_exact(2);
        let mut round_ids = Vec::with_capacity(round as usize / 2);
        let mut round_matches = Vec::with_capacity(round as usize / 2);

        for match_number in 1..=round / 2 {
            let next_match_id = next_slot_of(round, match_number).and_then(|next| {
                next_round_ids
                    .get(next.match_number as usize - 1)
                    .copied()
            });
            let mut m = Match::new(tournament_id, round, match_number, next_match_id);
            if round == first_round {
                if let Some(pair) = pairs.next() {
                    m = m.with_teams(pair[0], pair[1]);
                }
            }
            round_ids.push(m.id);
            round_matches.push(m);
        }

        // Prepend so the finished list runs first round -> final.
        round_matches.append(&mut matches);
        matches = round_matches;
        next_round_ids = round_ids;
    }

    matches
}
