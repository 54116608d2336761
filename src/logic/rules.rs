//! Bracket shape, slot addressing and winner determination shared by generation and results.

use crate::models::{BracketError, MatchResult, Slot, SUPPORTED_SIZES};

/// Where a match's winner goes: match `match_number` of round `round`, slot `slot`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NextSlot {
    pub round: u32,
    pub match_number: u32,
    pub slot: Slot,
}

/// Which side of a match won.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decision {
    A,
    B,
}

impl Decision {
    pub fn slot(self) -> Slot {
        match self {
            Decision::A => Slot::A,
            Decision::B => Slot::B,
        }
    }
}

pub fn is_supported_size(max_teams: u32) -> bool {
    SUPPORTED_SIZES.contains(&max_teams)
}

/// Round sizes from the final (2) up to the first round (`max_teams`).
pub fn round_sizes(max_teams: u32) -> Result<Vec<u32>, BracketError> {
    if !is_supported_size(max_teams) {
        return Err(BracketError::UnsupportedSize(max_teams));
    }
    let mut rounds = vec![2];
    let mut round = 2;
    while round < max_teams {
        round *= 2;
        rounds.push(round);
    }
    Ok(rounds)
}

/// Slot fed by the winner of match `match_number` (1-based) in `round`. `None` for the final.
///
/// Match k feeds match ceil(k/2) of the next round; odd k takes slot A, even k slot B, so two
/// siblings never compete for the same slot.
pub fn next_slot_of(round: u32, match_number: u32) -> Option<NextSlot> {
    if round <= 2 {
        return None;
    }
    Some(NextSlot {
        round: round / 2,
        match_number: match_number.div_ceil(2),
        slot: feeder_slot(match_number),
    })
}

/// Slot of the next match written by the winner of match `match_number`: odd feeds A, even B.
pub fn feeder_slot(match_number: u32) -> Slot {
    if match_number % 2 == 1 {
        Slot::A
    } else {
        Slot::B
    }
}

/// Decide a match from its reported result.
///
/// Regulation score first; on a level score both tie-break scores must be present and differ.
/// Anything else is an `UndecidedDraw`, never an arbitrary pick.
pub fn decide_winner(result: &MatchResult) -> Result<Decision, BracketError> {
    if let Some(decision) = compare(result.score_a, result.score_b) {
        return Ok(decision);
    }
    match (result.tie_break_a, result.tie_break_b) {
        (Some(a), Some(b)) => compare(a, b).ok_or(BracketError::UndecidedDraw),
        _ => Err(BracketError::UndecidedDraw),
    }
}

fn compare(a: u32, b: u32) -> Option<Decision> {
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => Some(Decision::A),
        std::cmp::Ordering::Less => Some(Decision::B),
        std::cmp::Ordering::Equal => None,
    }
}
