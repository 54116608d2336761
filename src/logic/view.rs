//! Read-side helpers for displaying a generated bracket.

use crate::models::{Match, ParticipantId};
use serde::Serialize;

/// One tier of the bracket with its matches in match-number order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Round {
    pub round: u32,
    pub name: String,
    pub matches: Vec<Match>,
}

/// Display name for a round size.
pub fn round_name(round: u32) -> String {
    match round {
        2 => "Final".to_string(),
        4 => "Semi-final".to_string(),
        8 => "Quarter-final".to_string(),
        n => format!("Round of {}", n),
    }
}

/// Group a tournament's matches into rounds, first round first, final last.
pub fn bracket_rounds(matches: &[Match]) -> Vec<Round> {
    let mut sizes: Vec<u32> = matches.iter().map(|m| m.round).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.dedup();

    sizes
        .into_iter()
        .map(|round| {
            let mut round_matches: Vec<Match> = matches
                .iter()
                .filter(|m| m.round == round)
                .cloned()
                .collect();
            round_matches.sort_by_key(|m| m.match_number);
            Round {
                round,
                name: round_name(round),
                matches: round_matches,
            }
        })
        .collect()
}

/// Winner of the final once it is finished.
pub fn champion(matches: &[Match]) -> Option<ParticipantId> {
    matches
        .iter()
        .find(|m| m.is_final() && m.is_finished())
        .and_then(|m| m.winner_id)
}
