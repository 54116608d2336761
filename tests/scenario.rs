//! End-to-end runs: a four-team cup with a shootout final, and a full 32-team bracket.

use knockout_bracket::{
    bracket_rounds, champion, generate_bracket, submit_match_result, BracketError,
    GenerateOptions, KeepOrder, MatchResult, MatchStatus, MemoryStore, RandomDraw,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn four_team_cup_with_penalties() {
    let store = MemoryStore::new();
    let t = store.create_tournament("Parks Cup", 4).unwrap();
    let [a, b, c, d] = ["Athletic", "Borough", "City", "Dynamo"].map(|name| {
        let p = store.register_participant(t.id, name).unwrap();
        store.confirm_participant(t.id, p.id).unwrap();
        p.id
    });

    generate_bracket(&store, t.id, &mut KeepOrder, GenerateOptions::default()).unwrap();
    let matches = store.matches(t.id).unwrap();
    assert_eq!(matches.len(), 3);
    let (m1, m2, fin) = (&matches[0], &matches[1], &matches[2]);
    assert_eq!((m1.round, m1.match_number), (4, 1));
    assert_eq!((m1.team_a, m1.team_b), (Some(a), Some(b)));
    assert_eq!((m2.round, m2.match_number), (4, 2));
    assert_eq!((m2.team_a, m2.team_b), (Some(c), Some(d)));
    assert_eq!((fin.round, fin.match_number), (2, 1));
    assert_eq!((fin.team_a, fin.team_b), (None, None));
    assert_eq!(fin.next_match_id, None);
    assert_eq!(m1.next_match_id, Some(fin.id));
    assert_eq!(m2.next_match_id, Some(fin.id));

    submit_match_result(&store, t.id, m1.id, MatchResult::new(2, 1)).unwrap();
    let final_match = store.matches(t.id).unwrap().remove(2);
    assert_eq!(final_match.team_a, Some(a));

    let shootout = MatchResult::new(0, 0).with_tie_break(4, 3);
    submit_match_result(&store, t.id, m2.id, shootout).unwrap();
    let final_match = store.matches(t.id).unwrap().remove(2);
    assert_eq!((final_match.team_a, final_match.team_b), (Some(a), Some(c)));

    assert_eq!(
        submit_match_result(&store, t.id, fin.id, MatchResult::new(1, 1)),
        Err(BracketError::UndecidedDraw)
    );
    let final_match = store.matches(t.id).unwrap().remove(2);
    assert_eq!(final_match.status, MatchStatus::Scheduled);
    assert_eq!(final_match.winner_id, None);

    let decider = MatchResult::new(1, 1).with_tie_break(5, 4);
    submit_match_result(&store, t.id, fin.id, decider).unwrap();
    let matches = store.matches(t.id).unwrap();
    let final_match = &matches[2];
    assert_eq!(final_match.status, MatchStatus::Finished);
    assert_eq!(final_match.winner_id, Some(a));
    assert_eq!((final_match.tie_break_a, final_match.tie_break_b), (Some(5), Some(4)));
    assert_eq!(champion(&matches), Some(a));
}

#[test]
fn thirty_two_teams_play_down_to_one_champion() {
    let store = MemoryStore::new();
    let t = store.create_tournament("County Knockout", 32).unwrap();
    for i in 0..32 {
        let p = store.register_participant(t.id, format!("Club {i}")).unwrap();
        store.confirm_participant(t.id, p.id).unwrap();
    }
    let mut draw = RandomDraw(StdRng::seed_from_u64(2024));
    generate_bracket(&store, t.id, &mut draw, GenerateOptions::default()).unwrap();

    let mut rng = StdRng::seed_from_u64(11);
    let round_order: Vec<u32> = bracket_rounds(&store.matches(t.id).unwrap())
        .iter()
        .map(|r| r.round)
        .collect();
    assert_eq!(round_order, vec![32, 16, 8, 4, 2]);

    for round in round_order {
        let ids: Vec<_> = store
            .matches(t.id)
            .unwrap()
            .into_iter()
            .filter(|m| m.round == round)
            .map(|m| m.id)
            .collect();
        for id in ids {
            let score_a = rng.gen_range(0..4);
            let mut score_b = rng.gen_range(0..4);
            if score_b == score_a {
                score_b += 1;
            }
            submit_match_result(&store, t.id, id, MatchResult::new(score_a, score_b)).unwrap();
        }
    }

    let matches = store.matches(t.id).unwrap();
    assert!(matches.iter().all(|m| m.is_finished()));
    for m in &matches {
        let winner = m.winner_id.unwrap();
        assert!(m.team_a == Some(winner) || m.team_b == Some(winner));
    }
    let final_match = matches.iter().find(|m| m.round == 2).unwrap();
    assert_eq!(champion(&matches), final_match.winner_id);
}
