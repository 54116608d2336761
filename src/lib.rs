//! Single-elimination bracket engine: builds the knockout tree for a tournament's confirmed teams
//! and advances winners round by round until a champion emerges.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::Config;
pub use logic::{
    bracket_rounds, champion, decide_winner, generate_bracket, next_slot_of, plan_bracket,
    round_sizes, submit_match_result, Decision, Draw, GenerateOptions, KeepOrder, NextSlot,
    RandomDraw, Round,
};
pub use models::{
    BracketError, BracketStatus, Match, MatchId, MatchResult, MatchStatus, Missing, Outcome,
    Participant, ParticipantId, ParticipantStatus, Slot, StoreError, Tournament, TournamentId,
    SUPPORTED_SIZES,
};
pub use store::{BracketStore, MemoryStore, StoreTx};
