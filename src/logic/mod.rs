//! Bracket engine: generation, result submission and the rules they share.

mod bracket;
mod result;
mod rules;
mod view;

pub use bracket::{generate_bracket, plan_bracket, Draw, GenerateOptions, KeepOrder, RandomDraw};
pub use result::submit_match_result;
pub use rules::{
    decide_winner, feeder_slot, is_supported_size, next_slot_of, round_sizes, Decision, NextSlot,
};
pub use view::{bracket_rounds, champion, round_name, Round};
