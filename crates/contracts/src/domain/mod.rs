pub mod match_result;
pub mod player;
pub mod team;
