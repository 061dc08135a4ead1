pub mod aggregate;

pub use aggregate::{strip_league_prefix, MatchResult};
