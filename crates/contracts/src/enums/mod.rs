pub mod league;
pub mod tab;

pub use league::LeagueId;
pub use tab::{TabId, DEFAULT_TAB};
