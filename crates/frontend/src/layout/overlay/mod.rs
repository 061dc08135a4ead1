pub mod overlay;

pub use overlay::LeagueOverlay;
