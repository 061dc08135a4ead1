pub mod api;
pub mod error;
pub mod store;

pub use error::LoadError;
pub use store::{DataEvent, LeagueStore, LoadStatus};
