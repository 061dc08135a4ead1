//! Route model shared by the router and the history payloads.

pub mod parser;
pub mod route;

pub use parser::parse_location;
pub use route::{placeholder_team_name, NavigationEntry, Route, HOME_TITLE};
