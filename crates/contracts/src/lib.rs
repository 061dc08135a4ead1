//! Data model shared by the volleyball database frontend: leagues, tabs,
//! routes, history payloads and the records served by the upstream API.

pub mod domain;
pub mod enums;
pub mod routing;
pub mod shared;
