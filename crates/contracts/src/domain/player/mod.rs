pub mod aggregate;

pub use aggregate::{normalize_position, PlayerRecord};
