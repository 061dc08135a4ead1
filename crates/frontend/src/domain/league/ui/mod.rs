pub mod cards;
pub mod overview;
pub mod placeholder;
