pub mod components;
pub mod config;
pub mod data;
pub mod dom;
pub mod icons;
pub mod list_utils;
pub mod tasks;
