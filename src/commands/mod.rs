//! Command implementations for the hoopstat CLI

pub mod players;
pub mod route;
pub mod seasons;
pub mod shots;
