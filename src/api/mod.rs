pub mod delivery;
pub mod fixtures;
pub mod models;
