pub mod api;
pub mod classifier;
pub mod config;
pub mod logic;
pub mod models;
