// src/tdnet/mod.rs
pub mod client;
pub mod date;
pub mod listing;
pub mod models;
