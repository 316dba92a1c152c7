//! In-crate test tree
//!
//! Database behaviour and end-to-end resolution over a real SQLite store.

mod database;
mod integration;
