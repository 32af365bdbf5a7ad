//! Flag-guessing quiz engine.
//!
//! Fetches a country directory from GeoNames, assembles multiple-choice
//! rounds (four countries, one correct, a derived flag-image key), scores
//! answers and keeps the cumulative score in a durable local store. The
//! binary in `main.rs` wires these pieces into an interactive terminal quiz.

pub mod config;
pub mod directory;
pub mod quiz;
pub mod score;
pub mod session;
