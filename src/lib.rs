//! Time-windowed log search-and-collect engine.
//!
//! Answers one question on demand: which log files, across a set of watched
//! directories, were modified inside a given time window and belong to one of
//! a set of named services? Matches are staged as copies under a durable
//! output root. The host supplies a configuration payload at (re)construction
//! time and a query payload per invocation; everything else lives here.

pub mod config;
pub mod core;
pub mod engine;
pub mod utils;
