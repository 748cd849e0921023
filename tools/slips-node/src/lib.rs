//! JSON transport for the slips sales aggregator.
//!
//! The node generates one mock snapshot at startup and answers every request
//! by recomputing from it. There is no storage and nothing is cached.

pub mod api;
pub mod config;
