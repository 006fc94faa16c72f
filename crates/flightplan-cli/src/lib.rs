//! Flight planner CLI library.
//!
//! This crate provides the command-line helpers for the flight planner:
//! interactive path prompting and rendering of plan summaries.

pub mod output;
pub mod prompt;
