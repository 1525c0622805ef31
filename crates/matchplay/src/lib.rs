//! Difficulty policies and engine-vs-engine match running.
//!
//! This crate ties the engines together: [`policy`] maps difficulty tiers
//! to concrete engines, [`match_runner`] plays game series between tiers,
//! and [`results`] records and reports the outcomes.

pub mod match_runner;
pub mod policy;
pub mod results;

pub use match_runner::{quick_match, MatchConfig, MatchRunner};
pub use policy::{create_engine, recommend_move, search_limits, PolicyError};
pub use results::{GameOutcome, MatchResult, SeriesResults};
