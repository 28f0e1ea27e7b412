//! Year-recap aggregation of League match timelines.
//!
//! Turns per-match timeline events into heatmap points and per-minute
//! timeline series for a single player.

pub mod analysis;
pub mod api;
pub mod config;
pub mod corpus;
pub mod diagnostics;
pub mod display;
pub mod error;
pub mod logging;

pub use analysis::aggregator::{AggregationResult, Summary, TimelineAggregator};
pub use corpus::{FileCorpus, MatchCorpus};
pub use error::AppError;
