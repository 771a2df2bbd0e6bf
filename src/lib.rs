//! Trait-weighted relationship scoring.
//!
//! Users define weighted traits (and hard "No-Go" disqualifiers), rate people
//! against them and get back a bounded score, a category and network-wide
//! analytics. Everything is synchronous and recomputed on demand.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod telemetry;
