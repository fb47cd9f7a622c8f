//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement the core
//! use case: one clinical record in, one risk report out.

mod engine;

pub use engine::{evaluate, RiskService};
