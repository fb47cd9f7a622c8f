//! Ports layer: Trait definitions for external capabilities.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the annotation engine and its external collaborators (the
//! trained classifier and the reference population statistics).

mod baseline;
mod classifier;

pub use baseline::{BaselineProvider, BASELINE_FEATURES};
pub use classifier::Classifier;
