//! Application services

pub mod generation;

pub use generation::{GenerationConfig, GenerationService};
