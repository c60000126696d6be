//! Trait abstractions for dependency injection and testability.
//!
//! - [`GeneratorApi`] - the three AI generator endpoints

pub mod generator;

pub use generator::GeneratorApi;
