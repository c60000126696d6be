//! Mamãe Fit - a pregnancy and postpartum fitness companion for the terminal.
//!
//! The library holds the screen state machine, the renderers and the
//! simulated AI generator server so integration tests and benchmarks can
//! drive them without a real terminal.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod client;
pub mod error;
pub mod generators;
pub mod input;
pub mod models;
pub mod schema;
pub mod server;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
